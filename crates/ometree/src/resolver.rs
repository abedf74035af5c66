// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Path resolution: `(kind, index path)` to node.
//!
//! Resolution is recursive through the slot's parent kind, so a miss on a
//! deep slot re-uses whatever the ancestor slots still have cached. With
//! `create = false` nothing is ever added to the tree; with `create = true`
//! every missing ancestor is synthesized and repeated lists are extended
//! densely up to the requested index.

use crate::cache::LastAccessCache;
use crate::node::NodeRef;
use crate::path::IndexPath;
use crate::schema::{Cardinality, EntityKind};

pub(crate) struct Resolver<'a> {
    root: &'a NodeRef,
    cache: &'a LastAccessCache,
}

impl<'a> Resolver<'a> {
    pub(crate) fn new(root: &'a NodeRef, cache: &'a LastAccessCache) -> Self {
        Self { root, cache }
    }

    /// Returns the node at `path`, or `None` if it does not exist and
    /// `create` is false. A path of the wrong arity for `kind` is absent.
    pub(crate) fn resolve(&self, kind: EntityKind, path: &IndexPath, create: bool) -> Option<NodeRef> {
        let parent_kind = match kind.parent() {
            Some(parent_kind) => parent_kind,
            None => return path.is_empty().then(|| self.root.clone()),
        };
        if path.len() != kind.depth() {
            return None;
        }
        if let Some(node) = self.cache.lookup(kind, path) {
            return Some(node);
        }

        let node = match kind.cardinality() {
            Cardinality::Repeated => {
                let index = path.last()?;
                let parent = self.resolve(parent_kind, &path.parent(), create)?;
                repeated_child(&parent, kind, index, create)?
            }
            Cardinality::Singleton => {
                let parent = self.resolve(parent_kind, path, create)?;
                singleton_child(&parent, kind, create)?
            }
        };
        self.cache.store(kind, *path, node.clone());
        Some(node)
    }

    /// Number of `kind` children under the parent at `parent_path`
    pub(crate) fn count(&self, kind: EntityKind, parent_path: &IndexPath) -> usize {
        kind.parent()
            .and_then(|parent_kind| self.resolve(parent_kind, parent_path, false))
            .map_or(0, |parent| parent.child_count(kind))
    }

    /// Count by probing indices 0, 1, 2, ... with `create = false`, giving up
    /// at `limit`.
    pub(crate) fn probe_count(&self, kind: EntityKind, parent_path: &IndexPath, limit: usize) -> usize {
        for i in 0..limit {
            let Some(path) = parent_path.child(i) else {
                return 0;
            };
            if self.resolve(kind, &path, false).is_none() {
                return i;
            }
        }
        diagnostics::log_warn!(
            "{kind} probe stopped at {limit} under {parent}",
            kind: kind.name(),
            limit: limit,
            parent: parent_path.to_string()
        );
        limit
    }
}

fn repeated_child(parent: &NodeRef, kind: EntityKind, index: usize, create: bool) -> Option<NodeRef> {
    let count = parent.child_count(kind);
    if count <= index {
        if !create {
            return None;
        }
        for _ in count..=index {
            _ = parent.append_child(kind);
        }
        diagnostics::log_debug!(
            "extended {kind} list from {count} to {len}",
            kind: kind.name(),
            count: count,
            len: index + 1
        );
    }
    parent.child(kind, index)
}

fn singleton_child(parent: &NodeRef, kind: EntityKind, create: bool) -> Option<NodeRef> {
    if let Some(child) = parent.child(kind, 0) {
        return Some(child);
    }
    if !create {
        return None;
    }
    diagnostics::log_debug!("created {kind}", kind: kind.name());
    Some(parent.append_child(kind))
}
