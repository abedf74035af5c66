// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Cross-references between entities.
//!
//! A reference names its target by `ID` rather than by tree position. Setting
//! one scans every node of the target kind reachable from the root, in
//! document order; when nothing matches, a stub carrying only the identifier
//! is appended so that forward references always resolve. Stubs go under the
//! first existing parent of the target kind (`Instrument [0]` for a detector),
//! which is created when the tree has none.
//!
//! TODO: the scan is linear in the number of target nodes; an ID index kept
//! beside the cache would make this constant time for large screens.

use crate::error::{Error, Result};
use crate::node::NodeRef;
use crate::schema::{EntityKind, FieldDef, FieldKind};
use crate::store::MetadataStore;
use crate::value::Value;

const ID: &str = "ID";

impl MetadataStore {
    /// Links the entity at `indices` to the `target` entity whose ID is `id`.
    ///
    /// `None` is a no-op. Fails only when `field` is not a reference field.
    pub fn set_reference(&mut self, field: &FieldDef, id: Option<&str>, indices: &[usize]) -> Result<()> {
        reference_target(field)?;
        if let Some(id) = id {
            self.link(field, id, indices);
        }
        Ok(())
    }

    /// The entity the reference at `indices` points to, if both exist
    pub fn follow_reference(&self, field: &FieldDef, indices: &[usize]) -> Result<Option<NodeRef>> {
        let target = reference_target(field)?;
        let Some(Value::Text(id)) = self.read(field, indices) else {
            return Ok(None);
        };
        Ok(find_by_id(self.root(), target, &id))
    }

    /// The first `kind` entity reachable from the root with the given ID
    pub fn find_by_id(&self, kind: EntityKind, id: &str) -> Option<NodeRef> {
        find_by_id(self.root(), kind, id)
    }

    pub(crate) fn link(&mut self, field: &FieldDef, id: &str, indices: &[usize]) {
        let FieldKind::Reference(target) = field.kind else {
            return;
        };
        if !self.accepts(field) {
            return;
        }
        let Some(source) = self.locate_for_write(field.entity, indices) else {
            return;
        };
        if find_by_id(self.root(), target, id).is_none() {
            let Some(parent) = self.stub_parent(target) else {
                return;
            };
            let stub = parent.append_child(target);
            stub.set_attribute(ID, Value::Text(id.to_string()));
            diagnostics::log_debug!(
                "created {target} stub {id} for {field}",
                target: target.name(),
                id: id,
                field: field.qualified_name()
            );
        }
        source.set_attribute(field.name, Value::Text(id.to_string()));
    }

    fn stub_parent(&self, target: EntityKind) -> Option<NodeRef> {
        let parent_kind = target.parent()?;
        if let Some(parent) = reachable(self.root(), parent_kind).into_iter().next() {
            return Some(parent);
        }
        self.locate_for_write(parent_kind, &vec![0; parent_kind.depth()])
    }
}

fn reference_target(field: &FieldDef) -> Result<EntityKind> {
    match field.kind {
        FieldKind::Reference(target) => Ok(target),
        FieldKind::Scalar(_) => Err(Error::NotAReference {
            field: field.qualified_name(),
        }),
    }
}

/// Every `kind` node under `root`, in document order
fn reachable(root: &NodeRef, kind: EntityKind) -> Vec<NodeRef> {
    let mut lineage = Vec::new();
    let mut step = kind;
    while let Some(parent) = step.parent() {
        lineage.push(step);
        step = parent;
    }

    let mut frontier = vec![root.clone()];
    for step in lineage.into_iter().rev() {
        frontier = frontier.iter().flat_map(|node| node.children(step)).collect();
    }
    frontier
}

fn find_by_id(root: &NodeRef, kind: EntityKind, id: &str) -> Option<NodeRef> {
    reachable(root, kind)
        .into_iter()
        .find(|node| node.attribute(ID).as_ref().and_then(Value::as_text) == Some(id))
}
