// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// Longest index path any entity kind needs
pub const MAX_DEPTH: usize = 4;

/// Indices of one entity instance, one per repeated hop from the root.
///
/// Fixed capacity so paths are `Copy` and can key the last-access cache
/// without allocating. Unused slots are always zero, which keeps the derived
/// `Eq`/`Hash` consistent with `as_slice()`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IndexPath {
    len: u8,
    indices: [usize; MAX_DEPTH],
}

impl IndexPath {
    pub const ROOT: IndexPath = IndexPath {
        len: 0,
        indices: [0; MAX_DEPTH],
    };

    /// Returns `None` when `indices` is longer than `MAX_DEPTH`.
    pub fn new(indices: &[usize]) -> Option<Self> {
        if indices.len() > MAX_DEPTH {
            return None;
        }
        let mut path = Self::ROOT;
        path.indices[..indices.len()].copy_from_slice(indices);
        path.len = indices.len() as u8;
        Some(path)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.indices[..self.len()]
    }

    pub fn len(&self) -> usize {
        usize::from(self.len)
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn last(&self) -> Option<usize> {
        self.as_slice().last().copied()
    }

    /// Path with the last index removed
    pub fn parent(&self) -> Self {
        let mut parent = *self;
        if let Some(last) = self.len().checked_sub(1) {
            parent.indices[last] = 0;
            parent.len -= 1;
        }
        parent
    }

    /// Path extended by one index; `None` when already at `MAX_DEPTH`.
    pub fn child(&self, index: usize) -> Option<Self> {
        let len = self.len();
        if len == MAX_DEPTH {
            return None;
        }
        let mut child = *self;
        child.indices[len] = index;
        child.len += 1;
        Some(child)
    }
}

impl fmt::Debug for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_slice())
    }
}
