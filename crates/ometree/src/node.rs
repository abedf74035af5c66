// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::{Ref, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::schema::EntityKind;
use crate::value::Value;

/// Unique identifier for a node in the metadata tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeID(usize);

impl NodeID {
    /// Generate a new sequential NodeID
    pub fn new_sequential() -> Self {
        use std::sync::atomic::{AtomicUsize, Ordering};
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for NodeID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}", self.0)
    }
}

/// One entity instance: attributes plus child lists keyed by kind.
///
/// Singleton children are stored as lists of length at most one.
pub struct Element {
    id: NodeID,
    kind: EntityKind,
    attributes: BTreeMap<String, Value>,
    children: BTreeMap<EntityKind, Vec<NodeRef>>,
    parent: Weak<RefCell<Element>>,
}

/// A handle for a refcounted element.
///
/// Parents own their children; the link back to the parent is weak.
#[derive(Clone)]
pub struct NodeRef(Rc<RefCell<Element>>);

impl NodeRef {
    /// Creates a detached node with no attributes and no children
    pub fn new(kind: EntityKind) -> Self {
        Self(Rc::new(RefCell::new(Element {
            id: NodeID::new_sequential(),
            kind,
            attributes: BTreeMap::new(),
            children: BTreeMap::new(),
            parent: Weak::new(),
        })))
    }

    pub fn id(&self) -> NodeID {
        self.0.borrow().id
    }

    pub fn kind(&self) -> EntityKind {
        self.0.borrow().kind
    }

    pub fn parent(&self) -> Option<NodeRef> {
        self.0.borrow().parent.upgrade().map(NodeRef)
    }

    pub fn attribute(&self, name: &str) -> Option<Value> {
        self.0.borrow().attributes.get(name).cloned()
    }

    pub fn set_attribute<S: Into<String>>(&self, name: S, value: Value) {
        _ = self.0.borrow_mut().attributes.insert(name.into(), value);
    }

    /// Borrow of every attribute, in name order
    pub fn attributes(&self) -> Ref<'_, BTreeMap<String, Value>> {
        Ref::map(self.0.borrow(), |e| &e.attributes)
    }

    pub fn child_count(&self, kind: EntityKind) -> usize {
        self.0.borrow().children.get(&kind).map_or(0, Vec::len)
    }

    pub fn child(&self, kind: EntityKind, index: usize) -> Option<NodeRef> {
        self.0
            .borrow()
            .children
            .get(&kind)
            .and_then(|list| list.get(index))
            .cloned()
    }

    /// Snapshot of the children of one kind
    pub fn children(&self, kind: EntityKind) -> Vec<NodeRef> {
        self.0
            .borrow()
            .children
            .get(&kind)
            .cloned()
            .unwrap_or_default()
    }

    /// Kinds that currently have at least one child, in kind order
    pub fn child_kinds(&self) -> Vec<EntityKind> {
        self.0
            .borrow()
            .children
            .iter()
            .filter(|(_, list)| !list.is_empty())
            .map(|(kind, _)| *kind)
            .collect()
    }

    /// Creates an empty child of `kind` at the end of its list
    pub fn append_child(&self, kind: EntityKind) -> NodeRef {
        let child = NodeRef::new(kind);
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0
            .borrow_mut()
            .children
            .entry(kind)
            .or_default()
            .push(child.clone());
        child
    }

    /// Identity comparison: true when both handles point at one element
    pub fn same_node(&self, other: &NodeRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.same_node(other)
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(e) => write!(f, "{}#{}", e.kind, e.id),
            Err(_) => write!(f, "(node being modified)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_links_parent() {
        let root = NodeRef::new(EntityKind::Ome);
        let image = root.append_child(EntityKind::Image);
        assert_eq!(image.parent(), Some(root.clone()));
        assert_eq!(root.child_count(EntityKind::Image), 1);
        assert_eq!(root.child(EntityKind::Image, 0), Some(image));
        assert_eq!(root.child(EntityKind::Image, 1), None);
        assert_eq!(root.child_count(EntityKind::Group), 0);
    }

    #[test]
    fn test_parent_link_is_weak() {
        let image = {
            let root = NodeRef::new(EntityKind::Ome);
            root.append_child(EntityKind::Image)
        };
        assert_eq!(image.parent(), None);
    }

    #[test]
    fn test_attributes() {
        let node = NodeRef::new(EntityKind::Pixels);
        assert_eq!(node.attribute("SizeX"), None);
        node.set_attribute("SizeX", Value::Int(512));
        node.set_attribute("SizeX", Value::Int(1024));
        assert_eq!(node.attribute("SizeX"), Some(Value::Int(1024)));
        assert_eq!(node.attributes().len(), 1);
    }

    #[test]
    fn test_identity_not_structure() {
        let a = NodeRef::new(EntityKind::Group);
        let b = NodeRef::new(EntityKind::Group);
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
        assert_ne!(a.id(), b.id());
    }
}
