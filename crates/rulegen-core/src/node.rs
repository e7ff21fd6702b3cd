//! Attributed nodes.

use crate::id::{IdAllocator, NodeId};
use crate::value::Value;
use std::cell::RefCell;
use std::rc::Rc;

/// A node in a graph or rule.
///
/// `Node` is a cheap-clone handle: the rule that contains a node and the
/// edges that end in it all alias the same underlying data, so flags and
/// attributes added through any handle are visible everywhere. Identity and
/// name are fixed at construction; flags and attributes may be added at any
/// time afterwards.
#[derive(Debug, Clone)]
pub struct Node {
    inner: Rc<NodeInner>,
}

#[derive(Debug)]
struct NodeInner {
    id: NodeId,
    name: String,
    /// Insertion-ordered, deduplicated.
    flags: RefCell<Vec<String>>,
    /// Insertion-ordered; re-adding a name replaces the value in place.
    attributes: RefCell<Vec<(String, Value)>>,
}

impl Node {
    /// Create a node with a fresh identity from the session allocator.
    pub fn new(ids: &IdAllocator, name: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(NodeInner {
                id: ids.next_node_id(),
                name: name.into(),
                flags: RefCell::new(Vec::new()),
                attributes: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.inner.id
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Add a boolean flag. Duplicates are ignored; first insertion wins the
    /// position.
    pub fn add_flag(&self, flag: impl Into<String>) {
        let flag = flag.into();
        let mut flags = self.inner.flags.borrow_mut();
        if !flags.contains(&flag) {
            flags.push(flag);
        }
    }

    /// Add a typed attribute. Re-adding a name replaces the value but keeps
    /// the original position.
    pub fn add_attribute(&self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        let mut attributes = self.inner.attributes.borrow_mut();
        match attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => attributes.push((name, value)),
        }
    }

    /// Snapshot of the flags in insertion order.
    pub fn flags(&self) -> Vec<String> {
        self.inner.flags.borrow().clone()
    }

    /// Snapshot of the attributes in insertion order.
    pub fn attributes(&self) -> Vec<(String, Value)> {
        self.inner.attributes.borrow().clone()
    }
}

/// Nodes compare by identity, like the ids that key the rule maps.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Node {}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner.name)
    }
}
