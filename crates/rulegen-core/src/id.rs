//! Identity allocation for nodes and edges.
//!
//! One allocator per description session, shared by the graph builder, the
//! rule builder, and the encoder (synthetic attribute nodes continue the
//! node sequence). Node ids and edge ids are separate namespaces.
//!
//! The allocator is deliberately not `Sync`: the whole description API is a
//! single-threaded, single-writer affair. Share it with `Rc`.

use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::rc::Rc;

/// Opaque identifier for a node (`n0`, `n1`, …).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier for an edge (`0`, `1`, …).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub String);

impl EdgeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic id allocator for one description session.
///
/// Counters hold the last-used value and start at `-1`, so the first
/// allocations are `n0` and `0`. Ids are never reused while the allocator
/// lives; the reset operations exist only to make generated output
/// reproducible across independent runs (tests, regeneration).
#[derive(Debug)]
pub struct IdAllocator {
    node_counter: Cell<i64>,
    edge_counter: Cell<i64>,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self {
            node_counter: Cell::new(-1),
            edge_counter: Cell::new(-1),
        }
    }
}

impl IdAllocator {
    /// Create a fresh allocator behind an `Rc`, ready to share between the
    /// builders of one session.
    pub fn new_session() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Allocate the next node id.
    pub fn next_node_id(&self) -> NodeId {
        let next = self.node_counter.get() + 1;
        self.node_counter.set(next);
        NodeId(format!("n{next}"))
    }

    /// Allocate the next edge id.
    pub fn next_edge_id(&self) -> EdgeId {
        let next = self.edge_counter.get() + 1;
        self.edge_counter.set(next);
        EdgeId(next.to_string())
    }

    /// Rewind the node counter so the next allocation is `value + 1`.
    ///
    /// Test/regeneration use only. Must not race allocation — the allocator
    /// is single-writer by contract.
    pub fn reset_node_counter(&self, value: i64) {
        self.node_counter.set(value);
    }

    /// Rewind the edge counter so the next allocation is `value + 1`.
    ///
    /// Test/regeneration use only.
    pub fn reset_edge_counter(&self, value: i64) {
        self.edge_counter.set(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_ids_increase_monotonically() {
        let ids = IdAllocator::default();
        assert_eq!(ids.next_node_id().as_str(), "n0");
        assert_eq!(ids.next_node_id().as_str(), "n1");
        assert_eq!(ids.next_node_id().as_str(), "n2");
    }

    #[test]
    fn edge_ids_are_a_separate_namespace() {
        let ids = IdAllocator::default();
        ids.next_node_id();
        assert_eq!(ids.next_edge_id().as_str(), "0");
        assert_eq!(ids.next_edge_id().as_str(), "1");
        assert_eq!(ids.next_node_id().as_str(), "n1");
    }

    #[test]
    fn reset_rewinds_the_sequence() {
        let ids = IdAllocator::default();
        ids.next_node_id();
        ids.next_node_id();
        ids.reset_node_counter(-1);
        assert_eq!(ids.next_node_id().as_str(), "n0");
    }
}
