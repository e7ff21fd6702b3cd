//! Edges between attributed nodes.

use crate::id::{EdgeId, IdAllocator};
use crate::node::Node;

/// A directed edge. Immutable once constructed.
///
/// An edge carries no aspect of its own — the aspect is supplied by the rule
/// class the edge is filed under, not stored redundantly here.
#[derive(Debug, Clone)]
pub struct Edge {
    id: EdgeId,
    name: String,
    source: Node,
    target: Node,
}

impl Edge {
    /// Create an edge with a fresh identity from the session allocator.
    pub fn new(ids: &IdAllocator, name: impl Into<String>, source: Node, target: Node) -> Self {
        Self {
            id: ids.next_edge_id(),
            name: name.into(),
            source,
            target,
        }
    }

    pub fn id(&self) -> &EdgeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &Node {
        &self.source
    }

    pub fn target(&self) -> &Node {
        &self.target
    }
}

/// Edges compare by identity, like nodes.
impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Edge {}
