//! Graph transformation rules and the aspect partition invariant.

use crate::edge::Edge;
use crate::error::RuleError;
use crate::id::NodeId;
use crate::node::Node;
use serde::{Deserialize, Serialize};

/// The role a node or edge plays in a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aspect {
    /// Added to the graph when the rule fires.
    Add,
    /// Deleted from the graph when the rule fires.
    Delete,
    /// Must be present for the rule to apply.
    Context,
    /// Must be absent for the rule to apply (NAC).
    Forbid,
}

impl Aspect {
    /// The GROOVE label marker for this aspect (empty for context).
    pub fn marker(self) -> &'static str {
        match self {
            Aspect::Add => "new:",
            Aspect::Delete => "del:",
            Aspect::Context => "",
            Aspect::Forbid => "not:",
        }
    }
}

impl std::fmt::Display for Aspect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Aspect::Add => "to-be-added",
            Aspect::Delete => "to-be-deleted",
            Aspect::Context => "context",
            Aspect::Forbid => "NAC",
        };
        write!(f, "{text}")
    }
}

/// A named graph transformation rule.
///
/// Nodes are partitioned into the four aspect classes; a node identity lives
/// in at most one class, enforced at insertion. Edge classes are independent
/// (edge identities are unique by construction and never re-filed).
///
/// Rules are built through [`crate::RuleBuilder`] and immutable once
/// finalized.
#[derive(Debug, Clone)]
pub struct GraphRule {
    name: String,
    add_nodes: Vec<Node>,
    delete_nodes: Vec<Node>,
    context_nodes: Vec<Node>,
    forbid_nodes: Vec<Node>,
    add_edges: Vec<Edge>,
    delete_edges: Vec<Edge>,
    context_edges: Vec<Edge>,
    forbid_edges: Vec<Edge>,
}

impl GraphRule {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            add_nodes: Vec::new(),
            delete_nodes: Vec::new(),
            context_nodes: Vec::new(),
            forbid_nodes: Vec::new(),
            add_edges: Vec::new(),
            delete_edges: Vec::new(),
            context_edges: Vec::new(),
            forbid_edges: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The aspect class currently holding the given node identity.
    pub fn aspect_of(&self, id: &NodeId) -> Option<Aspect> {
        for aspect in [Aspect::Add, Aspect::Delete, Aspect::Context, Aspect::Forbid] {
            if self.nodes_in(aspect).iter().any(|n| n.id() == id) {
                return Some(aspect);
            }
        }
        None
    }

    /// Insert a node into an aspect class, enforcing the partition
    /// invariant: an identity already held by another class is rejected and
    /// nothing changes.
    pub(crate) fn insert_node(&mut self, aspect: Aspect, node: Node) -> Result<(), RuleError> {
        if let Some(existing) = self.aspect_of(node.id()) {
            if existing == aspect {
                // Same identity, same class: nothing to do.
                return Ok(());
            }
            return Err(RuleError::NodeAspectConflict {
                node: node.name().to_string(),
                existing,
            });
        }
        self.nodes_in_mut(aspect).push(node);
        Ok(())
    }

    /// File an edge under an aspect class. Endpoint containment is the
    /// builder's responsibility.
    pub(crate) fn insert_edge(&mut self, aspect: Aspect, edge: Edge) {
        self.edges_in_mut(aspect).push(edge);
    }

    /// Nodes of one aspect class, in insertion order.
    pub fn nodes_in(&self, aspect: Aspect) -> &[Node] {
        match aspect {
            Aspect::Add => &self.add_nodes,
            Aspect::Delete => &self.delete_nodes,
            Aspect::Context => &self.context_nodes,
            Aspect::Forbid => &self.forbid_nodes,
        }
    }

    /// Edges of one aspect class, in insertion order.
    pub fn edges_in(&self, aspect: Aspect) -> &[Edge] {
        match aspect {
            Aspect::Add => &self.add_edges,
            Aspect::Delete => &self.delete_edges,
            Aspect::Context => &self.context_edges,
            Aspect::Forbid => &self.forbid_edges,
        }
    }

    pub fn nodes_to_add(&self) -> &[Node] {
        &self.add_nodes
    }

    pub fn nodes_to_delete(&self) -> &[Node] {
        &self.delete_nodes
    }

    pub fn context_nodes(&self) -> &[Node] {
        &self.context_nodes
    }

    pub fn nac_nodes(&self) -> &[Node] {
        &self.forbid_nodes
    }

    pub fn edges_to_add(&self) -> &[Edge] {
        &self.add_edges
    }

    pub fn edges_to_delete(&self) -> &[Edge] {
        &self.delete_edges
    }

    pub fn context_edges(&self) -> &[Edge] {
        &self.context_edges
    }

    pub fn nac_edges(&self) -> &[Edge] {
        &self.forbid_edges
    }

    /// Resolve an identity against the context ∪ added view (the scope for
    /// new edges).
    pub fn context_and_added_node(&self, id: &NodeId) -> Option<Node> {
        self.add_nodes
            .iter()
            .chain(&self.context_nodes)
            .find(|n| n.id() == id)
            .cloned()
    }

    /// Resolve an identity against all four classes (the scope for delete,
    /// context, and NAC edges).
    pub fn any_node(&self, id: &NodeId) -> Option<Node> {
        self.delete_nodes
            .iter()
            .chain(&self.add_nodes)
            .chain(&self.context_nodes)
            .chain(&self.forbid_nodes)
            .find(|n| n.id() == id)
            .cloned()
    }

    /// All nodes of the rule: delete, add, context, forbid.
    pub fn all_nodes(&self) -> impl Iterator<Item = &Node> {
        self.delete_nodes
            .iter()
            .chain(&self.add_nodes)
            .chain(&self.context_nodes)
            .chain(&self.forbid_nodes)
    }

    fn nodes_in_mut(&mut self, aspect: Aspect) -> &mut Vec<Node> {
        match aspect {
            Aspect::Add => &mut self.add_nodes,
            Aspect::Delete => &mut self.delete_nodes,
            Aspect::Context => &mut self.context_nodes,
            Aspect::Forbid => &mut self.forbid_nodes,
        }
    }

    fn edges_in_mut(&mut self, aspect: Aspect) -> &mut Vec<Edge> {
        match aspect {
            Aspect::Add => &mut self.add_edges,
            Aspect::Delete => &mut self.delete_edges,
            Aspect::Context => &mut self.context_edges,
            Aspect::Forbid => &mut self.forbid_edges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::IdAllocator;

    #[test]
    fn node_classes_are_disjoint() {
        let ids = IdAllocator::default();
        let mut rule = GraphRule::new("rule");
        let node = Node::new(&ids, "node");
        rule.insert_node(Aspect::Add, node.clone()).unwrap();

        let err = rule.insert_node(Aspect::Delete, node.clone()).unwrap_err();
        assert!(
            matches!(&err, RuleError::NodeAspectConflict { node, existing }
                if node == "node" && *existing == Aspect::Add)
        );

        // The failed insertion left the rule unchanged.
        assert_eq!(rule.nodes_to_add().len(), 1);
        assert!(rule.nodes_to_delete().is_empty());
        assert_eq!(rule.aspect_of(node.id()), Some(Aspect::Add));
    }

    #[test]
    fn every_second_class_is_rejected() {
        let ids = IdAllocator::default();
        for first in [Aspect::Add, Aspect::Delete, Aspect::Context, Aspect::Forbid] {
            for second in [Aspect::Add, Aspect::Delete, Aspect::Context, Aspect::Forbid] {
                if first == second {
                    continue;
                }
                let mut rule = GraphRule::new("rule");
                let node = Node::new(&ids, "node");
                rule.insert_node(first, node.clone()).unwrap();
                let err = rule.insert_node(second, node).unwrap_err();
                assert!(
                    matches!(err, RuleError::NodeAspectConflict { existing, .. } if existing == first)
                );
            }
        }
    }

    #[test]
    fn lookup_views_cover_the_right_classes() {
        let ids = IdAllocator::default();
        let mut rule = GraphRule::new("rule");
        let added = Node::new(&ids, "added");
        let context = Node::new(&ids, "context");
        let deleted = Node::new(&ids, "deleted");
        let nac = Node::new(&ids, "nac");
        rule.insert_node(Aspect::Add, added.clone()).unwrap();
        rule.insert_node(Aspect::Context, context.clone()).unwrap();
        rule.insert_node(Aspect::Delete, deleted.clone()).unwrap();
        rule.insert_node(Aspect::Forbid, nac.clone()).unwrap();

        assert!(rule.context_and_added_node(added.id()).is_some());
        assert!(rule.context_and_added_node(context.id()).is_some());
        assert!(rule.context_and_added_node(deleted.id()).is_none());
        assert!(rule.context_and_added_node(nac.id()).is_none());

        for node in [&added, &context, &deleted, &nac] {
            assert!(rule.any_node(node.id()).is_some());
        }
    }

    #[test]
    fn aspect_markers() {
        assert_eq!(Aspect::Add.marker(), "new:");
        assert_eq!(Aspect::Delete.marker(), "del:");
        assert_eq!(Aspect::Context.marker(), "");
        assert_eq!(Aspect::Forbid.marker(), "not:");
    }
}
