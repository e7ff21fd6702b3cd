//! Plain named graphs and their builder.

use crate::edge::Edge;
use crate::error::RuleError;
use crate::id::IdAllocator;
use crate::node::Node;
use std::rc::Rc;

/// An immutable named graph: insertion-ordered node and edge sets.
///
/// Every edge's endpoints are members of `nodes`. The builder guarantees
/// this for the edges it creates; constructing a graph directly leaves it to
/// the caller.
#[derive(Debug, Clone)]
pub struct Graph {
    name: String,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new(name: impl Into<String>, nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self {
            name: name.into(),
            nodes,
            edges,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The union of two graphs: set union of nodes and edges by identity,
    /// named by the resolver.
    ///
    /// Precondition (unchecked): node identities of the two graphs are
    /// distinct, e.g. because both were built from one session allocator.
    /// Overlapping identities produce no meaningful union.
    pub fn union(&self, other: &Graph, name_resolver: impl Fn(&str, &str) -> String) -> Graph {
        let mut nodes = self.nodes.clone();
        for node in &other.nodes {
            if !nodes.contains(node) {
                nodes.push(node.clone());
            }
        }
        let mut edges = self.edges.clone();
        for edge in &other.edges {
            if !edges.contains(edge) {
                edges.push(edge.clone());
            }
        }
        Graph::new(name_resolver(&self.name, &other.name), nodes, edges)
    }
}

/// Builder for plain graphs (start graphs).
#[derive(Debug)]
pub struct GraphBuilder {
    ids: Rc<IdAllocator>,
    name: String,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Create a builder with its own session allocator.
    pub fn new() -> Self {
        Self::with_allocator(IdAllocator::new_session())
    }

    /// Create a builder sharing an existing session allocator.
    pub fn with_allocator(ids: Rc<IdAllocator>) -> Self {
        Self {
            ids,
            name: String::new(),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// The session allocator of this builder.
    pub fn allocator(&self) -> &Rc<IdAllocator> {
        &self.ids
    }

    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    /// Create a node with the given name and add it to the graph. Rejects
    /// empty names, like [`GraphBuilder::add_node`].
    pub fn node(&mut self, name: impl Into<String>) -> Result<Node, RuleError> {
        let node = Node::new(&self.ids, name);
        self.add_node(node.clone())?;
        Ok(node)
    }

    /// Add an existing node. Rejects nodes with an empty name.
    pub fn add_node(&mut self, node: Node) -> Result<&mut Self, RuleError> {
        if node.name().is_empty() {
            return Err(RuleError::InvalidArgument(
                "node must have a non-empty name".to_string(),
            ));
        }
        if !self.nodes.contains(&node) {
            self.nodes.push(node);
        }
        Ok(self)
    }

    /// Add an edge, implicitly adding both endpoints first.
    pub fn add_edge(
        &mut self,
        name: impl Into<String>,
        source: &Node,
        target: &Node,
    ) -> Result<&mut Self, RuleError> {
        self.add_node(source.clone())?;
        self.add_node(target.clone())?;
        self.edges
            .push(Edge::new(&self.ids, name, source.clone(), target.clone()));
        Ok(self)
    }

    /// Snapshot the current state into a graph. Later builder mutation does
    /// not affect graphs already built.
    pub fn build(&self) -> Graph {
        Graph::new(self.name.clone(), self.nodes.clone(), self.edges.clone())
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edge_implicitly_adds_endpoints() {
        let mut builder = GraphBuilder::new();
        let ids = builder.allocator().clone();
        builder.name("graph");
        let a = Node::new(&ids, "A");
        let b = Node::new(&ids, "B");
        builder.add_edge("A to B", &a, &b).unwrap();

        let graph = builder.build();
        assert_eq!(graph.name(), "graph");
        assert_eq!(graph.nodes().len(), 2);
        assert_eq!(graph.edges().len(), 1);
        assert_eq!(graph.edges()[0].source(), &a);
        assert_eq!(graph.edges()[0].target(), &b);
    }

    #[test]
    fn empty_node_name_is_rejected() {
        let mut builder = GraphBuilder::new();
        let ids = builder.allocator().clone();
        let err = builder.add_node(Node::new(&ids, "")).unwrap_err();
        assert!(matches!(err, RuleError::InvalidArgument(_)));

        let err = builder.node("").unwrap_err();
        assert!(matches!(err, RuleError::InvalidArgument(_)));
        assert!(builder.build().nodes().is_empty());
    }

    #[test]
    fn build_is_a_snapshot() {
        let mut builder = GraphBuilder::new();
        builder.name("graph");
        builder.node("A").unwrap();
        let first = builder.build();
        builder.node("B").unwrap();
        let second = builder.build();

        assert_eq!(first.nodes().len(), 1);
        assert_eq!(second.nodes().len(), 2);
    }

    #[test]
    fn union_of_disjoint_graphs_merges_both_sets() {
        // One shared allocator keeps identities disjoint across both graphs.
        let ids = IdAllocator::new_session();

        let mut left = GraphBuilder::with_allocator(ids.clone());
        left.name("left");
        let a = left.node("A").unwrap();
        let b = left.node("B").unwrap();
        left.add_edge("A to B", &a, &b).unwrap();

        let mut right = GraphBuilder::with_allocator(ids);
        right.name("right");
        let c = right.node("C").unwrap();
        right.add_edge("C to C", &c, &c).unwrap();

        let union = left
            .build()
            .union(&right.build(), |l, r| format!("{l}+{r}"));
        assert_eq!(union.name(), "left+right");
        assert_eq!(union.nodes().len(), 3);
        assert_eq!(union.edges().len(), 2);
    }

    #[test]
    fn union_deduplicates_shared_members() {
        let mut builder = GraphBuilder::new();
        builder.name("g");
        let a = builder.node("A").unwrap();
        let graph = builder.build();

        let other = Graph::new("h", vec![a], vec![]);
        let union = graph.union(&other, |l, _| l.to_string());
        assert_eq!(union.nodes().len(), 1);
    }
}
