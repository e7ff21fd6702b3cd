//! The rule builder: a single-active-rule session over a shared allocator.

use crate::edge::Edge;
use crate::error::RuleError;
use crate::id::IdAllocator;
use crate::node::Node;
use crate::rule::{Aspect, GraphRule};
use std::rc::Rc;

/// Builds graph transformation rules, one at a time.
///
/// The builder is an explicit two-state machine: `Idle` (no current rule)
/// and `Building`. `start_rule` and `build_rule` are the only transitions,
/// and misuse (double start, building ops while idle) is a defined error,
/// not undefined behavior.
///
/// Finalized rules land in a registry in registration order; names are
/// unique because `start_rule` rejects duplicates.
#[derive(Debug)]
pub struct RuleBuilder {
    ids: Rc<IdAllocator>,
    rules: Vec<GraphRule>,
    current: Option<GraphRule>,
}

impl RuleBuilder {
    /// Create a builder with its own session allocator.
    pub fn new() -> Self {
        Self::with_allocator(IdAllocator::new_session())
    }

    /// Create a builder sharing an existing session allocator.
    pub fn with_allocator(ids: Rc<IdAllocator>) -> Self {
        Self {
            ids,
            rules: Vec::new(),
            current: None,
        }
    }

    /// The session allocator of this builder.
    pub fn allocator(&self) -> &Rc<IdAllocator> {
        &self.ids
    }

    /// Open a new rule. `Idle → Building`.
    pub fn start_rule(&mut self, name: impl Into<String>) -> Result<(), RuleError> {
        let name = name.into();
        if name.is_empty() {
            return Err(RuleError::InvalidArgument(
                "rule name must not be empty".to_string(),
            ));
        }
        if let Some(current) = &self.current {
            return Err(RuleError::RuleInProgress(current.name().to_string()));
        }
        if self.rules.iter().any(|r| r.name() == name) {
            return Err(RuleError::DuplicateRule(name));
        }
        self.current = Some(GraphRule::new(name));
        Ok(())
    }

    /// The current rule must exist in the context of the graph.
    pub fn context_node(&mut self, name: impl Into<String>) -> Result<Node, RuleError> {
        self.fresh_node(Aspect::Context, name)
    }

    /// The current rule adds this node.
    pub fn add_node(&mut self, name: impl Into<String>) -> Result<Node, RuleError> {
        self.fresh_node(Aspect::Add, name)
    }

    /// The current rule deletes this node.
    pub fn delete_node(&mut self, name: impl Into<String>) -> Result<Node, RuleError> {
        self.fresh_node(Aspect::Delete, name)
    }

    /// The current rule must not apply if this node exists (NAC).
    pub fn nac_node(&mut self, name: impl Into<String>) -> Result<Node, RuleError> {
        self.fresh_node(Aspect::Forbid, name)
    }

    /// The current rule adds an edge. Endpoints must be context or added
    /// nodes of the current rule.
    pub fn add_edge(
        &mut self,
        name: impl Into<String>,
        source: &Node,
        target: &Node,
    ) -> Result<(), RuleError> {
        let rule = self.current.as_ref().ok_or(RuleError::NoActiveRule)?;
        let source = rule
            .context_and_added_node(source.id())
            .ok_or_else(|| dangling("source", source))?;
        let target = rule
            .context_and_added_node(target.id())
            .ok_or_else(|| dangling("target", target))?;
        self.fresh_edge(Aspect::Add, name, source, target);
        Ok(())
    }

    /// The current rule deletes an edge. Endpoints may be any node of the
    /// current rule.
    pub fn delete_edge(
        &mut self,
        name: impl Into<String>,
        source: &Node,
        target: &Node,
    ) -> Result<(), RuleError> {
        self.edge_over_all_nodes(Aspect::Delete, name, source, target)
    }

    /// The current rule requires an edge. Endpoints may be any node of the
    /// current rule.
    pub fn context_edge(
        &mut self,
        name: impl Into<String>,
        source: &Node,
        target: &Node,
    ) -> Result<(), RuleError> {
        self.edge_over_all_nodes(Aspect::Context, name, source, target)
    }

    /// The current rule must not apply if this edge exists (NAC). Endpoints
    /// may be any node of the current rule.
    pub fn nac_edge(
        &mut self,
        name: impl Into<String>,
        source: &Node,
        target: &Node,
    ) -> Result<(), RuleError> {
        self.edge_over_all_nodes(Aspect::Forbid, name, source, target)
    }

    /// Finalize the current rule. `Building → Idle`.
    pub fn build_rule(&mut self) -> Result<GraphRule, RuleError> {
        let rule = self.current.take().ok_or(RuleError::NoActiveRule)?;
        self.rules.push(rule.clone());
        Ok(rule)
    }

    /// All finalized rules in registration order. Pure read, restartable.
    pub fn rules(&self) -> impl Iterator<Item = &GraphRule> {
        self.rules.iter()
    }

    fn fresh_node(&mut self, aspect: Aspect, name: impl Into<String>) -> Result<Node, RuleError> {
        let rule = self.current.as_mut().ok_or(RuleError::NoActiveRule)?;
        let node = Node::new(&self.ids, name);
        rule.insert_node(aspect, node.clone())?;
        Ok(node)
    }

    fn edge_over_all_nodes(
        &mut self,
        aspect: Aspect,
        name: impl Into<String>,
        source: &Node,
        target: &Node,
    ) -> Result<(), RuleError> {
        let rule = self.current.as_ref().ok_or(RuleError::NoActiveRule)?;
        let source = rule
            .any_node(source.id())
            .ok_or_else(|| dangling("source", source))?;
        let target = rule
            .any_node(target.id())
            .ok_or_else(|| dangling("target", target))?;
        self.fresh_edge(aspect, name, source, target);
        Ok(())
    }

    fn fresh_edge(&mut self, aspect: Aspect, name: impl Into<String>, source: Node, target: Node) {
        let edge = Edge::new(&self.ids, name, source, target);
        // State checked by the callers; the current rule exists here.
        if let Some(rule) = self.current.as_mut() {
            rule.insert_edge(aspect, edge);
        }
    }
}

impl Default for RuleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn dangling(endpoint: &'static str, node: &Node) -> RuleError {
    RuleError::DanglingEndpoint {
        endpoint,
        node: node.name().to_string(),
    }
}
