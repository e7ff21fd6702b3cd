//! Rule synchronization: parallel composition of finished rules.

use crate::error::RuleError;
use crate::id::{IdAllocator, NodeId};
use crate::node::Node;
use crate::rule::GraphRule;
use crate::rule_builder::RuleBuilder;
use std::collections::HashMap;
use std::rc::Rc;

/// Compose groups of independently built rules into synchronized rules.
///
/// Each group `(name, rules)` becomes one rule named `name` that represents
/// all of its contributors firing together atomically. Contributors are
/// replayed in ascending rule-name order so the result is reproducible
/// regardless of how the group was collected; the replay runs on a fresh
/// builder, so the synchronized rules get a fresh identity space starting at
/// `n0`. That session allocator is returned alongside the rules: encoding
/// the synced rules must draw further ids from it, not from a new one.
///
/// Only add/delete nodes and add/delete edges of the contributors propagate.
/// Context nodes are replayed so add/delete edges can resolve their
/// endpoints, but context edges and the NAC parts stay rule-local. A delete
/// edge whose endpoint was only a NAC node in its contributor therefore
/// surfaces as [`RuleError::DanglingEndpoint`].
pub fn create_synced_rules(
    groups: impl IntoIterator<Item = (String, Vec<GraphRule>)>,
) -> Result<(Vec<GraphRule>, Rc<IdAllocator>), RuleError> {
    let mut builder = RuleBuilder::new();

    for (synced_name, mut rules) in groups {
        builder.start_rule(synced_name)?;
        rules.sort_by(|a, b| a.name().cmp(b.name()));

        for rule in &rules {
            let mut old_id_to_new_node: HashMap<NodeId, Node> = HashMap::new();

            for add_node in rule.nodes_to_add() {
                let created = builder.add_node(add_node.name())?;
                old_id_to_new_node.insert(add_node.id().clone(), created);
            }
            for del_node in rule.nodes_to_delete() {
                let created = builder.delete_node(del_node.name())?;
                old_id_to_new_node.insert(del_node.id().clone(), created);
            }
            for context_node in rule.context_nodes() {
                let created = builder.context_node(context_node.name())?;
                old_id_to_new_node.insert(context_node.id().clone(), created);
            }

            for add_edge in rule.edges_to_add() {
                let source = replayed(&old_id_to_new_node, add_edge.source(), "source")?;
                let target = replayed(&old_id_to_new_node, add_edge.target(), "target")?;
                builder.add_edge(add_edge.name(), source, target)?;
            }
            for del_edge in rule.edges_to_delete() {
                let source = replayed(&old_id_to_new_node, del_edge.source(), "source")?;
                let target = replayed(&old_id_to_new_node, del_edge.target(), "target")?;
                builder.delete_edge(del_edge.name(), source, target)?;
            }
        }

        builder.build_rule()?;
    }

    let rules = builder.rules().cloned().collect();
    Ok((rules, builder.allocator().clone()))
}

fn replayed<'a>(
    mapping: &'a HashMap<NodeId, Node>,
    old: &Node,
    endpoint: &'static str,
) -> Result<&'a Node, RuleError> {
    mapping.get(old.id()).ok_or(RuleError::DanglingEndpoint {
        endpoint,
        node: old.name().to_string(),
    })
}
