//! Aspect-aware encoding of graphs and rules into the GXL tree.
//!
//! GXL has no node labels, so every node gets a reflexive edge carrying its
//! display name, one more reflexive edge per flag, and (for rules) one
//! reflexive edge carrying the aspect marker — except context nodes, which
//! get none. Attributes become synthetic value nodes labeled
//! `<kind>:<display>` (`int:5`, `string:"hi"`, `bool:true`), linked from the
//! owning node by an edge labeled with the attribute name. Synthetic nodes
//! draw ids from the same node allocator as ordinary nodes.
//!
//! Emission order is part of the contract: rules emit their node classes in
//! ADD, DELETE, CONTEXT, FORBID order, then their edge classes in the same
//! order, so regenerated files are byte-identical.

use crate::gxl::{Gxl, GxlGraph};
use rulegen_core::{Aspect, Graph, GraphRule, IdAllocator, Node};

const ASPECT_ORDER: [Aspect; 4] = [
    Aspect::Add,
    Aspect::Delete,
    Aspect::Context,
    Aspect::Forbid,
];

/// Encode a plain graph (no aspects).
pub fn graph_to_gxl(graph: &Graph, ids: &IdAllocator) -> Gxl {
    let mut gxl_graph = GxlGraph::standard(graph.name());

    for node in graph.nodes() {
        encode_node(&mut gxl_graph, node, ids);
    }
    for edge in graph.edges() {
        gxl_graph.add_edge(
            edge.source().id().as_str(),
            edge.target().id().as_str(),
            edge.name(),
        );
    }

    wrap(gxl_graph)
}

/// Encode a rule: plain-graph node handling plus aspect markers.
pub fn rule_to_gxl(rule: &GraphRule, ids: &IdAllocator) -> Gxl {
    let mut gxl_graph = GxlGraph::standard(rule.name());

    for aspect in ASPECT_ORDER {
        for node in rule.nodes_in(aspect) {
            encode_node(&mut gxl_graph, node, ids);
            if aspect != Aspect::Context {
                let id = node.id().as_str();
                gxl_graph.add_edge(id, id, aspect.marker());
            }
        }
    }
    for aspect in ASPECT_ORDER {
        for edge in rule.edges_in(aspect) {
            gxl_graph.add_edge(
                edge.source().id().as_str(),
                edge.target().id().as_str(),
                format!("{}{}", aspect.marker(), edge.name()),
            );
        }
    }

    wrap(gxl_graph)
}

/// A node becomes: the gxl node, a name self-loop, a self-loop per flag,
/// and a value node + edge per attribute.
fn encode_node(gxl_graph: &mut GxlGraph, node: &Node, ids: &IdAllocator) {
    let id = node.id().as_str().to_string();
    gxl_graph.add_node(id.clone());
    gxl_graph.add_edge(id.clone(), id.clone(), node.name());

    for flag in node.flags() {
        gxl_graph.add_edge(id.clone(), id.clone(), flag);
    }

    for (name, value) in node.attributes() {
        let value_node_id = ids.next_node_id();
        gxl_graph.add_node(value_node_id.as_str());
        gxl_graph.add_edge(
            value_node_id.as_str(),
            value_node_id.as_str(),
            format!("{}:{}", value.kind(), value),
        );
        gxl_graph.add_edge(id.clone(), value_node_id.as_str(), name);
    }
}

fn wrap(gxl_graph: GxlGraph) -> Gxl {
    let mut gxl = Gxl::new();
    gxl.graphs.push(gxl_graph);
    gxl
}
