//! Grid layout for GXL nodes.
//!
//! GROOVE accepts an optional `layout` attribute (`"<x> <y> 0 0"`) per node.
//! The grid here is intentionally simple: nodes in emission order, four per
//! row. It only has to be deterministic, not pretty — GROOVE reflows rules
//! when they are opened in its editor.

use crate::gxl::{GxlElement, GxlGraph};

const NODES_PER_ROW: usize = 4;
const CELL_WIDTH: i32 = 150;
const CELL_HEIGHT: i32 = 75;
const ORIGIN_X: i32 = 20;
const ORIGIN_Y: i32 = 20;

/// Assign grid positions to every node of the graph.
pub fn layout_graph(graph: &mut GxlGraph) {
    let mut index = 0usize;
    for element in &mut graph.elements {
        if let GxlElement::Node(node) = element {
            let column = (index % NODES_PER_ROW) as i32;
            let row = (index / NODES_PER_ROW) as i32;
            let x = ORIGIN_X + column * CELL_WIDTH;
            let y = ORIGIN_Y + row * CELL_HEIGHT;
            node.layout = Some(format!("{x} {y} 0 0"));
            index += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nodes_flow_through_the_grid() {
        let mut graph = GxlGraph::standard("g");
        for i in 0..6 {
            graph.add_node(format!("n{i}"));
            graph.add_edge(format!("n{i}"), format!("n{i}"), "label");
        }
        layout_graph(&mut graph);

        let layouts: Vec<_> = graph
            .nodes()
            .map(|n| n.layout.clone().unwrap())
            .collect();
        assert_eq!(
            layouts,
            [
                "20 20 0 0",
                "170 20 0 0",
                "320 20 0 0",
                "470 20 0 0",
                "20 95 0 0",
                "170 95 0 0",
            ]
        );
    }
}
