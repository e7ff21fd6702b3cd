//! File emission: one `.gpr` per rule, `.gst` for graphs.

use crate::encode::{graph_to_gxl, rule_to_gxl};
use crate::error::WriteError;
use crate::gxl::Gxl;
use crate::layout::layout_graph;
use rulegen_core::{Graph, GraphRule, IdAllocator};
use std::fs;
use std::path::Path;

/// The file name a rule is written under.
pub fn rule_file_name(rule_name: &str) -> String {
    format!("{rule_name}.gpr")
}

/// Write every rule to `dir`, optionally with grid layout.
pub fn write_rules<'a>(
    dir: &Path,
    rules: impl IntoIterator<Item = &'a GraphRule>,
    ids: &IdAllocator,
    layout: bool,
) -> Result<(), WriteError> {
    for rule in rules {
        let mut gxl = rule_to_gxl(rule, ids);
        let file = dir.join(rule_file_name(rule.name()));
        tracing::debug!(rule = rule.name(), file = %file.display(), "writing rule");
        write_gxl(&mut gxl, &file, layout)?;
    }
    Ok(())
}

/// Write a graph to `dir/file_name`, optionally with grid layout.
pub fn write_graph(
    dir: &Path,
    file_name: &str,
    graph: &Graph,
    ids: &IdAllocator,
    layout: bool,
) -> Result<(), WriteError> {
    let mut gxl = graph_to_gxl(graph, ids);
    let file = dir.join(file_name);
    tracing::debug!(graph = graph.name(), file = %file.display(), "writing graph");
    write_gxl(&mut gxl, &file, layout)
}

fn write_gxl(gxl: &mut Gxl, file: &Path, layout: bool) -> Result<(), WriteError> {
    if layout {
        for graph in &mut gxl.graphs {
            layout_graph(graph);
        }
    }
    fs::write(file, gxl.to_xml()).map_err(WriteError::io(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rulegen_core::{GraphBuilder, RuleBuilder};

    #[test]
    fn rules_land_in_their_own_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut builder = RuleBuilder::new();
        for name in ["first", "second"] {
            builder.start_rule(name).unwrap();
            builder.add_node("node").unwrap();
            builder.build_rule().unwrap();
        }

        write_rules(
            dir.path(),
            builder.rules(),
            builder.allocator(),
            false,
        )
        .unwrap();

        assert!(dir.path().join("first.gpr").is_file());
        assert!(dir.path().join("second.gpr").is_file());
    }

    #[test]
    fn graph_file_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut builder = GraphBuilder::new();
        builder.name("start");
        builder.node("node").unwrap();
        let graph = builder.build();

        write_graph(dir.path(), "start.gst", &graph, builder.allocator(), false).unwrap();

        let written = fs::read_to_string(dir.path().join("start.gst")).unwrap();
        assert!(written.contains("<graph id=\"start\""));
        assert!(written.contains("<node id=\"n0\"/>"));
    }

    #[test]
    fn missing_directory_surfaces_as_io_error() {
        let mut builder = GraphBuilder::new();
        builder.name("start");
        let graph = builder.build();

        let err = write_graph(
            Path::new("/nonexistent/dir"),
            "start.gst",
            &graph,
            builder.allocator(),
            false,
        )
        .unwrap_err();
        assert!(matches!(err, WriteError::Io { .. }));
    }
}
