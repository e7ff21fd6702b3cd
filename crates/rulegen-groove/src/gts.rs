//! Assembling a full graph transformation system on disk.
//!
//! A GROOVE grammar is a directory `<name>.gps/` holding a start graph
//! (`start.gst`), one `.gpr` file per rule, and a `system.properties` file.

use crate::config::GtsConfig;
use crate::error::WriteError;
use crate::writer;
use rulegen_core::{GraphBuilder, IdAllocator, RuleBuilder};
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// File name of the start graph inside a grammar directory.
pub const START_GRAPH_FILE_NAME: &str = "start.gst";

/// The start graph name referenced from `system.properties`.
const START_GRAPH_NAME: &str = "start";

/// Builder for a graph transformation system: start graph, rules, and the
/// properties file.
///
/// The start-graph builder and the rule builder share one session allocator,
/// so identities stay distinct across everything written into one grammar.
#[derive(Debug)]
pub struct GtsBuilder {
    name: String,
    layout: bool,
    properties: Vec<(String, String)>,
    ids: Rc<IdAllocator>,
    start_graph: GraphBuilder,
    rules: RuleBuilder,
}

impl GtsBuilder {
    pub fn new() -> Self {
        let ids = IdAllocator::new_session();
        Self {
            name: String::new(),
            layout: false,
            properties: Vec::new(),
            start_graph: GraphBuilder::with_allocator(ids.clone()),
            rules: RuleBuilder::with_allocator(ids.clone()),
            ids,
        }
    }

    /// Create a builder preconfigured from a [`GtsConfig`].
    pub fn from_config(config: &GtsConfig) -> Self {
        let mut builder = Self::new();
        builder.name(&config.name).layout(config.layout);
        for (key, value) in &config.properties {
            builder.add_property(key, value);
        }
        builder
    }

    /// Set the grammar name; the output directory becomes `<name>.gps`.
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    /// Whether to assign grid layout coordinates.
    pub fn layout(&mut self, layout: bool) -> &mut Self {
        self.layout = layout;
        self
    }

    /// Add an entry for `system.properties`, kept in insertion order.
    pub fn add_property(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.properties.push((key.into(), value.into()));
        self
    }

    /// The builder for the start graph.
    pub fn start_graph(&mut self) -> &mut GraphBuilder {
        &mut self.start_graph
    }

    /// The builder for the rules.
    pub fn rules(&mut self) -> &mut RuleBuilder {
        &mut self.rules
    }

    /// Write the whole system (start graph, properties, rules) into a fresh
    /// `<name>.gps` directory under `target_dir`. An existing directory of
    /// that name is emptied first.
    pub fn write_gts(&self, target_dir: &Path) -> Result<PathBuf, WriteError> {
        if self.name.is_empty() {
            return Err(WriteError::MissingName);
        }
        let dir = target_dir.join(format!("{}.gps", self.name));
        recreate_dir(&dir)?;
        tracing::debug!(dir = %dir.display(), "writing graph transformation system");

        self.write_start_graph(&dir)?;
        self.write_properties_file(&dir)?;
        self.write_rules(&dir)?;

        Ok(dir)
    }

    /// Write only the rules into `target_dir`.
    pub fn write_rules(&self, target_dir: &Path) -> Result<(), WriteError> {
        writer::write_rules(target_dir, self.rules.rules(), &self.ids, self.layout)
    }

    /// Write only the start graph into `target_dir`.
    pub fn write_start_graph(&self, target_dir: &Path) -> Result<(), WriteError> {
        writer::write_graph(
            target_dir,
            START_GRAPH_FILE_NAME,
            &self.start_graph.build(),
            &self.ids,
            self.layout,
        )
    }

    /// Write only the `system.properties` file into `target_dir`.
    pub fn write_properties_file(&self, target_dir: &Path) -> Result<(), WriteError> {
        let timestamp = chrono::Local::now().format("%d/%m/%Y %H:%M:%S");
        let mut additional = String::new();
        for (key, value) in &self.properties {
            additional.push_str(key);
            additional.push('=');
            additional.push_str(value);
            additional.push('\n');
        }
        let content = format!(
            "# {timestamp} (generated by rulegen)\n\
             location={}\n\
             startGraph={START_GRAPH_NAME}\n\
             {additional}grooveVersion=6.1.0\n\
             grammarVersion=3.7",
            target_dir.display(),
        );
        let file = target_dir.join("system.properties");
        fs::write(&file, content).map_err(WriteError::io(file))
    }
}

impl Default for GtsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Make sure `dir` exists and is empty.
fn recreate_dir(dir: &Path) -> Result<(), WriteError> {
    if dir.exists() {
        fs::remove_dir_all(dir).map_err(WriteError::io(dir))?;
    }
    fs::create_dir_all(dir).map_err(WriteError::io(dir))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_gts() -> GtsBuilder {
        let mut gts = GtsBuilder::new();
        gts.name("demo").add_property("typeGraph", "types");

        let start = gts.start_graph();
        start.name("start");
        start.node("node").unwrap();

        let rules = gts.rules();
        rules.start_rule("addNode").unwrap();
        rules.add_node("node").unwrap();
        rules.build_rule().unwrap();

        gts
    }

    #[test]
    fn write_gts_produces_the_full_directory() {
        let target = tempfile::tempdir().unwrap();
        let dir = sample_gts().write_gts(target.path()).unwrap();

        assert_eq!(dir, target.path().join("demo.gps"));
        assert!(dir.join(START_GRAPH_FILE_NAME).is_file());
        assert!(dir.join("system.properties").is_file());
        assert!(dir.join("addNode.gpr").is_file());
    }

    #[test]
    fn properties_file_carries_all_entries() {
        let target = tempfile::tempdir().unwrap();
        let dir = sample_gts().write_gts(target.path()).unwrap();

        let properties = fs::read_to_string(dir.join("system.properties")).unwrap();
        assert!(properties.starts_with("# "));
        assert!(properties.contains(&format!("location={}\n", dir.display())));
        assert!(properties.contains("startGraph=start\n"));
        assert!(properties.contains("typeGraph=types\n"));
        assert!(properties.contains("grooveVersion=6.1.0\n"));
        assert!(properties.ends_with("grammarVersion=3.7"));
    }

    #[test]
    fn rewriting_cleans_stale_files() {
        let target = tempfile::tempdir().unwrap();
        let dir = sample_gts().write_gts(target.path()).unwrap();
        fs::write(dir.join("stale.gpr"), "old").unwrap();

        let dir = sample_gts().write_gts(target.path()).unwrap();
        assert!(!dir.join("stale.gpr").exists());
        assert!(dir.join("addNode.gpr").is_file());
    }

    #[test]
    fn missing_name_is_rejected() {
        let target = tempfile::tempdir().unwrap();
        let err = GtsBuilder::new().write_gts(target.path()).unwrap_err();
        assert!(matches!(err, WriteError::MissingName));
    }

    #[test]
    fn from_config_applies_everything() {
        let config = GtsConfig::from_toml_str(
            "name = \"demo\"\nlayout = true\n[properties]\ntypeGraph = \"types\"",
        )
        .unwrap();
        let gts = GtsBuilder::from_config(&config);
        assert_eq!(gts.name, "demo");
        assert!(gts.layout);
        assert_eq!(
            gts.properties,
            vec![("typeGraph".to_string(), "types".to_string())]
        );
    }
}
