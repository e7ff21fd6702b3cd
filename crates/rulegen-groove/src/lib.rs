//! # rulegen-groove
//!
//! Turns the rules and graphs described with `rulegen-core` into the GXL
//! exchange files the GROOVE graph transformation tool consumes.
//!
//! GXL has no native node-label concept, so node labels, flags, and rule
//! aspects are all encoded as reflexive (self-loop) edges, and attributes
//! become synthetic value nodes. See [`encode`] for the full encoding rules.
//!
//! ```text
//! GraphRule / Graph      (rulegen-core)
//!     │  encode::rule_to_gxl / graph_to_gxl
//! Gxl tree               (nodes, edges, labels)
//!     │  layout::layout_graph (optional)
//!     │  Gxl::to_xml
//! <rule>.gpr / start.gst (writer, GtsBuilder)
//! ```

pub mod config;
pub mod encode;
pub mod error;
pub mod gts;
pub mod gxl;
pub mod layout;
pub mod writer;

pub use config::GtsConfig;
pub use encode::{graph_to_gxl, rule_to_gxl};
pub use error::{ConfigError, WriteError};
pub use gts::{GtsBuilder, START_GRAPH_FILE_NAME};
pub use gxl::{Gxl, GxlEdge, GxlElement, GxlGraph, GxlNode};
pub use layout::layout_graph;
pub use writer::{rule_file_name, write_graph, write_rules};
