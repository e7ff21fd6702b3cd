//! # rulegen-core
//!
//! The in-memory model for graph transformation rules: typed, attributed
//! graphs plus rules that partition their nodes and edges into the four
//! GROOVE aspects (add, delete, context, forbid).
//!
//! This crate is **pure description**: it performs no pattern matching, no
//! rewriting, and no graph traversal. It only builds the rule/graph objects
//! an encoder turns into the exchange format consumed by an external graph
//! transformation engine.
//!
//! ## Architecture
//!
//! ```text
//! IdAllocator            ← one id space per description session
//!     │
//! Node / Edge / Value    ← attributed value objects
//!     │
//! Graph  ← GraphBuilder  ← plain named graphs (start graphs)
//!     │
//! GraphRule ← RuleBuilder ← aspect-partitioned rules
//!     │
//! create_synced_rules    ← parallel composition of finished rules
//! ```
//!
//! All of it is single-threaded by design: the allocator is a single-writer
//! resource shared by the builders of one session.

pub mod edge;
pub mod error;
pub mod graph;
pub mod id;
pub mod node;
pub mod rule;
pub mod rule_builder;
pub mod sync;
pub mod value;

pub use edge::Edge;
pub use error::RuleError;
pub use graph::{Graph, GraphBuilder};
pub use id::{EdgeId, IdAllocator, NodeId};
pub use node::Node;
pub use rule::{Aspect, GraphRule};
pub use rule_builder::RuleBuilder;
pub use sync::create_synced_rules;
pub use value::Value;
