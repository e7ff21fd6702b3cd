//! Error types for rule and graph construction.

use crate::rule::Aspect;

/// Errors raised while building graphs and rules.
///
/// All of these are synchronous caller errors: the violating node or edge is
/// never inserted, earlier successful insertions remain, and the builder does
/// not retry or roll back.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// A required input was empty.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// `start_rule` was called with a name that is already finalized.
    #[error("a rule with the name \"{0}\" already exists")]
    DuplicateRule(String),

    /// `start_rule` was called while another rule is still open.
    #[error("rule \"{0}\" is still being built; finish it with build_rule first")]
    RuleInProgress(String),

    /// A building operation was called with no rule open.
    #[error("no rule in progress; call start_rule first")]
    NoActiveRule,

    /// A node identity was inserted into a second aspect class.
    #[error("node {node} already contained as a {existing} node")]
    NodeAspectConflict { node: String, existing: Aspect },

    /// An edge endpoint is not visible in the required scope of the rule.
    #[error("{endpoint} node {node} not contained in the rule")]
    DanglingEndpoint {
        /// `source` or `target`.
        endpoint: &'static str,
        node: String,
    },
}
