//! Error types for writing grammars and loading configuration.

use std::path::PathBuf;

/// Errors raised while writing rule/graph files or assembling a grammar
/// directory.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// An I/O failure, annotated with the path involved.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The graph transformation system has no name to derive its directory
    /// from.
    #[error("graph transformation system name must not be empty")]
    MissingName,
}

impl WriteError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}

/// Errors raised while loading a [`crate::GtsConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid GTS config: {0}")]
    Parse(#[from] toml::de::Error),
}
