//! Error types for the terminal front end.

/// Top-level error for the `dungeon` binary.
///
/// Each variant wraps a specific failure so `run` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: dungeon_core::config::ConfigError,
    },

    /// An action broke a game invariant.
    #[error("action error: {source}")]
    Action {
        /// The underlying action error.
        #[from]
        source: dungeon_core::ActionError,
    },

    /// Reading commands or writing reports failed.
    #[error("terminal I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
