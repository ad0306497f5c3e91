use thiserror::Error;

/// Crate-wide error type. Every variant is terminal for the action that
/// raised it; the client never retries or downgrades a failure to an empty
/// report.
#[derive(Debug, Error)]
pub enum SolauditError {
    /// Analyzer service unreachable or responded with a non-success status.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Malformed or invariant-violating report. The message names the
    /// failing field or path.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Input rejected before any request was sent (size limit, extension).
    #[error("Unsupported input: {0}")]
    UnsupportedInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
