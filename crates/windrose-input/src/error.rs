//! Error types for binding-table ingestion and rebinding.

use thiserror::Error;

/// Input-mapping errors.
///
/// Per-frame evaluation never returns these; unknown actions, controls,
/// and devices all resolve to neutral defaults. Errors only come out of
/// table ingestion and [`rebind`](crate::InputMapper::rebind).
#[derive(Error, Debug)]
pub enum Error {
    /// Binding-table document did not match the schema.
    #[error("malformed binding table: {0}")]
    MalformedTable(String),

    /// Two actions in one document share an id.
    #[error("duplicate action id: {0}")]
    DuplicateAction(String),

    /// Rebind target does not exist in the loaded table.
    #[error("unknown action: {0}")]
    UnknownAction(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
