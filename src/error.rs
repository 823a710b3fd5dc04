use crate::schema::types::SchemaError;
use std::io;

/// Unified error type for the entire application.
///
/// Every failure in the pipeline is fatal to the invocation; there is no
/// partial-success mode and no retry anywhere. This type centralizes the
/// categories so the binary can map any of them to a descriptive message
/// and a non-zero exit.
#[derive(Debug, thiserror::Error)]
pub enum RamlGenError {
    /// Errors related to loading, validating, or selecting schemas
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Errors related to the target bundle (name, namespace, location)
    #[error("Bundle error: {0}")]
    Bundle(String),

    /// Errors related to entity generation (conflicts, rendering)
    #[error("Generator error: {0}")]
    Generator(String),

    /// Errors related to IO operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for operations that can result in a `RamlGenError`
pub type RamlGenResult<T> = Result<T, RamlGenError>;
