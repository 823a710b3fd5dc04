//! RAML document loading, shape validation, and the typed schema model.
//!
//! The document is handled as loosely-typed YAML exactly once, inside the
//! interpreter/validator boundary. Everything downstream of this module
//! consumes the typed model and cannot hit a missing-key error.

pub mod interpreter;
pub mod types;
pub mod validator;

pub use interpreter::RamlInterpreter;

// Re-export all types at the schema module level
pub use types::{Property, PropertySpec, RamlDocument, SchemaBody, SchemaError};

/// Result type for schema loading and validation operations
pub type Result<T> = std::result::Result<T, SchemaError>;
