/// Errors raised while loading a RAML document or validating a schema's shape.
///
/// Every variant is fatal to the invocation. `UnsupportedType` always names
/// the offending property so the user can find it in the source document.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SchemaError {
    /// The RAML document could not be found or parsed
    #[error("Failed to load RAML document: {0}")]
    Load(String),

    /// The requested named schema is absent from the loaded document
    #[error("Schema not found: {0}")]
    NotFound(String),

    /// The schema lacks a usable `properties` mapping or a property is malformed
    #[error("Invalid schema shape: {0}")]
    InvalidShape(String),

    /// A property's declared type is a composite shape rather than a primitive tag
    #[error("Unsupported type for property '{property}': {found}")]
    UnsupportedType { property: String, found: String },
}
