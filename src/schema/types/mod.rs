pub mod errors;
pub mod schema;

pub use errors::SchemaError;
pub use schema::{Property, PropertySpec, RamlDocument, SchemaBody};
