//! # ramlgen
//!
//! Generates Doctrine-style entity scaffolding from RAML API specifications.
//! One invocation reads a RAML document, picks one named schema, maps its
//! property list to field descriptors, and writes the entity class (plus an
//! optional mapping configuration file and repository class) into a target
//! bundle directory.
//!
//! ## Core Components
//!
//! * `schema` - RAML document loading, shape validation, and the typed schema model
//! * `generator` - Field mapping and entity source rendering
//! * `error` - Error types and handling
//!
//! The pipeline is strictly linear and one-shot: load, select, map, render,
//! write. Nothing is cached or persisted across invocations.

pub mod error;
pub mod generator;
pub mod schema;

// Re-export main types for convenience
pub use error::{RamlGenError, RamlGenResult};
pub use generator::bundle::Bundle;
pub use generator::entity::{EntityGenerator, GenerationReport, MappingFormat};
pub use generator::fields::{map_fields, FieldDescriptor};
pub use schema::interpreter::RamlInterpreter;
pub use schema::types::{Property, PropertySpec, RamlDocument, SchemaBody, SchemaError};
