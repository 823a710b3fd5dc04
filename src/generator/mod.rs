//! Field mapping and entity source rendering.
//!
//! `fields` turns a validated schema into the ordered field-descriptor list;
//! `entity` renders and writes the generated sources into a `bundle` target.

pub mod bundle;
pub mod entity;
pub mod fields;
pub mod render;

pub use bundle::Bundle;
pub use entity::{EntityGenerator, GenerationReport, MappingFormat};
pub use fields::{map_fields, FieldDescriptor};
