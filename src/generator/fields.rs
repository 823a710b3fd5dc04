use crate::schema::types::SchemaBody;
use serde::Serialize;

/// The normalized (name, type, identifier-flag) triple the entity renderers
/// consume. Renderers have no notion of RAML; this is their whole input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Field identifier, taken directly from the property key
    pub name: String,

    /// Declared type, copied verbatim from the property spec
    #[serde(rename = "type")]
    pub type_tag: String,

    /// Always `false` for mapped fields; the synthetic identity field is the
    /// renderer's responsibility
    pub is_identifier: bool,
}

/// Maps a schema's property list to the ordered field-descriptor list.
///
/// A property named exactly `id` is dropped: the renderers always emit a
/// synthetic identity field themselves, and a schema-declared one would
/// produce a duplicate, conflicting definition. Every other property yields
/// one descriptor, in declaration order. The schema's `required` set is not
/// consulted.
///
/// Pure and stateless; shape errors are impossible here because the schema
/// already passed the validation boundary.
#[must_use]
pub fn map_fields(schema: &SchemaBody) -> Vec<FieldDescriptor> {
    schema
        .properties
        .iter()
        .filter(|property| property.name != "id")
        .map(|property| FieldDescriptor {
            name: property.name.clone(),
            type_tag: property.spec.type_tag.clone(),
            is_identifier: false,
        })
        .collect()
}
