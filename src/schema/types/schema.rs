use super::errors::SchemaError;
use serde::Serialize;

/// A loaded RAML document, reduced to its `schemas` section.
///
/// Schemas keep the order they were declared in; property order inside each
/// schema is likewise the declaration order, because the generator renders
/// fields in the order supplied and regenerated output must diff cleanly.
#[derive(Debug, Clone, Serialize)]
pub struct RamlDocument {
    pub schemas: Vec<(String, SchemaBody)>,
}

impl RamlDocument {
    /// Looks up a schema by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SchemaBody> {
        self.schemas
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, body)| body)
    }

    /// Looks up a schema by name, failing with the list of names that are present.
    ///
    /// # Errors
    /// Returns `SchemaError::NotFound` if no schema with that name was declared.
    pub fn schema(&self, name: &str) -> Result<&SchemaBody, SchemaError> {
        self.get(name).ok_or_else(|| {
            SchemaError::NotFound(format!(
                "'{}' (document declares: {})",
                name,
                self.schema_names().join(", ")
            ))
        })
    }

    /// Names of all declared schemas, in declaration order.
    #[must_use]
    pub fn schema_names(&self) -> Vec<&str> {
        self.schemas.iter().map(|(n, _)| n.as_str()).collect()
    }
}

/// One named resource's shape as declared in the source document.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaBody {
    /// Type tag of the schema itself; `"object"` for entities this tool handles
    pub type_tag: String,

    /// Free text, informational only; never consumed by the mapper
    pub description: Option<String>,

    /// Declared properties, in source order, names unique within the schema
    pub properties: Vec<Property>,

    /// Names of properties instances must carry. Parsed and retained but not
    /// propagated to field descriptors; generated columns are all nullable.
    pub required: Vec<String>,
}

/// One property declaration: a name and its spec.
#[derive(Debug, Clone, Serialize)]
pub struct Property {
    pub name: String,
    pub spec: PropertySpec,
}

/// One property's declared shape.
#[derive(Debug, Clone, Serialize)]
pub struct PropertySpec {
    /// Primitive type tag (`"string"`, `"integer"`, ...), passed through
    /// verbatim to the output field descriptor
    pub type_tag: String,
}
