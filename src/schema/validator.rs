use crate::schema::types::{Property, PropertySpec, RamlDocument, SchemaBody, SchemaError};
use serde_yaml::Value;

/// Converts the loosely-typed YAML document into the typed schema model,
/// validating shapes eagerly so nothing downstream can hit a missing key.
pub struct SchemaValidator;

impl SchemaValidator {
    /// Validates a parsed RAML document and extracts its `schemas` section.
    ///
    /// # Errors
    /// Returns a `SchemaError` if:
    /// - The document root is not a mapping
    /// - The document declares no `schemas` section
    /// - Any schema body fails shape validation
    pub fn validate_document(doc: &Value) -> crate::schema::Result<RamlDocument> {
        if doc.as_mapping().is_none() {
            return Err(SchemaError::Load(format!(
                "document root is not a mapping (found {})",
                kind(doc)
            )));
        }

        let section = doc.get("schemas").ok_or_else(|| {
            SchemaError::InvalidShape("document declares no schemas section".to_string())
        })?;

        let mut schemas = Vec::new();
        for (name, body) in collect_schemas(section)? {
            if schemas.iter().any(|(n, _)| *n == name) {
                return Err(SchemaError::InvalidShape(format!(
                    "schema '{name}' is declared more than once"
                )));
            }
            let validated = Self::validate_schema(&name, &body)?;
            schemas.push((name, validated));
        }

        Ok(RamlDocument { schemas })
    }

    /// Validates one schema body against the shape the generator needs.
    ///
    /// # Errors
    /// Returns a `SchemaError` if:
    /// - The body is not a mapping
    /// - The `properties` mapping is absent or not a mapping
    /// - Any property lacks a `type` or declares a composite one
    pub fn validate_schema(name: &str, body: &Value) -> crate::schema::Result<SchemaBody> {
        if body.as_mapping().is_none() {
            return Err(SchemaError::InvalidShape(format!(
                "schema '{name}' is not a mapping (found {})",
                kind(body)
            )));
        }

        let type_tag = match body.get("type") {
            None => "object".to_string(),
            Some(v) => v
                .as_str()
                .ok_or_else(|| {
                    SchemaError::InvalidShape(format!(
                        "type of schema '{name}' is not a string (found {})",
                        kind(v)
                    ))
                })?
                .to_string(),
        };

        // Informational only, so a non-string description is simply ignored.
        let description = body
            .get("description")
            .and_then(Value::as_str)
            .map(ToString::to_string);

        let props_value = body.get("properties").ok_or_else(|| {
            SchemaError::InvalidShape(format!("schema '{name}' has no properties mapping"))
        })?;
        let props_map = props_value.as_mapping().ok_or_else(|| {
            SchemaError::InvalidShape(format!(
                "properties of schema '{name}' is not a mapping (found {})",
                kind(props_value)
            ))
        })?;

        let mut properties = Vec::with_capacity(props_map.len());
        for (key, spec) in props_map {
            let prop_name = key.as_str().ok_or_else(|| {
                SchemaError::InvalidShape(format!(
                    "schema '{name}' has a non-string property name (found {})",
                    kind(key)
                ))
            })?;
            properties.push(Property {
                name: prop_name.to_string(),
                spec: validate_property(name, prop_name, spec)?,
            });
        }

        let required = match body.get("required") {
            None => Vec::new(),
            Some(v) => {
                let seq = v.as_sequence().ok_or_else(|| {
                    SchemaError::InvalidShape(format!(
                        "required of schema '{name}' is not a sequence (found {})",
                        kind(v)
                    ))
                })?;
                let mut names = Vec::with_capacity(seq.len());
                for item in seq {
                    let n = item.as_str().ok_or_else(|| {
                        SchemaError::InvalidShape(format!(
                            "required of schema '{name}' contains a non-string entry (found {})",
                            kind(item)
                        ))
                    })?;
                    names.push(n.to_string());
                }
                names
            }
        };

        Ok(SchemaBody {
            type_tag,
            description,
            properties,
            required,
        })
    }
}

/// Flattens the two RAML 0.8 forms of the `schemas` section into named bodies:
/// a plain mapping, or a sequence of single-entry maps. A body given as a
/// string is an embedded JSON Schema document and gets parsed in place
/// (JSON is a YAML subset, so one parser covers both).
fn collect_schemas(section: &Value) -> crate::schema::Result<Vec<(String, Value)>> {
    let mut schemas = Vec::new();

    let mut push = |name: &Value, body: &Value| -> crate::schema::Result<()> {
        let name = name
            .as_str()
            .ok_or_else(|| {
                SchemaError::InvalidShape(format!(
                    "schemas section has a non-string schema name (found {})",
                    kind(name)
                ))
            })?
            .to_string();
        let body = resolve_embedded(&name, body)?;
        schemas.push((name, body));
        Ok(())
    };

    match section {
        Value::Mapping(map) => {
            for (name, body) in map {
                push(name, body)?;
            }
        }
        Value::Sequence(entries) => {
            for entry in entries {
                let map = entry.as_mapping().ok_or_else(|| {
                    SchemaError::InvalidShape(format!(
                        "schemas sequence entry is not a mapping (found {})",
                        kind(entry)
                    ))
                })?;
                for (name, body) in map {
                    push(name, body)?;
                }
            }
        }
        other => {
            return Err(SchemaError::InvalidShape(format!(
                "schemas section is neither a mapping nor a sequence (found {})",
                kind(other)
            )))
        }
    }

    Ok(schemas)
}

fn resolve_embedded(name: &str, body: &Value) -> crate::schema::Result<Value> {
    match body {
        Value::String(text) => serde_yaml::from_str(text).map_err(|e| {
            SchemaError::InvalidShape(format!(
                "schema '{name}' embeds a document that is not valid JSON/YAML: {e}"
            ))
        }),
        other => Ok(other.clone()),
    }
}

fn validate_property(
    schema: &str,
    property: &str,
    spec: &Value,
) -> crate::schema::Result<PropertySpec> {
    if spec.as_mapping().is_none() {
        return Err(SchemaError::InvalidShape(format!(
            "property '{property}' of schema '{schema}' is not a mapping (found {})",
            kind(spec)
        )));
    }

    let type_value = spec.get("type").ok_or_else(|| {
        SchemaError::InvalidShape(format!(
            "property '{property}' of schema '{schema}' has no type"
        ))
    })?;

    match type_value {
        // Nested entity generation is out of scope, by shape or by tag.
        Value::Mapping(_) | Value::Sequence(_) => Err(SchemaError::UnsupportedType {
            property: property.to_string(),
            found: format!("a nested {}", raw_kind(type_value)),
        }),
        Value::String(tag) if tag == "object" || tag == "array" => {
            Err(SchemaError::UnsupportedType {
                property: property.to_string(),
                found: format!("'{tag}'"),
            })
        }
        Value::String(tag) => Ok(PropertySpec {
            type_tag: tag.clone(),
        }),
        other => Err(SchemaError::InvalidShape(format!(
            "type of property '{property}' of schema '{schema}' is not a string (found {})",
            kind(other)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

fn raw_kind(value: &Value) -> &'static str {
    match value {
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        _ => "value",
    }
}
