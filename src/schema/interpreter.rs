use crate::schema::types::{RamlDocument, SchemaError};
use crate::schema::validator::SchemaValidator;
use log::{info, warn};
use std::path::Path;

/// Interprets RAML documents and converts them to the typed schema model.
///
/// This is the single place the document is handled as loosely-typed YAML;
/// callers only ever see validated [`RamlDocument`] values.
#[derive(Default)]
pub struct RamlInterpreter;

impl RamlInterpreter {
    /// Creates a new interpreter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Interprets a RAML document from a string.
    ///
    /// # Errors
    /// Returns a `SchemaError` if:
    /// - The text is not valid YAML
    /// - The document or any schema fails shape validation
    pub fn interpret_str(&self, raml: &str) -> crate::schema::Result<RamlDocument> {
        if !raml.trim_start().starts_with("#%RAML") {
            warn!("document has no #%RAML version header");
        }
        let doc: serde_yaml::Value = serde_yaml::from_str(raml)
            .map_err(|e| SchemaError::Load(format!("invalid YAML: {e}")))?;
        SchemaValidator::validate_document(&doc)
    }

    /// Interprets a RAML document from a file.
    ///
    /// # Errors
    /// Returns a `SchemaError` if:
    /// - The file cannot be read
    /// - The text is not valid YAML
    /// - The document or any schema fails shape validation
    pub fn interpret_file<P: AsRef<Path>>(&self, path: P) -> crate::schema::Result<RamlDocument> {
        let path = path.as_ref();
        let raml = std::fs::read_to_string(path).map_err(|e| {
            SchemaError::Load(format!("failed to read {}: {e}", path.display()))
        })?;
        let document = self.interpret_str(&raml)?;
        info!(
            "loaded {} schema(s) from {}",
            document.schemas.len(),
            path.display()
        );
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JUKEBOX: &str = r#"#%RAML 0.8
title: Jukebox API
schemas:
  song:
    type: object
    description: A canonical song
    properties:
      title:
        type: string
      artist:
        type: string
    required:
      - title
      - artist
"#;

    #[test]
    fn test_interpret_valid_document() {
        let interpreter = RamlInterpreter::new();
        let document = interpreter.interpret_str(JUKEBOX).unwrap();

        assert_eq!(document.schema_names(), vec!["song"]);
        let song = document.schema("song").unwrap();
        assert_eq!(song.type_tag, "object");
        assert_eq!(song.description.as_deref(), Some("A canonical song"));
        assert_eq!(song.required, vec!["title", "artist"]);
        assert_eq!(song.properties.len(), 2);
        assert_eq!(song.properties[0].name, "title");
        assert_eq!(song.properties[0].spec.type_tag, "string");
        assert_eq!(song.properties[1].name, "artist");
    }

    #[test]
    fn test_interpret_sequence_form() {
        // RAML 0.8 also allows the schemas section as a sequence of
        // single-entry maps.
        let raml = r#"#%RAML 0.8
title: Jukebox API
schemas:
  - song:
      type: object
      properties:
        title:
          type: string
  - album:
      type: object
      properties:
        name:
          type: string
"#;
        let document = RamlInterpreter::new().interpret_str(raml).unwrap();
        assert_eq!(document.schema_names(), vec!["song", "album"]);
    }

    #[test]
    fn test_interpret_embedded_json_schema() {
        let raml = "#%RAML 0.8\ntitle: Jukebox API\nschemas:\n  - song: |\n      { \"type\": \"object\",\n        \"properties\": {\n          \"title\": { \"type\": \"string\" },\n          \"length\": { \"type\": \"integer\" } } }\n";
        let document = RamlInterpreter::new().interpret_str(raml).unwrap();
        let song = document.schema("song").unwrap();
        assert_eq!(song.properties.len(), 2);
        assert_eq!(song.properties[1].name, "length");
        assert_eq!(song.properties[1].spec.type_tag, "integer");
    }

    #[test]
    fn test_property_order_is_declaration_order() {
        let raml = r#"#%RAML 0.8
schemas:
  song:
    type: object
    properties:
      zebra:
        type: string
      artist:
        type: string
      title:
        type: string
"#;
        let document = RamlInterpreter::new().interpret_str(raml).unwrap();
        let names: Vec<&str> = document
            .schema("song")
            .unwrap()
            .properties
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["zebra", "artist", "title"]);
    }

    #[test]
    fn test_invalid_yaml_is_a_load_error() {
        let result = RamlInterpreter::new().interpret_str("schemas: [unclosed");
        assert!(matches!(result, Err(SchemaError::Load(_))));
    }

    #[test]
    fn test_missing_schemas_section() {
        let result = RamlInterpreter::new().interpret_str("#%RAML 0.8\ntitle: Jukebox API\n");
        assert!(matches!(result, Err(SchemaError::InvalidShape(_))));
    }

    #[test]
    fn test_missing_properties_is_a_shape_error() {
        let raml = "#%RAML 0.8\nschemas:\n  song:\n    type: object\n";
        let result = RamlInterpreter::new().interpret_str(raml);
        assert!(matches!(result, Err(SchemaError::InvalidShape(_))));
    }

    #[test]
    fn test_property_without_type_is_a_shape_error() {
        let raml = "#%RAML 0.8\nschemas:\n  song:\n    properties:\n      title: {}\n";
        let result = RamlInterpreter::new().interpret_str(raml);
        match result {
            Err(SchemaError::InvalidShape(msg)) => assert!(msg.contains("title")),
            other => panic!("expected InvalidShape, got {other:?}"),
        }
    }

    #[test]
    fn test_nested_property_type_is_unsupported() {
        let raml = r#"#%RAML 0.8
schemas:
  song:
    properties:
      title:
        type: string
      credits:
        type: object
"#;
        let result = RamlInterpreter::new().interpret_str(raml);
        match result {
            Err(SchemaError::UnsupportedType { property, .. }) => {
                assert_eq!(property, "credits");
            }
            other => panic!("expected UnsupportedType, got {other:?}"),
        }
    }

    #[test]
    fn test_schema_not_found_lists_declared_names() {
        let document = RamlInterpreter::new().interpret_str(JUKEBOX).unwrap();
        match document.schema("album") {
            Err(SchemaError::NotFound(msg)) => assert!(msg.contains("song")),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_interpret_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jukebox.raml");
        std::fs::write(&path, JUKEBOX).unwrap();

        let document = RamlInterpreter::new().interpret_file(&path).unwrap();
        assert!(document.get("song").is_some());
    }

    #[test]
    fn test_interpret_missing_file_is_a_load_error() {
        let result = RamlInterpreter::new().interpret_file("does/not/exist.raml");
        assert!(matches!(result, Err(SchemaError::Load(_))));
    }
}
