use crate::error::{RamlGenError, RamlGenResult};
use crate::generator::bundle::Bundle;
use crate::generator::fields::map_fields;
use crate::generator::render::{class, mapping};
use crate::schema::types::SchemaBody;
use log::{info, warn};
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// How the Doctrine mapping information is emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MappingFormat {
    /// PHP mapping file under `Resources/config/doctrine`
    Php,
    /// XML mapping file under `Resources/config/doctrine`
    Xml,
    /// YAML mapping file under `Resources/config/doctrine`
    Yml,
    /// Docblock annotations inlined in the entity class
    #[default]
    Annotation,
}

impl MappingFormat {
    /// Mapping file extension, or `None` when the mapping is inlined.
    #[must_use]
    pub const fn extension(self) -> Option<&'static str> {
        match self {
            Self::Php => Some("php"),
            Self::Xml => Some("xml"),
            Self::Yml => Some("yml"),
            Self::Annotation => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Php => "php",
            Self::Xml => "xml",
            Self::Yml => "yml",
            Self::Annotation => "annotation",
        }
    }
}

impl fmt::Display for MappingFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What one generation run wrote.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    /// Entity class name
    pub entity: String,
    /// Number of mapped (non-identity) fields
    pub field_count: usize,
    /// Files written, in write order
    pub files: Vec<PathBuf>,
}

/// Writes entity scaffolding for one validated schema into a bundle target.
///
/// One instance handles one invocation; it holds no state between calls.
#[derive(Default)]
pub struct EntityGenerator;

impl EntityGenerator {
    /// Creates a new generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generates the entity class, the mapping configuration file for the
    /// non-annotation formats, and optionally the repository class.
    ///
    /// # Errors
    /// Returns a `RamlGenError` if the entity class already exists at the
    /// target location or any file cannot be written. Errors leave no
    /// partially-tracked state behind; files written before the failure stay
    /// on disk, matching the no-rollback policy of the whole pipeline.
    pub fn generate(
        &self,
        bundle: &Bundle,
        entity: &str,
        format: MappingFormat,
        schema: &SchemaBody,
        with_repository: bool,
    ) -> RamlGenResult<GenerationReport> {
        if schema.type_tag != "object" {
            warn!(
                "schema for entity {entity} declares type '{}', expected 'object'",
                schema.type_tag
            );
        }

        let fields = map_fields(schema);
        let namespace = bundle.entity_namespace();
        let table = entity.to_lowercase();

        let entity_dir = bundle.path.join("Entity");
        let class_path = entity_dir.join(format!("{entity}.php"));
        if class_path.exists() {
            return Err(RamlGenError::Generator(format!(
                "entity class {} already exists",
                class_path.display()
            )));
        }
        fs::create_dir_all(&entity_dir)?;

        let mut files = Vec::new();

        let class_src =
            class::render_entity_class(&namespace, entity, &table, &fields, format, with_repository);
        fs::write(&class_path, class_src)?;
        files.push(class_path);

        if let Some(extension) = format.extension() {
            let config_dir = bundle.path.join("Resources").join("config").join("doctrine");
            fs::create_dir_all(&config_dir)?;
            let mapping_path = config_dir.join(format!("{entity}.orm.{extension}"));
            let mapping_src = match format {
                MappingFormat::Xml => {
                    mapping::render_xml_mapping(&namespace, entity, &table, &fields, with_repository)
                }
                MappingFormat::Yml => {
                    mapping::render_yml_mapping(&namespace, entity, &table, &fields, with_repository)
                }
                MappingFormat::Php => {
                    mapping::render_php_mapping(&namespace, entity, &table, &fields, with_repository)
                }
                MappingFormat::Annotation => unreachable!(),
            };
            fs::write(&mapping_path, mapping_src)?;
            files.push(mapping_path);
        }

        if with_repository {
            let repository_path = entity_dir.join(format!("{entity}Repository.php"));
            if repository_path.exists() {
                warn!(
                    "repository class {} already exists, leaving it alone",
                    repository_path.display()
                );
            } else {
                fs::write(
                    &repository_path,
                    class::render_repository_class(&namespace, entity),
                )?;
                files.push(repository_path);
            }
        }

        info!(
            "generated entity {entity} ({} fields, format {format})",
            fields.len()
        );

        Ok(GenerationReport {
            entity: entity.to_string(),
            field_count: fields.len(),
            files,
        })
    }
}
