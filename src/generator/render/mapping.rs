use crate::generator::fields::FieldDescriptor;

/// Renders the Doctrine XML mapping file.
#[must_use]
pub fn render_xml_mapping(
    namespace: &str,
    entity: &str,
    table: &str,
    fields: &[FieldDescriptor],
    with_repository: bool,
) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    out.push_str("<doctrine-mapping xmlns=\"http://doctrine-project.org/schemas/orm/doctrine-mapping\"\n");
    out.push_str("                  xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\"\n");
    out.push_str("                  xsi:schemaLocation=\"http://doctrine-project.org/schemas/orm/doctrine-mapping http://doctrine-project.org/schemas/orm/doctrine-mapping.xsd\">\n\n");

    if with_repository {
        out.push_str(&format!(
            "    <entity name=\"{namespace}\\{entity}\" table=\"{table}\" repository-class=\"{namespace}\\{entity}Repository\">\n"
        ));
    } else {
        out.push_str(&format!(
            "    <entity name=\"{namespace}\\{entity}\" table=\"{table}\">\n"
        ));
    }

    out.push_str("        <id name=\"id\" type=\"integer\" column=\"id\">\n");
    out.push_str("            <generator strategy=\"AUTO\"/>\n");
    out.push_str("        </id>\n");

    for field in fields {
        out.push_str(&format!(
            "        <field name=\"{}\" type=\"{}\" column=\"{}\" nullable=\"true\"/>\n",
            field.name, field.type_tag, field.name
        ));
    }

    out.push_str("    </entity>\n");
    out.push_str("</doctrine-mapping>\n");
    out
}

/// Renders the Doctrine YAML mapping file.
#[must_use]
pub fn render_yml_mapping(
    namespace: &str,
    entity: &str,
    table: &str,
    fields: &[FieldDescriptor],
    with_repository: bool,
) -> String {
    let mut out = String::new();
    out.push_str(&format!("{namespace}\\{entity}:\n"));
    out.push_str("    type: entity\n");
    out.push_str(&format!("    table: {table}\n"));
    if with_repository {
        out.push_str(&format!(
            "    repositoryClass: {namespace}\\{entity}Repository\n"
        ));
    }
    out.push_str("    id:\n");
    out.push_str("        id:\n");
    out.push_str("            type: integer\n");
    out.push_str("            generator:\n");
    out.push_str("                strategy: AUTO\n");
    if !fields.is_empty() {
        out.push_str("    fields:\n");
        for field in fields {
            out.push_str(&format!("        {}:\n", field.name));
            out.push_str(&format!("            type: {}\n", field.type_tag));
            out.push_str("            nullable: true\n");
        }
    }
    out
}

/// Renders the Doctrine PHP mapping file.
#[must_use]
pub fn render_php_mapping(
    namespace: &str,
    entity: &str,
    table: &str,
    fields: &[FieldDescriptor],
    with_repository: bool,
) -> String {
    let mut out = String::new();
    out.push_str("<?php\n\n");
    out.push_str("use Doctrine\\ORM\\Mapping\\ClassMetadataInfo;\n\n");
    out.push_str(&format!(
        "$metadata->setPrimaryTable(array('name' => '{table}'));\n"
    ));
    if with_repository {
        out.push_str(&format!(
            "$metadata->setCustomRepositoryClass('{namespace}\\{entity}Repository');\n"
        ));
    }
    out.push_str(
        "$metadata->mapField(array('id' => true, 'fieldName' => 'id', 'type' => 'integer'));\n",
    );
    out.push_str("$metadata->setIdGeneratorType(ClassMetadataInfo::GENERATOR_TYPE_AUTO);\n");
    for field in fields {
        out.push_str(&format!(
            "$metadata->mapField(array('fieldName' => '{}', 'type' => '{}', 'nullable' => true));\n",
            field.name, field.type_tag
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> Vec<FieldDescriptor> {
        vec![FieldDescriptor {
            name: "title".to_string(),
            type_tag: "string".to_string(),
            is_identifier: false,
        }]
    }

    #[test]
    fn test_xml_mapping() {
        let xml = render_xml_mapping("Acme\\BlogBundle\\Entity", "Song", "song", &fields(), false);
        assert!(xml.contains("<entity name=\"Acme\\BlogBundle\\Entity\\Song\" table=\"song\">"));
        assert!(xml.contains("<id name=\"id\" type=\"integer\" column=\"id\">"));
        assert!(xml.contains("<field name=\"title\" type=\"string\" column=\"title\" nullable=\"true\"/>"));
    }

    #[test]
    fn test_xml_mapping_with_repository() {
        let xml = render_xml_mapping("Acme\\BlogBundle\\Entity", "Song", "song", &fields(), true);
        assert!(xml.contains("repository-class=\"Acme\\BlogBundle\\Entity\\SongRepository\""));
    }

    #[test]
    fn test_yml_mapping() {
        let yml = render_yml_mapping("Acme\\BlogBundle\\Entity", "Song", "song", &fields(), true);
        assert!(yml.starts_with("Acme\\BlogBundle\\Entity\\Song:\n"));
        assert!(yml.contains("repositoryClass: Acme\\BlogBundle\\Entity\\SongRepository"));
        assert!(yml.contains("        title:\n            type: string\n"));
    }

    #[test]
    fn test_yml_mapping_parses_as_yaml() {
        let yml = render_yml_mapping("Acme\\BlogBundle\\Entity", "Song", "song", &fields(), false);
        let parsed: serde_yaml::Value = serde_yaml::from_str(&yml).unwrap();
        let entity = parsed.get("Acme\\BlogBundle\\Entity\\Song").unwrap();
        assert_eq!(entity.get("table").and_then(|v| v.as_str()), Some("song"));
    }

    #[test]
    fn test_php_mapping() {
        let php = render_php_mapping("Acme\\BlogBundle\\Entity", "Song", "song", &fields(), false);
        assert!(php.contains("$metadata->setPrimaryTable(array('name' => 'song'));"));
        assert!(php.contains("'fieldName' => 'title', 'type' => 'string'"));
        assert!(php.contains("GENERATOR_TYPE_AUTO"));
    }
}
