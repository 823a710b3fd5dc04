use super::classify;
use crate::generator::entity::MappingFormat;
use crate::generator::fields::FieldDescriptor;

/// Renders the entity class. With `MappingFormat::Annotation` the mapping is
/// inlined as `@ORM` docblock annotations; every other format gets a plain
/// class and carries the mapping in a separate configuration file.
#[must_use]
pub fn render_entity_class(
    namespace: &str,
    entity: &str,
    table: &str,
    fields: &[FieldDescriptor],
    format: MappingFormat,
    with_repository: bool,
) -> String {
    let annotated = format == MappingFormat::Annotation;
    let mut out = String::new();

    out.push_str("<?php\n\n");
    out.push_str(&format!("namespace {namespace};\n\n"));
    if annotated {
        out.push_str("use Doctrine\\ORM\\Mapping as ORM;\n\n");
    }

    out.push_str("/**\n");
    out.push_str(&format!(" * {entity}\n"));
    if annotated {
        out.push_str(" *\n");
        out.push_str(&format!(" * @ORM\\Table(name=\"{table}\")\n"));
        if with_repository {
            out.push_str(&format!(
                " * @ORM\\Entity(repositoryClass=\"{namespace}\\{entity}Repository\")\n"
            ));
        } else {
            out.push_str(" * @ORM\\Entity\n");
        }
    }
    out.push_str(" */\n");
    out.push_str(&format!("class {entity}\n{{\n"));

    // The synthetic identity field always comes first.
    out.push_str("    /**\n");
    out.push_str("     * @var integer\n");
    if annotated {
        out.push_str("     *\n");
        out.push_str("     * @ORM\\Column(name=\"id\", type=\"integer\")\n");
        out.push_str("     * @ORM\\Id\n");
        out.push_str("     * @ORM\\GeneratedValue(strategy=\"AUTO\")\n");
    }
    out.push_str("     */\n");
    out.push_str("    private $id;\n");

    for field in fields {
        out.push('\n');
        out.push_str("    /**\n");
        out.push_str(&format!("     * @var {}\n", field.type_tag));
        if annotated {
            out.push_str("     *\n");
            out.push_str(&format!(
                "     * @ORM\\Column(name=\"{}\", type=\"{}\", nullable=true)\n",
                field.name, field.type_tag
            ));
        }
        out.push_str("     */\n");
        out.push_str(&format!("    private ${};\n", field.name));
    }

    out.push('\n');
    out.push_str("    /**\n");
    out.push_str("     * Get id\n");
    out.push_str("     *\n");
    out.push_str("     * @return integer\n");
    out.push_str("     */\n");
    out.push_str("    public function getId()\n    {\n        return $this->id;\n    }\n");

    for field in fields {
        let accessor = classify(&field.name);

        out.push('\n');
        out.push_str("    /**\n");
        out.push_str(&format!("     * Set {}\n", field.name));
        out.push_str("     *\n");
        out.push_str(&format!("     * @param {} ${}\n", field.type_tag, field.name));
        out.push_str(&format!("     * @return {entity}\n"));
        out.push_str("     */\n");
        out.push_str(&format!(
            "    public function set{accessor}(${})\n    {{\n",
            field.name
        ));
        out.push_str(&format!("        $this->{} = ${};\n\n", field.name, field.name));
        out.push_str("        return $this;\n    }\n");

        out.push('\n');
        out.push_str("    /**\n");
        out.push_str(&format!("     * Get {}\n", field.name));
        out.push_str("     *\n");
        out.push_str(&format!("     * @return {}\n", field.type_tag));
        out.push_str("     */\n");
        out.push_str(&format!(
            "    public function get{accessor}()\n    {{\n        return $this->{};\n    }}\n",
            field.name
        ));
    }

    out.push_str("}\n");
    out
}

/// Renders the empty repository class scaffold.
#[must_use]
pub fn render_repository_class(namespace: &str, entity: &str) -> String {
    let mut out = String::new();
    out.push_str("<?php\n\n");
    out.push_str(&format!("namespace {namespace};\n\n"));
    out.push_str("use Doctrine\\ORM\\EntityRepository;\n\n");
    out.push_str("/**\n");
    out.push_str(&format!(" * {entity}Repository\n"));
    out.push_str(" */\n");
    out.push_str(&format!("class {entity}Repository extends EntityRepository\n{{\n}}\n"));
    out
}
