use clap::{Parser, ValueEnum};
use log::info;
use ramlgen::generator::render::classify;
use ramlgen::{Bundle, EntityGenerator, MappingFormat, RamlDocument, RamlInterpreter};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the RAML file to read schemas from
    #[arg(required = true)]
    raml_file: PathBuf,

    /// Name of the schema to generate an entity for
    #[arg(long, short, required_unless_present = "list_schemas")]
    schema: Option<String>,

    /// The bundle to generate the entity into, e.g. Acme/BlogBundle
    #[arg(long, required_unless_present = "list_schemas")]
    bundle: Option<String>,

    /// Base directory the bundle lives under
    #[arg(long, default_value = ".")]
    path: PathBuf,

    /// Format for the generated mapping configuration
    #[arg(long, value_enum, default_value = "annotation")]
    format: CliFormat,

    /// Also generate the entity repository class
    #[arg(long)]
    with_repository: bool,

    /// List the schemas declared in the document and exit
    #[arg(long)]
    list_schemas: bool,

    /// Skip the confirmation prompt
    #[arg(long)]
    no_interaction: bool,

    /// Print the generation report as JSON
    #[arg(long)]
    json: bool,
}

/// Mapping format enum for the CLI (wrapper around the generator's `MappingFormat`)
#[derive(Debug, Clone, ValueEnum)]
enum CliFormat {
    /// PHP mapping file
    Php,
    /// XML mapping file
    Xml,
    /// YAML mapping file
    Yml,
    /// Docblock annotations in the entity class
    Annotation,
}

impl From<CliFormat> for MappingFormat {
    fn from(cli_format: CliFormat) -> Self {
        match cli_format {
            CliFormat::Php => MappingFormat::Php,
            CliFormat::Xml => MappingFormat::Xml,
            CliFormat::Yml => MappingFormat::Yml,
            CliFormat::Annotation => MappingFormat::Annotation,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    info!("loading RAML document from: {}", cli.raml_file.display());
    let document = RamlInterpreter::new().interpret_file(&cli.raml_file)?;

    if cli.list_schemas {
        return handle_list_schemas(&document);
    }
    handle_generate(&cli, &document)
}

fn handle_list_schemas(document: &RamlDocument) -> Result<(), Box<dyn std::error::Error>> {
    for name in document.schema_names() {
        println!("{name}");
    }
    Ok(())
}

fn handle_generate(cli: &Cli, document: &RamlDocument) -> Result<(), Box<dyn std::error::Error>> {
    let schema_name = cli.schema.as_deref().ok_or("--schema is required")?;
    let bundle_name = cli.bundle.as_deref().ok_or("--bundle is required")?;

    let schema = document.schema(schema_name)?;
    let bundle = Bundle::parse(bundle_name, &cli.path)?;
    let entity = classify(schema_name);

    if !cli.no_interaction
        && !confirm(&format!(
            "Do you confirm generation of entity {entity} in {} [yes]? ",
            bundle.name
        ))?
    {
        eprintln!("Command aborted");
        process::exit(1);
    }

    let report = EntityGenerator::new().generate(
        &bundle,
        &entity,
        cli.format.clone().into(),
        schema,
        cli.with_repository,
    )?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Generating the entity code: OK");
        for file in &report.files {
            println!("  created {}", file.display());
        }
    }

    Ok(())
}

fn confirm(question: &str) -> io::Result<bool> {
    print!("{question}");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer.is_empty() || answer == "y" || answer == "yes")
}
