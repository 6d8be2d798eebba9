#![deny(missing_docs)]

//! # Binder Swagger CLI
//!
//! Converts a mapping document into Swagger 2.0 fragments.
//!
//! Supported Commands:
//! - `parameters`: Request parameters of a mapping (or group of fields).
//! - `definitions`: The `definitions` section collected from named sub-trees.

use binder_swagger::loader::load_file;
use binder_swagger::swagger::{CollectionFormat, Model, NamedModel, Parameter};
use binder_swagger::{AppResult, ConverterConfig, DefaultMappingConverter, MappingConverter};
use clap::{Parser, Subcommand, ValueEnum};
use indexmap::IndexMap;
use serde::Serialize;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Mapping specification to Swagger 2.0 converter")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,

    /// Rendering of the result.
    #[clap(long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    output: OutputFormat,

    /// Accept lists of primitives as non-body parameters.
    #[clap(
        long,
        env = "BINDER_SWAGGER_PRIMITIVE_LIST_PARAMS",
        default_value_t = true,
        action = clap::ArgAction::Set,
        global = true
    )]
    primitive_list_params: bool,

    /// `collectionFormat` of array parameters.
    #[clap(long, value_enum, env = "BINDER_SWAGGER_COLLECTION_FORMAT", global = true)]
    collection_format: Option<CollectionFormat>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Prints the request parameters of a mapping document.
    Parameters {
        /// Path to the mapping document (.yaml, .yml or .json).
        #[clap(long)]
        input: PathBuf,

        /// Parameter name used when the root is a single parameter.
        #[clap(long, default_value = "")]
        name: String,
    },
    /// Prints the definitions collected from a mapping document.
    Definitions {
        /// Path to the mapping document (.yaml, .yml or .json).
        #[clap(long)]
        input: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    Json,
    Yaml,
}

#[derive(Serialize)]
struct ParametersOutput {
    parameters: Vec<Parameter>,
}

#[derive(Serialize)]
struct DefinitionsOutput {
    definitions: IndexMap<String, Model>,
}

/// Merges scanned models into a `definitions` map. The first occurrence of a
/// name wins; later ones with a different structure are reported.
fn assemble_definitions(models: Vec<NamedModel>) -> IndexMap<String, Model> {
    let mut definitions: IndexMap<String, Model> = IndexMap::new();
    for NamedModel { name, model } in models {
        match definitions.get(&name) {
            Some(existing) if *existing != model => {
                warn!(
                    definition = %name,
                    "conflicting definitions share a name, keeping the first"
                );
            }
            Some(_) => {}
            None => {
                definitions.insert(name, model);
            }
        }
    }
    definitions
}

fn render<T: Serialize>(value: &T, output: OutputFormat) -> AppResult<String> {
    Ok(match output {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    })
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let converter = DefaultMappingConverter::with_config(ConverterConfig {
        primitive_list_params: cli.primitive_list_params,
        collection_format: cli.collection_format,
    });

    let rendered = match &cli.command {
        Commands::Parameters { input, name } => {
            let mapping = load_file(input)?;
            let parameters = converter.to_parameters(name, &mapping)?;
            render(&ParametersOutput { parameters }, cli.output)?
        }
        Commands::Definitions { input } => {
            let mapping = load_file(input)?;
            let definitions = assemble_definitions(converter.scan_models(&mapping)?);
            render(&DefinitionsOutput { definitions }, cli.output)?
        }
    };

    println!("{}", rendered);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use binder_swagger::{Extras, Mapping};

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_collection_format_flag() {
        let cli = Cli::try_parse_from([
            "binder-swagger",
            "parameters",
            "--input",
            "pets.yaml",
            "--collection-format",
            "pipes",
        ])
        .unwrap();
        assert_eq!(cli.collection_format, Some(CollectionFormat::Pipes));

        let cli = Cli::try_parse_from(["binder-swagger", "definitions", "--input", "pets.yaml"])
            .unwrap();
        assert_eq!(cli.collection_format, None);
    }

    #[test]
    fn test_assemble_definitions_keeps_first() {
        let named = |node: Mapping, name: &str| {
            node.extras(Extras {
                ref_name: Some(name.into()),
                ..Default::default()
            })
        };
        let root = Mapping::object([
            ("a", named(Mapping::object([("id", Mapping::long())]), "props")),
            ("b", named(Mapping::object([("x", Mapping::text())]), "props")),
        ]);
        let models = DefaultMappingConverter::new().scan_models(&root).unwrap();
        let first = models[0].model.clone();

        let definitions = assemble_definitions(models);
        assert_eq!(definitions.len(), 1);
        assert_eq!(definitions["props"], first);
    }
}
