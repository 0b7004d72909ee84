//! iconpack CLI - Command line interface for the pack namespace model
//!
//! Provides commands for validating, canonicalizing, and displaying nested
//! pack configuration strings. Designed to be wrapped by build-tool and IDE
//! plugins that persist the same flat string field.

use clap::{Parser, Subcommand};
use iconpack::{GeneratorConfig, IconPack};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "iconpack")]
#[command(about = "Hierarchical namespace model for generated icon accessors")]
#[command(version)]
struct Cli {
    /// Output format (json or text)
    #[arg(short, long, default_value = "json")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a nested pack configuration string
    Check {
        /// The pack configuration string
        packs: String,
    },

    /// Print the canonical (minimal leaf-path) re-encoding of a pack string
    Canonical {
        /// The pack configuration string
        packs: String,
    },

    /// Print the box-drawing diagram of a pack string
    Tree {
        /// The pack configuration string
        packs: String,
    },

    /// Show the pack tree stored in a generator settings file
    Show {
        /// Path to the settings JSON file
        #[arg(short, long)]
        config: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { packs } => {
            let pack = parse_or_exit(&cli.format, &packs);
            output(
                &cli.format,
                &serde_json::json!({
                    "status": "ok",
                    "root": pack.name,
                    "leaves": pack.leaf_count(),
                    "depth": pack.depth()
                }),
            );
        }

        Commands::Canonical { packs } => {
            let pack = parse_or_exit(&cli.format, &packs);
            output(
                &cli.format,
                &serde_json::json!({
                    "status": "ok",
                    "canonical": pack.to_raw_string()
                }),
            );
        }

        Commands::Tree { packs } => {
            let pack = parse_or_exit(&cli.format, &packs);
            // The diagram is a display contract; emit its bytes untouched.
            print!("{pack}");
        }

        Commands::Show { config } => {
            let settings = GeneratorConfig::load(&config)?;
            output(
                &cli.format,
                &serde_json::json!({
                    "status": "ok",
                    "pack_name": settings.pack_name,
                    "package_name": settings.package_name,
                    "canonical": settings.nested_packs.to_raw_string(),
                    "leaves": settings.nested_packs.leaf_count(),
                    "tree": settings.nested_packs.to_string()
                }),
            );
        }
    }

    Ok(())
}

fn parse_or_exit(format: &OutputFormat, packs: &str) -> IconPack {
    match iconpack::parse(packs) {
        Ok(pack) => pack,
        Err(err) => {
            output(
                format,
                &serde_json::json!({
                    "status": "error",
                    "message": err.to_string()
                }),
            );
            std::process::exit(1);
        }
    }
}

fn output(format: &OutputFormat, value: &serde_json::Value) {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(value).unwrap());
        }
        OutputFormat::Text => {
            println!("{}", serde_json::to_string_pretty(value).unwrap());
        }
    }
}
