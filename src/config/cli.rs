use crate::core::export::ExportFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-registry")]
#[command(about = "Inspect and export the portfolio project registry")]
pub struct CliConfig {
    /// Load projects from a TOML or JSON document instead of the built-in list
    #[arg(short, long, global = true)]
    pub source: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print one line per project
    List {
        /// Only featured projects
        #[arg(long)]
        starred: bool,

        /// Include the blank template entry
        #[arg(long, conflicts_with = "starred")]
        all: bool,
    },
    /// Print a single project as JSON
    Show { name: String },
    /// Write the registry as a projects document
    Export {
        /// Defaults to the output file's extension, then JSON
        #[arg(short, long, value_enum)]
        format: Option<ExportFormat>,

        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Load and validate the source, then report the record count
    Check,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(source) = &self.source {
            validate_path("--source", &source.to_string_lossy())?;
        }
        if let Command::Export {
            output: Some(output),
            ..
        } = &self.command
        {
            validate_path("--output", &output.to_string_lossy())?;
        }
        Ok(())
    }
}
