//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing
//! - `execute.rs`: the `Execute` impl and its result type
//! - `output.rs`: table formatting for the result

mod build;
mod create_index;
mod show;

pub use build::BuildCmd;
pub use create_index::CreateIndexCmd;
pub use show::ShowCmd;

use clap::Subcommand;
use std::error::Error;
use std::path::PathBuf;

use crate::config::ConfigFile;
use crate::output::{OutputFormat, Outputable};

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self, config: &ConfigFile) -> Result<Self::Output, Box<dyn Error>>;
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build every document type in a schema file and print the mappings
    Build(BuildCmd),

    /// Build a schema file and show a single document type
    Show(ShowCmd),

    /// Build a schema file and create an index over its document types
    CreateIndex(CreateIndexCmd),
}

impl Command {
    /// Execute the command and return formatted output
    pub fn run(self, config: &ConfigFile, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        match self {
            Command::Build(cmd) => Ok(cmd.execute(config)?.format(format)),
            Command::Show(cmd) => Ok(cmd.execute(config)?.format(format)),
            Command::CreateIndex(cmd) => Ok(cmd.execute(config)?.format(format)),
        }
    }
}

/// clap value parser for schema file arguments.
pub(crate) fn validate_file_exists(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if path.exists() {
        Ok(path)
    } else {
        Err(format!("File not found: {}", path.display()))
    }
}
