mod cli_tests;
mod execute;
mod execute_tests;
mod output;

pub use execute::BuildResult;

use std::path::PathBuf;

use clap::Args;

use super::validate_file_exists;

/// Build every document type in a schema file
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  docmeta build -f schema.json                 # Print every document type
  docmeta build -f schema.json --format json   # Machine-readable mappings")]
pub struct BuildCmd {
    /// Path to the schema JSON file
    #[arg(short, long, value_parser = validate_file_exists)]
    pub file: PathBuf,
}
