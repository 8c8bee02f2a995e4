mod cli_tests;
mod execute;
mod execute_tests;
mod output;

pub use execute::CreateIndexResult;

use std::path::PathBuf;

use clap::Args;

use super::validate_file_exists;

/// Create an index over the document types of a schema file
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  docmeta create-index -f schema.json -n library                   # Every document type
  docmeta create-index -f schema.json -n library -d Author -d Book # Only the listed types
  docmeta --db ./docmeta.sqlite create-index -f schema.json -n library")]
pub struct CreateIndexCmd {
    /// Path to the schema JSON file
    #[arg(short, long, value_parser = validate_file_exists)]
    pub file: PathBuf,

    /// Index name (falls back to `default_index` from .docmeta.json)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Document type to include (repeatable, default: every registered type)
    #[arg(short, long = "doc")]
    pub docs: Vec<String>,
}
