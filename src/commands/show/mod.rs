mod execute;
mod output;

pub use execute::ShowResult;

use std::path::PathBuf;

use clap::Args;

use super::validate_file_exists;

/// Show one document type from a schema file
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  docmeta show -f schema.json Author                 # Fields, primary key, relationships
  docmeta show -f schema.json Author --format json   # Includes the raw mapping")]
pub struct ShowCmd {
    /// Path to the schema JSON file
    #[arg(short, long, value_parser = validate_file_exists)]
    pub file: PathBuf,

    /// Document type name
    pub name: String,
}
