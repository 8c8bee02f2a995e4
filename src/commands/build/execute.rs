use std::error::Error;

use serde::Serialize;

use super::BuildCmd;
use crate::commands::Execute;
use crate::config::ConfigFile;
use crate::loader::load_schema_file;
use crate::types::DocumentSummary;

/// Result of the build command
#[derive(Debug, Serialize)]
pub struct BuildResult {
    pub documents: Vec<DocumentSummary>,
    /// Backref injections performed while wiring the batch
    pub backref_count: usize,
}

impl Execute for BuildCmd {
    type Output = BuildResult;

    fn execute(self, _config: &ConfigFile) -> Result<Self::Output, Box<dyn Error>> {
        let batch = load_schema_file(&self.file)?;
        let built = batch.build()?;

        // Summaries are taken after the whole batch is wired so backrefs show up.
        let documents = built
            .classes
            .iter()
            .map(|class| DocumentSummary::from_class(class))
            .collect();

        Ok(BuildResult {
            documents,
            backref_count: built.links.len(),
        })
    }
}
