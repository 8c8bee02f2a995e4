use std::error::Error;

use serde::Serialize;
use serde_json::Value;

use super::ShowCmd;
use crate::commands::Execute;
use crate::config::ConfigFile;
use crate::loader::load_schema_file;
use crate::registry;
use crate::types::DocumentSummary;

/// Result of the show command
#[derive(Debug, Serialize)]
pub struct ShowResult {
    pub document: DocumentSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pk_field: Option<String>,
    pub relationships: Vec<String>,
    pub fields_to_query: Vec<String>,
    pub mapping: Value,
}

impl Execute for ShowCmd {
    type Output = ShowResult;

    fn execute(self, _config: &ConfigFile) -> Result<Self::Output, Box<dyn Error>> {
        load_schema_file(&self.file)?.build()?;
        let class = registry::get(&self.name)?;

        Ok(ShowResult {
            document: DocumentSummary::from_class(&class),
            // Having no primary key is not an error when only inspecting.
            pk_field: class.pk_field().ok(),
            relationships: class.relationships(),
            fields_to_query: class.fields_to_query().into_iter().collect(),
            mapping: class.to_dict(),
        })
    }
}
