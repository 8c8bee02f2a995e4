use std::error::Error;
use std::sync::Arc;

use serde::Serialize;

use super::CreateIndexCmd;
use crate::commands::Execute;
use crate::config::ConfigFile;
use crate::index::create_index;
use crate::loader::load_schema_file;
use crate::registry;

/// Result of the create-index command
#[derive(Debug, Serialize)]
pub struct CreateIndexResult {
    pub index: String,
    pub backend: String,
    /// Document types read back from the store after creation
    pub doc_types: Vec<String>,
}

impl Execute for CreateIndexCmd {
    type Output = CreateIndexResult;

    fn execute(self, config: &ConfigFile) -> Result<Self::Output, Box<dyn Error>> {
        let name = self
            .name
            .or_else(|| config.default_index.clone())
            .ok_or("No index name given: pass --name or set default_index in .docmeta.json")?;

        load_schema_file(&self.file)?.build()?;

        let selected = self
            .docs
            .iter()
            .map(|doc| registry::get(doc))
            .collect::<Result<Vec<Arc<_>>, _>>()?;

        let client = config.search.connect()?;
        let classes = if selected.is_empty() {
            None
        } else {
            Some(selected.as_slice())
        };
        let index = create_index(client.as_ref(), &name, classes)?;

        Ok(CreateIndexResult {
            index: index.name().to_string(),
            backend: client.backend_name().to_string(),
            doc_types: client.doc_types(index.name())?,
        })
    }
}
