//! Configuration file handling.
//!
//! Loads `.docmeta.json` from the current directory. The file selects the
//! store used for index creation and an optional default index name.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::index::{CozoSearchClient, IndexError, SearchClient};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".docmeta.json";

/// Top-level configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Index store configuration
    #[serde(default)]
    pub search: SearchConfigFile,

    /// Index name used when `create-index` is run without `--name`
    #[serde(default)]
    pub default_index: Option<String>,
}

/// Index store variants.
///
/// JSON format uses a "type" field with lowercase variant names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchConfigFile {
    /// SQLite-backed CozoDB store
    Sqlite { path: PathBuf },
    /// In-memory store, discarded on exit
    #[default]
    #[serde(rename = "memory")]
    Mem,
}

impl ConfigFile {
    /// Load configuration from `.docmeta.json` in the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist, cannot be read, or is not
    /// valid configuration JSON.
    pub fn load() -> Result<Self, Box<dyn Error>> {
        Self::load_from(Path::new(CONFIG_FILE_NAME))
    }

    /// Load configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self, Box<dyn Error>> {
        if !config_path.exists() {
            return Err(format!(
                "Configuration file not found: {}\n\n\
                 Examples:\n\
                 \n\
                 SQLite:\n\
                 {{\n  \
                   \"search\": {{\n    \
                     \"type\": \"sqlite\",\n    \
                     \"path\": \"./docmeta.sqlite\"\n  \
                   }},\n  \
                   \"default_index\": \"documents\"\n\
                 }}\n\
                 \n\
                 In-memory:\n\
                 {{\n  \
                   \"search\": {{\n    \
                     \"type\": \"memory\"\n  \
                   }}\n\
                 }}\n",
                config_path.display()
            )
            .into());
        }

        let content = fs::read_to_string(config_path)
            .map_err(|e| format!("Failed to read {}: {}", config_path.display(), e))?;

        let config: ConfigFile = serde_json::from_str(&content)
            .map_err(|e| format!("Invalid JSON in {}: {}", config_path.display(), e))?;

        Ok(config)
    }

    /// Load `.docmeta.json` if present, otherwise use defaults.
    pub fn load_or_default() -> Result<Self, Box<dyn Error>> {
        if Path::new(CONFIG_FILE_NAME).exists() {
            Self::load()
        } else {
            tracing::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
            Ok(Self::default())
        }
    }
}

impl SearchConfigFile {
    /// Open the configured store.
    pub fn connect(&self) -> Result<Box<dyn SearchClient>, IndexError> {
        let client = match self {
            Self::Sqlite { path } => CozoSearchClient::open(path)?,
            Self::Mem => CozoSearchClient::open_mem()?,
        };
        Ok(Box::new(client))
    }
}
