//! CozoDB-backed search client.
//!
//! Each index becomes a stored relation. `:create` refuses to replace an
//! existing relation, which gives the "index already exists" failure.

use std::collections::BTreeMap;
use std::path::Path;

use cozo::{DataValue, DbInstance, NamedRows, ScriptMutability};

use super::compiler::IndexCompiler;
use super::{Index, IndexError, SearchClient};

/// Search client storing index definitions in CozoDB.
pub struct CozoSearchClient {
    inner: DbInstance,
    engine: &'static str,
}

impl CozoSearchClient {
    /// Open a SQLite-backed store at `path`.
    pub fn open(path: &Path) -> Result<Self, IndexError> {
        let inner = DbInstance::new("sqlite", path, "").map_err(|e| IndexError::OpenFailed {
            path: path.display().to_string(),
            message: format!("{:?}", e),
        })?;
        Ok(Self {
            inner,
            engine: "sqlite",
        })
    }

    /// Open an in-memory store.
    pub fn open_mem() -> Result<Self, IndexError> {
        let inner = DbInstance::new("mem", "", "").map_err(|e| IndexError::OpenFailed {
            path: ":memory:".to_string(),
            message: format!("{:?}", e),
        })?;
        Ok(Self { inner, engine: "mem" })
    }

    fn run(&self, index: &str, script: &str) -> Result<NamedRows, IndexError> {
        self.inner
            .run_script(script, BTreeMap::new(), ScriptMutability::Mutable)
            .map_err(|e| IndexError::Client {
                index: index.to_string(),
                message: format!("{:?}", e),
            })
    }
}

impl SearchClient for CozoSearchClient {
    fn backend_name(&self) -> &'static str {
        "Cozo"
    }

    fn create_index(&self, index: &Index) -> Result<(), IndexError> {
        self.run(index.name(), &IndexCompiler::compile_create_index(index))?;

        tracing::debug!(
            index = %index.name(),
            engine = self.engine,
            doc_types = index.doc_types().len(),
            "created cozo index relation"
        );
        Ok(())
    }

    fn doc_types(&self, name: &str) -> Result<Vec<String>, IndexError> {
        let rows = self.run(name, &IndexCompiler::compile_doc_types(name))?;
        Ok(rows
            .rows
            .iter()
            .filter_map(|row| match row.first() {
                Some(DataValue::Str(s)) => Some(s.to_string()),
                _ => None,
            })
            .collect())
    }
}
