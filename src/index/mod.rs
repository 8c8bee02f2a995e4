//! Index creation over registered document types.
//!
//! An `Index` groups document types under a name; `create_index` builds one
//! and hands it to a `SearchClient`. There is no existence pre-check and no
//! retry: if the backend refuses (e.g. the index already exists), its error
//! is returned as is.

mod client;
mod compiler;
mod cozo;

pub use client::SearchClient;
pub use compiler::{DOC_TYPE_ROW, IndexCompiler};
pub use cozo::CozoSearchClient;

use std::sync::Arc;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::registry;
use crate::schema::DocumentClass;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Invalid index name '{name}': expected a letter followed by letters, digits or '_'")]
    InvalidName { name: String },

    #[error("Failed to open index store '{path}': {message}")]
    OpenFailed { path: String, message: String },

    #[error("Index '{index}' request failed: {message}")]
    Client { index: String, message: String },
}

/// A named index and the document types it holds.
#[derive(Debug, Clone)]
pub struct Index {
    name: String,
    doc_types: Vec<Arc<DocumentClass>>,
}

impl Index {
    pub fn new(name: impl Into<String>) -> Result<Self, IndexError> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(IndexError::InvalidName { name });
        }
        Ok(Self {
            name,
            doc_types: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a document type. Adding the same name again replaces it.
    pub fn doc_type(&mut self, class: Arc<DocumentClass>) -> &mut Self {
        self.doc_types.retain(|existing| existing.name() != class.name());
        self.doc_types.push(class);
        self
    }

    pub fn doc_types(&self) -> &[Arc<DocumentClass>] {
        &self.doc_types
    }

    pub fn doc_type_names(&self) -> Vec<String> {
        self.doc_types.iter().map(|c| c.name().to_string()).collect()
    }

    /// `{"index": name, "mappings": {doc_type: mapping, ...}}`
    pub fn to_dict(&self) -> Value {
        let mappings: Map<String, Value> = self
            .doc_types
            .iter()
            .map(|class| (class.name().to_string(), class.to_dict()))
            .collect();

        let mut out = Map::new();
        out.insert("index".to_string(), Value::from(self.name.as_str()));
        out.insert("mappings".to_string(), Value::Object(mappings));
        Value::Object(out)
    }
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Create an index named `name` holding `classes`.
///
/// With `classes` set to `None`, every document type registered at call time
/// is included.
pub fn create_index(
    client: &dyn SearchClient,
    name: &str,
    classes: Option<&[Arc<DocumentClass>]>,
) -> Result<Index, IndexError> {
    let mut index = Index::new(name)?;

    let classes = match classes {
        Some(classes) => classes.to_vec(),
        None => registry::list_all().into_values().collect(),
    };
    for class in classes {
        index.doc_type(class);
    }

    client.create_index(&index)?;

    tracing::info!(
        index = %index.name(),
        backend = client.backend_name(),
        doc_types = ?index.doc_type_names(),
        "created index"
    );
    Ok(index)
}
