//! JSON schema files.
//!
//! A schema file declares mixins and document types:
//!
//! ```json
//! {
//!   "mixins": [{"name": "Timestamps", "fields": {"created_at": {"type": "date"}}}],
//!   "documents": [
//!     {"name": "Author", "bases": [{"mixin": "Versioned"}],
//!      "fields": {"id": {"type": "id"}, "name": {"type": "keyword"}}},
//!     {"name": "Book",
//!      "fields": {"author": {"type": "relationship", "target": "Author",
//!                            "backref": {"name": "books", "uselist": true}}}}
//!   ]
//! }
//! ```
//!
//! Any extra keys on a field or backref become its keyword options. The
//! `Versioned` mixin is always available.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

use crate::pipeline::DocumentBatch;
use crate::schema::{BackrefRequest, DocumentDef, Field, FieldType, Mixin, Options};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read schema file '{path}': {message}")]
    FileReadFailed { path: String, message: String },

    #[error("Failed to parse schema JSON: {message}")]
    JsonParseFailed { message: String },

    #[error("Document type '{document}' uses unknown mixin '{mixin}'")]
    UnknownMixin { document: String, mixin: String },

    #[error("Invalid field '{owner}.{field}': {message}")]
    InvalidField {
        owner: String,
        field: String,
        message: String,
    },
}

#[derive(Debug, Deserialize)]
pub struct SchemaFile {
    #[serde(default)]
    pub mixins: Vec<MixinDecl>,
    pub documents: Vec<DocumentDecl>,
}

#[derive(Debug, Deserialize)]
pub struct MixinDecl {
    pub name: String,
    #[serde(default)]
    pub fields: BTreeMap<String, FieldDecl>,
}

#[derive(Debug, Deserialize)]
pub struct DocumentDecl {
    pub name: String,
    #[serde(default)]
    pub bases: Vec<BaseDecl>,
    #[serde(default)]
    pub fields: BTreeMap<String, FieldDecl>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseDecl {
    Document(String),
    Mixin(String),
}

#[derive(Debug, Deserialize)]
pub struct FieldDecl {
    #[serde(rename = "type")]
    pub field_type: String,
    /// Target document type of a relationship
    pub target: Option<String>,
    /// Item type of a list
    pub item: Option<String>,
    pub backref: Option<BackrefDecl>,
    #[serde(flatten)]
    pub options: Options,
}

#[derive(Debug, Deserialize)]
pub struct BackrefDecl {
    pub name: String,
    #[serde(flatten)]
    pub options: Options,
}

impl FieldDecl {
    fn into_field(self, owner: &str, name: &str) -> Result<Field, LoadError> {
        let invalid = |message: String| LoadError::InvalidField {
            owner: owner.to_string(),
            field: name.to_string(),
            message,
        };

        let field = match self.field_type.as_str() {
            "relationship" => {
                let target = self
                    .target
                    .ok_or_else(|| invalid("relationship fields need a 'target'".to_string()))?;
                let mut field = Field::relationship(target);
                if let Some(backref) = self.backref {
                    field = field.with_backref(BackrefRequest {
                        name: backref.name,
                        options: backref.options,
                    });
                }
                field
            }
            "list" => {
                let item = self.item.as_deref().unwrap_or("keyword");
                let item = FieldType::from_scalar_name(item)
                    .ok_or_else(|| invalid(format!("unsupported list item type '{}'", item)))?;
                Field::list(item)
            }
            other => {
                if self.backref.is_some() {
                    return Err(invalid("only relationship fields take a 'backref'".to_string()));
                }
                let ty = FieldType::from_scalar_name(other)
                    .ok_or_else(|| invalid(format!("unknown field type '{}'", other)))?;
                Field::new(ty)
            }
        };

        Ok(field.with_options(self.options))
    }
}

fn convert_fields(owner: &str, decls: BTreeMap<String, FieldDecl>) -> Result<BTreeMap<String, Field>, LoadError> {
    decls
        .into_iter()
        .map(|(name, decl)| {
            let field = decl.into_field(owner, &name)?;
            Ok((name, field))
        })
        .collect()
}

impl SchemaFile {
    /// Convert declarations into a batch ready for the pipeline.
    pub fn into_batch(self) -> Result<DocumentBatch, LoadError> {
        let mut mixins: HashMap<String, Arc<Mixin>> = HashMap::new();
        let versioned = Mixin::versioned();
        mixins.insert(versioned.name.clone(), Arc::new(versioned));

        for decl in self.mixins {
            let fields = convert_fields(&decl.name, decl.fields)?;
            let mixin = Mixin {
                name: decl.name.clone(),
                fields,
            };
            mixins.insert(decl.name, Arc::new(mixin));
        }

        let mut batch = DocumentBatch::new();
        for decl in self.documents {
            let mut def = DocumentDef::new(decl.name.clone());
            for base in decl.bases {
                def = match base {
                    BaseDecl::Document(name) => def.extends(name),
                    BaseDecl::Mixin(name) => {
                        let mixin = mixins.get(&name).ok_or_else(|| LoadError::UnknownMixin {
                            document: decl.name.clone(),
                            mixin: name.clone(),
                        })?;
                        def.mixin(Arc::clone(mixin))
                    }
                };
            }
            def.attrs = convert_fields(&decl.name, decl.fields)?;
            batch.add(def);
        }

        Ok(batch)
    }
}

/// Parse schema JSON into a document batch.
pub fn parse_schema(content: &str) -> Result<DocumentBatch, LoadError> {
    let file: SchemaFile = serde_json::from_str(content).map_err(|e| LoadError::JsonParseFailed {
        message: e.to_string(),
    })?;
    file.into_batch()
}

/// Read and parse a schema file.
pub fn load_schema_file(path: &Path) -> Result<DocumentBatch, LoadError> {
    let content = fs::read_to_string(path).map_err(|e| LoadError::FileReadFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_schema(&content)
}
