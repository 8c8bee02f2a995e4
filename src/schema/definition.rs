//! Raw document type declarations.
//!
//! A `DocumentDef` is what setup code writes down for a new document type: its
//! name, its bases in declaration order and the fields it declares itself. It
//! is turned into a `DocumentClass` by the construction pipeline.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::field::Field;

/// A plain base that declares fields but is not itself a document type.
#[derive(Debug, Clone, PartialEq)]
pub struct Mixin {
    pub name: String,
    /// Fields declared directly on this mixin
    pub fields: BTreeMap<String, Field>,
}

impl Mixin {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn field(mut self, name: impl Into<String>, field: Field) -> Self {
        self.fields.insert(name.into(), field);
        self
    }

    /// Mixin adding an integer `version` counter to a document type.
    pub fn versioned() -> Self {
        Self::new("Versioned").field("version", Field::integer())
    }
}

/// One entry of a declaration's base list.
#[derive(Debug, Clone, PartialEq)]
pub enum Base {
    /// A document type, referenced by its registered name
    Document(String),
    Mixin(Arc<Mixin>),
}

impl Base {
    pub fn name(&self) -> &str {
        match self {
            Base::Document(name) => name,
            Base::Mixin(mixin) => &mixin.name,
        }
    }
}

/// Declaration of a document type before construction.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentDef {
    pub name: String,
    pub bases: Vec<Base>,
    /// Fields declared directly by this type
    pub attrs: BTreeMap<String, Field>,
}

impl DocumentDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bases: Vec::new(),
            attrs: BTreeMap::new(),
        }
    }

    /// Append a document base.
    pub fn extends(mut self, document: impl Into<String>) -> Self {
        self.bases.push(Base::Document(document.into()));
        self
    }

    /// Append a mixin base.
    pub fn mixin(mut self, mixin: Arc<Mixin>) -> Self {
        self.bases.push(Base::Mixin(mixin));
        self
    }

    pub fn field(mut self, name: impl Into<String>, field: Field) -> Self {
        self.attrs.insert(name.into(), field);
        self
    }
}
