//! docmeta library - document type metaclass machinery
//!
//! Builds document types from declarations: inherits mixin fields, finalizes
//! each type's mapping, registers it by name and wires bidirectional
//! relationships through backrefs. Registered types can then be grouped into
//! named indices stored through a search client.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod loader;
pub mod output;
pub mod pipeline;
pub mod registry;
pub mod schema;
pub mod types;

#[macro_use]
pub mod test_macros;

#[cfg(test)]
pub mod test_utils;

pub use error::DocError;
pub use index::{Index, IndexError, SearchClient, create_index};
pub use pipeline::{BuiltBatch, DocumentBatch, build_document_type};
pub use schema::{BackrefRequest, Base, DocumentClass, DocumentDef, Field, FieldType, Mapping, Mixin};
