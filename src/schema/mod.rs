//! Document schema types.
//!
//! # Overview
//!
//! 1. **Fields** (`field.rs`): `Field`, `FieldType`, `Relationship`, `BackrefRequest`
//! 2. **Mappings** (`mapping.rs`): finalized name → field tables
//! 3. **Definitions** (`definition.rs`): `DocumentDef`, `Base`, `Mixin`
//! 4. **Document types** (`document.rs`): `DocumentClass`, the pipeline's output

mod definition;
mod document;
mod field;
mod mapping;

pub use definition::{Base, DocumentDef, Mixin};
pub use document::DocumentClass;
pub use field::{BackrefRequest, Field, FieldType, Options, PRIMARY_KEY, Relationship, USELIST};
pub use mapping::Mapping;
