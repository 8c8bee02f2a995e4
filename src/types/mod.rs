//! Serializable views of constructed document types.

mod summary;

pub use summary::{DocumentSummary, FieldSummary};
