//! Errors raised while constructing and looking up document types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocError {
    #[error("Document type '{name}' is not registered")]
    NotFound { name: String },

    #[error("Document type '{document}' extends unknown document type '{base}'")]
    UnknownBase { document: String, base: String },

    #[error("Field '{document}.{field}' references unknown document type '{target}'")]
    UnresolvedTarget {
        document: String,
        field: String,
        target: String,
    },

    #[error("Document type '{document}' has no primary key field")]
    NoPrimaryKey { document: String },
}
