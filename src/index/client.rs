//! Search client trait.
//!
//! Abstracts the store an index definition is created in, so the index helper
//! does not depend on a particular backend.

use super::{Index, IndexError};

/// Trait for backends that can create indices.
pub trait SearchClient: Send + Sync {
    /// Get the backend name for logging/debugging.
    fn backend_name(&self) -> &'static str;

    /// Create `index` with its document types.
    ///
    /// Does not check for an existing index first; creating an index twice
    /// fails with the backend's own error.
    fn create_index(&self, index: &Index) -> Result<(), IndexError>;

    /// Names of the document types stored in an existing index, read back
    /// after creation. Fails when the index does not exist.
    fn doc_types(&self, name: &str) -> Result<Vec<String>, IndexError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_is_object_safe() {
        fn accepts_client(_client: &dyn SearchClient) {}
        let _ = accepts_client;
    }
}
