//! Process-wide document registry.
//!
//! Maps document type names to constructed types. The table starts empty,
//! is filled as the pipeline builds types, and lives until process exit.
//! Registering a name twice replaces the earlier entry.

use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use crate::error::DocError;
use crate::schema::DocumentClass;

type Table = BTreeMap<String, Arc<DocumentClass>>;

static REGISTRY: LazyLock<RwLock<Table>> = LazyLock::new(|| RwLock::new(Table::new()));

/// Insert `class` under its name, replacing any earlier entry.
pub fn register(class: Arc<DocumentClass>) {
    let name = class.name().to_string();
    let mut table = REGISTRY.write().unwrap_or_else(PoisonError::into_inner);
    if table.insert(name.clone(), class).is_some() {
        tracing::warn!(document = %name, "replaced existing registry entry");
    } else {
        tracing::debug!(document = %name, "registered document type");
    }
}

/// Look up a document type by name.
pub fn get(name: &str) -> Result<Arc<DocumentClass>, DocError> {
    REGISTRY
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(name)
        .cloned()
        .ok_or_else(|| DocError::NotFound {
            name: name.to_string(),
        })
}

/// Snapshot of every registered document type.
pub fn list_all() -> BTreeMap<String, Arc<DocumentClass>> {
    REGISTRY.read().unwrap_or_else(PoisonError::into_inner).clone()
}

/// Drop every entry. Intended for test isolation.
pub fn reset() {
    REGISTRY.write().unwrap_or_else(PoisonError::into_inner).clear();
}
