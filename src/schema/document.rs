//! Constructed document types.

use std::collections::BTreeSet;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::{Map, Value};

use super::definition::Base;
use super::field::{Field, FieldType, Options};
use super::mapping::Mapping;
use crate::error::DocError;

/// Fields left out of `null_values()`.
const NULL_VALUE_SKIP: &[&str] = &["_acl", "id", "version"];

/// A document type produced by the construction pipeline.
///
/// Instances are shared as `Arc<DocumentClass>` through the registry. The
/// mapping sits behind a lock because backref synthesis for one type writes
/// into the mapping of another, already registered, type.
#[derive(Debug)]
pub struct DocumentClass {
    name: String,
    bases: Vec<Base>,
    mapping: RwLock<Mapping>,
}

impl DocumentClass {
    pub(crate) fn new(name: impl Into<String>, bases: Vec<Base>) -> Self {
        Self {
            name: name.into(),
            bases,
            mapping: RwLock::new(Mapping::new()),
        }
    }

    /// A type holding only the declaration's own fields, outside the registry.
    #[cfg(test)]
    pub(crate) fn detached(def: super::definition::DocumentDef) -> std::sync::Arc<Self> {
        let class = Self::new(def.name, def.bases);
        *class.write_mapping() = def.attrs.into_iter().collect();
        std::sync::Arc::new(class)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bases(&self) -> &[Base] {
        &self.bases
    }

    /// Snapshot of the current mapping.
    pub fn mapping(&self) -> Mapping {
        self.read_mapping().clone()
    }

    // Lock poisoning only happens if a writer panicked mid-update; the
    // mapping itself is still a valid map, so keep using it.
    pub(crate) fn read_mapping(&self) -> RwLockReadGuard<'_, Mapping> {
        self.mapping.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write_mapping(&self) -> RwLockWriteGuard<'_, Mapping> {
        self.mapping.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn field(&self, name: &str) -> Option<Field> {
        self.read_mapping().get(name).cloned()
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.read_mapping().contains(name)
    }

    /// Keyword options the field was declared with.
    pub fn field_params(&self, name: &str) -> Option<Options> {
        self.read_mapping().get(name).map(|f| f.options.clone())
    }

    /// Names of all relationship fields, in mapping order.
    pub fn relationships(&self) -> Vec<String> {
        self.read_mapping()
            .iter()
            .filter(|(_, field)| field.is_relationship())
            .map(|(name, _)| name.to_string())
            .collect()
    }

    /// Name of the primary key field.
    pub fn pk_field(&self) -> Result<String, DocError> {
        self.read_mapping()
            .iter()
            .find(|(_, field)| field.is_primary_key())
            .map(|(name, _)| name.to_string())
            .ok_or_else(|| DocError::NoPrimaryKey {
                document: self.name.clone(),
            })
    }

    pub fn pk_field_type(&self) -> Result<FieldType, DocError> {
        let pk = self.pk_field()?;
        self.read_mapping()
            .get(&pk)
            .map(|field| field.field_type.clone())
            .ok_or(DocError::NoPrimaryKey {
                document: self.name.clone(),
            })
    }

    /// Field names a query may filter on: the mapping plus `_id`.
    pub fn fields_to_query(&self) -> BTreeSet<String> {
        let mut names: BTreeSet<String> = self.read_mapping().names().map(str::to_string).collect();
        names.insert("_id".to_string());
        names
    }

    /// Empty value for every field a document of this type can be reset to.
    pub fn null_values(&self) -> Map<String, Value> {
        self.read_mapping()
            .iter()
            .filter(|(name, _)| !NULL_VALUE_SKIP.contains(name))
            .map(|(name, field)| (name.to_string(), field.empty()))
            .collect()
    }

    pub fn to_dict(&self) -> Value {
        self.read_mapping().to_dict()
    }
}
