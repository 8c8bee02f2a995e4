//! Backref synthesis.
//!
//! Runs after a type's mapping is finalized. Every relationship field that
//! carries a `BackrefRequest` gets a counterpart relationship on its target
//! type pointing back at the declaring type, and both sides record each
//! other's name as their back-populate marker.
//!
//! The target's mapping is edited in place. Injecting under a name the
//! target already uses replaces that field; this is logged, not rejected.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::error::DocError;
use crate::registry;
use crate::schema::{DocumentClass, Field, USELIST};

/// One resolved relationship pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackrefLink {
    /// Declaring document type
    pub source: String,
    /// Relationship field on the declaring type
    pub field: String,
    /// Document type the backref was injected into
    pub target: String,
    /// Name of the injected field
    pub backref: String,
}

/// Inject backrefs for every relationship of `class` that requests one.
///
/// Targets other than `class` itself are looked up in the registry, so they
/// must be registered before this runs.
pub fn synthesize_backrefs(class: &Arc<DocumentClass>) -> Result<Vec<BackrefLink>, DocError> {
    // Collect first: injecting may write into this class's own mapping.
    let requests: Vec<_> = class
        .read_mapping()
        .iter()
        .filter_map(|(name, field)| {
            let rel = field.as_relationship()?;
            let backref = rel.backref.clone()?;
            Some((name.to_string(), rel.target.clone(), backref))
        })
        .collect();

    let mut links = Vec::with_capacity(requests.len());

    for (field_name, target_name, request) in requests {
        let target = if target_name == class.name() {
            Arc::clone(class)
        } else {
            registry::get(&target_name).map_err(|_| DocError::UnresolvedTarget {
                document: class.name().to_string(),
                field: field_name.clone(),
                target: target_name.clone(),
            })?
        };

        let mut options = request.options;
        options
            .entry(USELIST.to_string())
            .or_insert(Value::Bool(false));

        let backref_field = Field::relationship(class.name())
            .with_options(options)
            .back_populating(field_name.as_str());

        let replaced = target
            .write_mapping()
            .field(request.name.clone(), backref_field);
        if replaced.is_some() {
            tracing::warn!(
                target_document = %target_name,
                field = %request.name,
                source = %class.name(),
                "backref replaced an existing field"
            );
        }

        if let Some(rel) = class
            .write_mapping()
            .get_mut(&field_name)
            .and_then(Field::as_relationship_mut)
        {
            rel.back_populates = Some(request.name.clone());
        }

        tracing::debug!(
            source = %class.name(),
            field = %field_name,
            target_document = %target_name,
            backref = %request.name,
            "synthesized backref"
        );

        links.push(BackrefLink {
            source: class.name().to_string(),
            field: field_name,
            target: target_name,
            backref: request.name,
        });
    }

    Ok(links)
}
