//! Mapping finalization.
//!
//! Turns the declared attributes (own fields plus inherited mixin fields) into
//! a `Mapping`, then folds in the mappings of document bases. Fields declared
//! on the new type always win, and an earlier document base wins over a later
//! one.

use std::collections::BTreeMap;

use super::inheritance::ResolvedBase;
use crate::error::DocError;
use crate::registry;
use crate::schema::{DocumentClass, Field, Mapping};

/// Build the finalized mapping for a declaration.
pub fn finalize_mapping(attrs: BTreeMap<String, Field>, bases: &[ResolvedBase<'_>]) -> Mapping {
    let mut mapping: Mapping = attrs.into_iter().collect();

    for base in bases {
        if let ResolvedBase::Document(class) = base {
            mapping.update(&class.read_mapping(), true);
        }
    }

    mapping
}

/// Check that every relationship target of `class` is registered.
pub fn validate_targets(class: &DocumentClass) -> Result<(), DocError> {
    let mapping = class.read_mapping();

    for (name, field) in mapping.iter() {
        let Some(rel) = field.as_relationship() else {
            continue;
        };
        if rel.target == class.name() {
            continue;
        }
        if registry::get(&rel.target).is_err() {
            return Err(DocError::UnresolvedTarget {
                document: class.name().to_string(),
                field: name.to_string(),
                target: rel.target.clone(),
            });
        }
    }

    Ok(())
}
