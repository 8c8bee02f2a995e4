//! Field inheritance from non-document bases.
//!
//! Document bases hand their fields down through the foundation stage's
//! mapping merge. Mixins are not part of that lineage, so their fields are
//! copied into the declaration here, before the mapping is finalized.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use crate::schema::{DocumentClass, Field, Mixin};

/// A base with document references resolved against the registry.
#[derive(Debug, Clone)]
pub enum ResolvedBase<'a> {
    Document(Arc<DocumentClass>),
    Mixin(&'a Mixin),
}

/// Fields a declaration may inherit, collected from its bases.
#[derive(Debug, Default)]
pub struct InheritanceCandidates {
    /// Mixin fields by name; later mixins overwrite earlier ones
    pub mixin_fields: BTreeMap<String, Field>,
    /// Names already provided by a document base's mapping
    pub covered: BTreeSet<String>,
}

impl InheritanceCandidates {
    pub fn collect(bases: &[ResolvedBase<'_>]) -> Self {
        let mut candidates = Self::default();

        for base in bases {
            match base {
                ResolvedBase::Document(class) => {
                    let mapping = class.read_mapping();
                    candidates
                        .covered
                        .extend(mapping.names().map(str::to_string));
                }
                ResolvedBase::Mixin(mixin) => {
                    for (name, field) in &mixin.fields {
                        candidates.mixin_fields.insert(name.clone(), field.clone());
                    }
                }
            }
        }

        candidates
    }
}

/// Copy mixin fields into `attrs`.
///
/// A mixin field is skipped when the declaration defines the name itself or
/// when a document base already covers it. Returns the inherited names.
pub fn inherit_fields(attrs: &mut BTreeMap<String, Field>, bases: &[ResolvedBase<'_>]) -> Vec<String> {
    let candidates = InheritanceCandidates::collect(bases);
    let mut inherited = Vec::new();

    for (name, field) in candidates.mixin_fields {
        if attrs.contains_key(&name) || candidates.covered.contains(&name) {
            continue;
        }
        attrs.insert(name.clone(), field);
        inherited.push(name);
    }

    inherited
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldType;
    use rstest::{fixture, rstest};

    #[fixture]
    fn timestamps() -> Mixin {
        Mixin::new("Timestamps")
            .field("created_at", Field::new(FieldType::Date))
            .field("updated_at", Field::new(FieldType::Date))
    }

    fn document_with(name: &str, fields: &[(&str, Field)]) -> Arc<DocumentClass> {
        let class = DocumentClass::new(name, Vec::new());
        {
            let mut mapping = class.write_mapping();
            for (field_name, field) in fields {
                mapping.field(*field_name, field.clone());
            }
        }
        Arc::new(class)
    }

    #[rstest]
    fn test_mixin_fields_are_inherited(timestamps: Mixin) {
        let mut attrs = BTreeMap::new();
        let inherited = inherit_fields(&mut attrs, &[ResolvedBase::Mixin(&timestamps)]);

        assert_eq!(inherited, vec!["created_at", "updated_at"]);
        assert_eq!(attrs.len(), 2);
    }

    #[rstest]
    fn test_own_declaration_wins(timestamps: Mixin) {
        let mut attrs = BTreeMap::new();
        attrs.insert("created_at".to_string(), Field::keyword());

        let inherited = inherit_fields(&mut attrs, &[ResolvedBase::Mixin(&timestamps)]);

        assert_eq!(inherited, vec!["updated_at"]);
        assert_eq!(attrs.get("created_at"), Some(&Field::keyword()));
    }

    #[rstest]
    fn test_document_base_covers_mixin_field(timestamps: Mixin) {
        let base = document_with("Entry", &[("created_at", Field::text())]);
        let mut attrs = BTreeMap::new();

        let inherited = inherit_fields(
            &mut attrs,
            &[ResolvedBase::Mixin(&timestamps), ResolvedBase::Document(base)],
        );

        // Order does not matter: coverage is computed over all bases first.
        assert_eq!(inherited, vec!["updated_at"]);
        assert!(!attrs.contains_key("created_at"));
    }

    #[rstest]
    fn test_later_mixin_overwrites_earlier() {
        let first = Mixin::new("First").field("label", Field::keyword());
        let second = Mixin::new("Second").field("label", Field::text());
        let mut attrs = BTreeMap::new();

        inherit_fields(
            &mut attrs,
            &[ResolvedBase::Mixin(&first), ResolvedBase::Mixin(&second)],
        );

        assert_eq!(attrs.get("label"), Some(&Field::text()));
    }

    #[rstest]
    fn test_candidates_collect_covered_names() {
        let base = document_with("Entry", &[("id", Field::id()), ("title", Field::text())]);
        let candidates = InheritanceCandidates::collect(&[ResolvedBase::Document(base)]);

        assert!(candidates.mixin_fields.is_empty());
        assert_eq!(
            candidates.covered.into_iter().collect::<Vec<_>>(),
            vec!["id", "title"]
        );
    }
}
