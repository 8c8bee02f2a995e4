//! Finalized field mappings.
//!
//! A `Mapping` is the name → field table a document type ends up with once the
//! foundation stage has merged its own declarations with those of its document
//! bases. It stays mutable afterwards so that backrefs can be injected into an
//! already-built type.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use super::field::Field;

/// Field mapping of a document type, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mapping {
    fields: BTreeMap<String, Field>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a field. Returns the field previously stored under
    /// `name`, if any.
    pub fn field(&mut self, name: impl Into<String>, field: Field) -> Option<Field> {
        self.fields.insert(name.into(), field)
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields.iter().map(|(name, field)| (name.as_str(), field))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Merge another mapping into this one.
    ///
    /// With `update_only`, fields already present here are left untouched and
    /// only missing names are copied over.
    pub fn update(&mut self, other: &Mapping, update_only: bool) {
        for (name, field) in &other.fields {
            if update_only && self.fields.contains_key(name) {
                continue;
            }
            self.fields.insert(name.clone(), field.clone());
        }
    }

    /// Serialize as `{"properties": {name: field, ...}}`.
    pub fn to_dict(&self) -> Value {
        let properties: Map<String, Value> = self
            .fields
            .iter()
            .map(|(name, field)| (name.clone(), field.to_dict()))
            .collect();

        let mut out = Map::new();
        out.insert("properties".to_string(), Value::Object(properties));
        Value::Object(out)
    }
}

impl FromIterator<(String, Field)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (String, Field)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn base_mapping() -> Mapping {
        let mut mapping = Mapping::new();
        mapping.field("title", Field::text());
        mapping.field("id", Field::id());
        mapping
    }

    #[rstest]
    fn test_field_returns_replaced_value(mut base_mapping: Mapping) {
        let previous = base_mapping.field("title", Field::keyword());
        assert_eq!(previous, Some(Field::text()));
        assert_eq!(base_mapping.get("title"), Some(&Field::keyword()));
    }

    #[rstest]
    fn test_update_only_keeps_existing_fields(mut base_mapping: Mapping) {
        let mut other = Mapping::new();
        other.field("title", Field::keyword());
        other.field("summary", Field::text());

        base_mapping.update(&other, true);

        assert_eq!(base_mapping.get("title"), Some(&Field::text()));
        assert_eq!(base_mapping.get("summary"), Some(&Field::text()));
        assert_eq!(base_mapping.len(), 3);
    }

    #[rstest]
    fn test_update_overwrites_without_update_only(mut base_mapping: Mapping) {
        let mut other = Mapping::new();
        other.field("title", Field::keyword());

        base_mapping.update(&other, false);

        assert_eq!(base_mapping.get("title"), Some(&Field::keyword()));
    }

    #[rstest]
    fn test_names_are_sorted(base_mapping: Mapping) {
        let names: Vec<_> = base_mapping.names().collect();
        assert_eq!(names, vec!["id", "title"]);
    }

    #[rstest]
    fn test_to_dict(base_mapping: Mapping) {
        assert_eq!(
            base_mapping.to_dict(),
            json!({
                "properties": {
                    "id": {"type": "id"},
                    "title": {"type": "text"}
                }
            })
        );
    }
}
