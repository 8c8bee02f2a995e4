//! Field type system for document mappings.
//!
//! A `Field` is a typed schema element plus a bag of keyword options. Its name
//! is the key it is stored under in a `Mapping`, which keeps names unique per
//! document type.
//!
//! Relationship fields additionally carry the name of the document type they
//! point at, an optional request for an inverse ("backref") field, and the
//! back-populate marker naming their paired field once the pipeline has
//! resolved the pair.

use serde_json::{Map, Value};

/// Keyword options attached to a field (e.g. `primary_key`, `uselist`).
pub type Options = Map<String, Value>;

/// Option key that marks a relationship as plural.
pub const USELIST: &str = "uselist";

/// Option key that marks a field as the document's primary key.
pub const PRIMARY_KEY: &str = "primary_key";

/// The value type of a field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    Keyword,
    Text,
    Integer,
    Long,
    Float,
    Boolean,
    Date,
    /// Document identifier. Always a primary key.
    Id,
    /// Free-form object
    Dict,
    /// Homogeneous list of another field type
    List(Box<FieldType>),
    /// Reference to another document type
    Relationship(Relationship),
}

impl FieldType {
    /// Returns the mapping type name used in serialized mappings.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Keyword => "keyword",
            FieldType::Text => "text",
            FieldType::Integer => "integer",
            FieldType::Long => "long",
            FieldType::Float => "float",
            FieldType::Boolean => "boolean",
            FieldType::Date => "date",
            FieldType::Id => "id",
            FieldType::Dict => "dict",
            FieldType::List(_) => "list",
            FieldType::Relationship(_) => "relationship",
        }
    }

    /// Parse a scalar type name. Compound types (`list`, `relationship`)
    /// need extra data and are not accepted here.
    pub fn from_scalar_name(name: &str) -> Option<Self> {
        let ty = match name {
            "keyword" => FieldType::Keyword,
            "text" => FieldType::Text,
            "integer" => FieldType::Integer,
            "long" => FieldType::Long,
            "float" => FieldType::Float,
            "boolean" => FieldType::Boolean,
            "date" => FieldType::Date,
            "id" => FieldType::Id,
            "dict" => FieldType::Dict,
            _ => return None,
        };
        Some(ty)
    }
}

/// Request for an inverse field on the relationship's target.
#[derive(Debug, Clone, PartialEq)]
pub struct BackrefRequest {
    /// Name of the field to create on the target document type
    pub name: String,
    /// Options for the generated field
    pub options: Options,
}

impl BackrefRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Options::new(),
        }
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

/// Relationship payload of a field.
#[derive(Debug, Clone, PartialEq)]
pub struct Relationship {
    /// Name of the referenced document type
    pub target: String,
    pub backref: Option<BackrefRequest>,
    /// Name of the paired inverse field, set once the pair is resolved
    pub back_populates: Option<String>,
}

impl Relationship {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            backref: None,
            back_populates: None,
        }
    }
}

/// A typed schema field.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub field_type: FieldType,
    pub options: Options,
}

impl Field {
    pub fn new(field_type: FieldType) -> Self {
        Self {
            field_type,
            options: Options::new(),
        }
    }

    pub fn keyword() -> Self {
        Self::new(FieldType::Keyword)
    }

    pub fn text() -> Self {
        Self::new(FieldType::Text)
    }

    pub fn integer() -> Self {
        Self::new(FieldType::Integer)
    }

    pub fn id() -> Self {
        Self::new(FieldType::Id)
    }

    pub fn list(item: FieldType) -> Self {
        Self::new(FieldType::List(Box::new(item)))
    }

    /// A relationship field pointing at the document type named `target`.
    pub fn relationship(target: impl Into<String>) -> Self {
        Self::new(FieldType::Relationship(Relationship::new(target)))
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.options.extend(options);
        self
    }

    /// Attach an inverse-field request. Has no effect on non-relationship fields.
    pub fn with_backref(mut self, backref: BackrefRequest) -> Self {
        if let Some(rel) = self.as_relationship_mut() {
            rel.backref = Some(backref);
        }
        self
    }

    /// Set the back-populate marker. Has no effect on non-relationship fields.
    pub fn back_populating(mut self, field_name: impl Into<String>) -> Self {
        if let Some(rel) = self.as_relationship_mut() {
            rel.back_populates = Some(field_name.into());
        }
        self
    }

    pub fn as_relationship(&self) -> Option<&Relationship> {
        match &self.field_type {
            FieldType::Relationship(rel) => Some(rel),
            _ => None,
        }
    }

    pub fn as_relationship_mut(&mut self) -> Option<&mut Relationship> {
        match &mut self.field_type {
            FieldType::Relationship(rel) => Some(rel),
            _ => None,
        }
    }

    pub fn is_relationship(&self) -> bool {
        self.as_relationship().is_some()
    }

    /// Back-populate marker of a relationship field.
    pub fn back_populates(&self) -> Option<&str> {
        self.as_relationship()
            .and_then(|rel| rel.back_populates.as_deref())
    }

    /// Whether a relationship holds many related documents (`uselist`).
    pub fn is_multi(&self) -> bool {
        self.options
            .get(USELIST)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    pub fn is_primary_key(&self) -> bool {
        matches!(self.field_type, FieldType::Id)
            || self
                .options
                .get(PRIMARY_KEY)
                .and_then(Value::as_bool)
                .unwrap_or(false)
    }

    /// The value a document holds for this field before anything is assigned.
    pub fn empty(&self) -> Value {
        match &self.field_type {
            FieldType::List(_) => Value::Array(Vec::new()),
            FieldType::Dict => Value::Object(Map::new()),
            FieldType::Relationship(_) if self.is_multi() => Value::Array(Vec::new()),
            _ => Value::Null,
        }
    }

    /// Serialize this field to its mapping form.
    ///
    /// Produces `{"type": "<name>", ...options}`, with `item` for lists and
    /// `doc_class` / `back_populates` for relationships. Backref requests are
    /// construction-time data and are not part of the serialized mapping.
    pub fn to_dict(&self) -> Value {
        let mut out = Map::new();
        out.insert("type".to_string(), Value::from(self.field_type.type_name()));

        match &self.field_type {
            FieldType::List(item) => {
                out.insert("item".to_string(), Value::from(item.type_name()));
            }
            FieldType::Relationship(rel) => {
                out.insert("doc_class".to_string(), Value::from(rel.target.as_str()));
                if let Some(back) = &rel.back_populates {
                    out.insert("back_populates".to_string(), Value::from(back.as_str()));
                }
            }
            _ => {}
        }

        for (key, value) in &self.options {
            out.insert(key.clone(), value.clone());
        }

        Value::Object(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("keyword", FieldType::Keyword)]
    #[case("integer", FieldType::Integer)]
    #[case("id", FieldType::Id)]
    #[case("dict", FieldType::Dict)]
    fn test_scalar_names_round_trip(#[case] name: &str, #[case] expected: FieldType) {
        let parsed = FieldType::from_scalar_name(name).expect("known scalar type");
        assert_eq!(parsed, expected);
        assert_eq!(parsed.type_name(), name);
    }

    #[rstest]
    #[case("list")]
    #[case("relationship")]
    #[case("bogus")]
    fn test_compound_and_unknown_names_rejected(#[case] name: &str) {
        assert!(FieldType::from_scalar_name(name).is_none());
    }

    #[rstest]
    fn test_backref_only_applies_to_relationships() {
        let field = Field::keyword().with_backref(BackrefRequest::new("items"));
        assert_eq!(field, Field::keyword());

        let rel = Field::relationship("Author").with_backref(BackrefRequest::new("books"));
        let backref = rel.as_relationship().and_then(|r| r.backref.as_ref());
        assert_eq!(backref.map(|b| b.name.as_str()), Some("books"));
    }

    #[rstest]
    fn test_is_multi_defaults_to_false() {
        assert!(!Field::relationship("Author").is_multi());
        assert!(Field::relationship("Author").with_option(USELIST, true).is_multi());
    }

    #[rstest]
    fn test_primary_key_detection() {
        assert!(Field::id().is_primary_key());
        assert!(Field::keyword().with_option(PRIMARY_KEY, true).is_primary_key());
        assert!(!Field::keyword().is_primary_key());
    }

    #[rstest]
    #[case(Field::list(FieldType::Keyword), json!([]))]
    #[case(Field::new(FieldType::Dict), json!({}))]
    #[case(Field::relationship("Book").with_option(USELIST, true), json!([]))]
    #[case(Field::relationship("Book"), Value::Null)]
    #[case(Field::text(), Value::Null)]
    fn test_empty_values(#[case] field: Field, #[case] expected: Value) {
        assert_eq!(field.empty(), expected);
    }

    #[rstest]
    fn test_relationship_to_dict() {
        let field = Field::relationship("Author")
            .with_option(USELIST, false)
            .with_backref(BackrefRequest::new("books"))
            .back_populating("books");

        assert_eq!(
            field.to_dict(),
            json!({
                "type": "relationship",
                "doc_class": "Author",
                "back_populates": "books",
                "uselist": false
            })
        );
    }

    #[rstest]
    fn test_list_to_dict_includes_item_type() {
        assert_eq!(
            Field::list(FieldType::Integer).to_dict(),
            json!({"type": "list", "item": "integer"})
        );
    }
}
