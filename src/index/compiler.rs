//! Cozo Datalog compiler for index definitions.
//!
//! An index is stored as one relation named after it, keyed by
//! `(doc_type, field)`. Each document type gets a header row with an empty
//! field name carrying its whole mapping; every field gets its own row.

use serde_json::Value;

use super::Index;

/// Field name of the per-document header row.
pub const DOC_TYPE_ROW: &str = "";

/// Compiler for generating Cozo scripts from index definitions.
pub struct IndexCompiler;

impl IndexCompiler {
    /// Generate the `:create` statement for an index relation.
    ///
    /// ```cozo
    /// :create index_name {
    ///     doc_type: String,
    ///     field: String
    ///     =>
    ///     field_type: String,
    ///     spec: String
    /// }
    /// ```
    pub fn compile_create(name: &str) -> String {
        format!(
            ":create {} {{\n    doc_type: String,\n    field: String\n    =>\n    field_type: String,\n    spec: String\n}}",
            name
        )
    }

    /// Rows describing every document type of `index`.
    pub fn rows(index: &Index) -> Vec<[String; 4]> {
        let mut rows = Vec::new();

        for class in index.doc_types() {
            let mapping = class.mapping();
            rows.push([
                class.name().to_string(),
                DOC_TYPE_ROW.to_string(),
                "document".to_string(),
                mapping.to_dict().to_string(),
            ]);

            for (field_name, field) in mapping.iter() {
                rows.push([
                    class.name().to_string(),
                    field_name.to_string(),
                    field.field_type.type_name().to_string(),
                    field.to_dict().to_string(),
                ]);
            }
        }

        rows
    }

    /// Generate the `:put` statement filling an index relation.
    ///
    /// Returns `None` for an index without document types.
    ///
    /// ```cozo
    /// ?[doc_type, field, field_type, spec] <- [["Author", "", "document", "{...}"], ...]
    /// :put index_name { doc_type, field => field_type, spec }
    /// ```
    pub fn compile_insert(index: &Index) -> Option<String> {
        let rows = Self::rows(index);
        if rows.is_empty() {
            return None;
        }

        let literals = rows
            .iter()
            .map(|row| {
                let cells = row.iter().map(|cell| quote(cell)).collect::<Vec<_>>();
                format!("[{}]", cells.join(", "))
            })
            .collect::<Vec<_>>()
            .join(", ");

        Some(format!(
            "?[doc_type, field, field_type, spec] <- [{}]\n:put {} {{ doc_type, field => field_type, spec }}",
            literals,
            index.name()
        ))
    }

    /// Create and fill an index relation in one chained transaction.
    ///
    /// If any block fails, cozo rolls back the whole script, so a failed
    /// insert never leaves an empty relation behind.
    ///
    /// ```cozo
    /// { :create index_name { ... } }
    /// { ?[...] <- [...] :put index_name { ... } }
    /// ```
    pub fn compile_create_index(index: &Index) -> String {
        let mut script = format!("{{\n{}\n}}", Self::compile_create(index.name()));
        if let Some(insert) = Self::compile_insert(index) {
            script.push_str(&format!("\n{{\n{}\n}}", insert));
        }
        script
    }

    /// Query listing the document types stored in an index.
    pub fn compile_doc_types(name: &str) -> String {
        format!(
            "?[doc_type] := *{}{{doc_type, field}}, field == {}",
            name,
            quote(DOC_TYPE_ROW)
        )
    }
}

// Cozo double-quoted strings follow JSON escaping rules.
fn quote(s: &str) -> String {
    Value::from(s).to_string()
}
