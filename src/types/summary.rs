//! Flat, serializable summaries used by command output.

use serde::Serialize;

use crate::schema::{DocumentClass, Field};

/// One field of a document type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSummary {
    pub name: String,
    pub field_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_populates: Option<String>,
    pub multi: bool,
    pub primary_key: bool,
}

impl FieldSummary {
    pub fn new(name: &str, field: &Field) -> Self {
        let rel = field.as_relationship();
        Self {
            name: name.to_string(),
            field_type: field.field_type.type_name().to_string(),
            target: rel.map(|r| r.target.clone()),
            back_populates: field.back_populates().map(str::to_string),
            multi: rel.is_some() && field.is_multi(),
            primary_key: field.is_primary_key(),
        }
    }

    /// `name: type` with relationship details, as shown in tables.
    pub fn describe(&self) -> String {
        let mut out = format!("{}: {}", self.name, self.field_type);
        if let Some(target) = &self.target {
            let arrow = if self.multi { "=>" } else { "->" };
            out.push_str(&format!(" {} {}", arrow, target));
        }
        if let Some(back) = &self.back_populates {
            out.push_str(&format!(" (back_populates: {})", back));
        }
        if self.primary_key {
            out.push_str(" [pk]");
        }
        out
    }
}

/// A document type and its current mapping.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentSummary {
    pub name: String,
    pub bases: Vec<String>,
    pub fields: Vec<FieldSummary>,
}

impl DocumentSummary {
    pub fn from_class(class: &DocumentClass) -> Self {
        let mapping = class.mapping();
        Self {
            name: class.name().to_string(),
            bases: class.bases().iter().map(|b| b.name().to_string()).collect(),
            fields: mapping
                .iter()
                .map(|(name, field)| FieldSummary::new(name, field))
                .collect(),
        }
    }

    /// Header line plus one indented line per field.
    pub fn table_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.fields.len() + 1);
        if self.bases.is_empty() {
            lines.push(self.name.clone());
        } else {
            lines.push(format!("{} ({})", self.name, self.bases.join(", ")));
        }
        for field in &self.fields {
            lines.push(format!("  {}", field.describe()));
        }
        lines
    }
}
