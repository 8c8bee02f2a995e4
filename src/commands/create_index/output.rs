//! Output formatting for create-index command results.

use super::execute::CreateIndexResult;
use crate::output::Outputable;

impl Outputable for CreateIndexResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Created index '{}' ({})", self.index, self.backend));
        if self.doc_types.is_empty() {
            lines.push("  (no document types)".to_string());
        }
        for doc_type in &self.doc_types {
            lines.push(format!("  {}", doc_type));
        }

        lines.join("\n")
    }
}
