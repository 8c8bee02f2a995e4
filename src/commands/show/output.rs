//! Output formatting for show command results.

use super::execute::ShowResult;
use crate::output::Outputable;

impl Outputable for ShowResult {
    fn to_table(&self) -> String {
        let mut lines = self.document.table_lines();

        lines.push(String::new());
        lines.push(format!(
            "Primary key: {}",
            self.pk_field.as_deref().unwrap_or("(none)")
        ));
        if self.relationships.is_empty() {
            lines.push("Relationships: (none)".to_string());
        } else {
            lines.push(format!("Relationships: {}", self.relationships.join(", ")));
        }

        lines.join("\n")
    }
}
