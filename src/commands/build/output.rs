//! Output formatting for build command results.

use super::execute::BuildResult;
use crate::output::Outputable;

impl Outputable for BuildResult {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "Built {} document type(s), {} backref(s)",
            self.documents.len(),
            self.backref_count
        ));

        for doc in &self.documents {
            lines.push(String::new());
            lines.extend(doc.table_lines());
        }

        lines.join("\n")
    }
}
