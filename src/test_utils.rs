//! Shared test utilities for execute and output tests.

use std::io::Write;

use tempfile::NamedTempFile;

use crate::commands::Execute;
use crate::config::ConfigFile;

/// Two document types wired by a `books`/`author` backref pair.
pub const LIBRARY_SCHEMA: &str = r#"{
    "documents": [
        {
            "name": "Author",
            "bases": [{"mixin": "Versioned"}],
            "fields": {
                "id": {"type": "id", "primary_key": true},
                "name": {"type": "keyword"}
            }
        },
        {
            "name": "Book",
            "fields": {
                "title": {"type": "text"},
                "author": {
                    "type": "relationship",
                    "target": "Author",
                    "backref": {"name": "books", "uselist": true}
                }
            }
        }
    ]
}"#;

/// Create a temporary file containing the given content.
pub fn create_temp_json_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

/// Temporary file holding [`LIBRARY_SCHEMA`].
pub fn library_schema_file() -> NamedTempFile {
    create_temp_json_file(LIBRARY_SCHEMA)
}

/// Execute a command with the default (in-memory) configuration.
pub fn execute_cmd<C: Execute>(cmd: C) -> Result<C::Output, Box<dyn std::error::Error>> {
    cmd.execute(&ConfigFile::default())
}
