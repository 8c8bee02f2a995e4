//! Execute tests for build command.

#[cfg(test)]
mod tests {
    use super::super::BuildCmd;
    use crate::registry;
    use crate::test_utils::{create_temp_json_file, execute_cmd, library_schema_file};
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_build_library() {
        registry::reset();
        let file = library_schema_file();

        let result = execute_cmd(BuildCmd {
            file: file.path().to_path_buf(),
        })
        .unwrap();

        assert_eq!(result.documents.len(), 2);
        assert_eq!(result.backref_count, 1);

        let author = &result.documents[0];
        assert_eq!(author.name, "Author");
        assert_eq!(author.bases, vec!["Versioned"]);
        let books = author.fields.iter().find(|f| f.name == "books").unwrap();
        assert_eq!(books.target.as_deref(), Some("Book"));
        assert_eq!(books.back_populates.as_deref(), Some("author"));
        assert!(books.multi);
        registry::reset();
    }

    #[test]
    #[serial]
    fn test_build_registers_types() {
        registry::reset();
        let file = library_schema_file();

        execute_cmd(BuildCmd {
            file: file.path().to_path_buf(),
        })
        .unwrap();

        assert_eq!(registry::list_all().len(), 2);
        registry::reset();
    }

    #[test]
    #[serial]
    fn test_build_counts_synthesized_backrefs() {
        registry::reset();
        let file = create_temp_json_file(
            r#"{"documents": [
                {"name": "Shelf"},
                {"name": "Author", "fields": {
                    "shelf": {"type": "relationship", "target": "Shelf", "backref": {"name": "owner"}}
                }},
                {"name": "Book", "fields": {
                    "author": {"type": "relationship", "target": "Author", "backref": {"name": "shelf"}}
                }}
            ]}"#,
        );

        let result = execute_cmd(BuildCmd {
            file: file.path().to_path_buf(),
        })
        .unwrap();

        // Book's backref replaces Author.shelf, but both injections happened.
        assert_eq!(result.backref_count, 2);
        let author = registry::get("Author").unwrap();
        assert_eq!(author.field("shelf").unwrap().as_relationship().unwrap().target, "Book");
        registry::reset();
    }

    #[test]
    #[serial]
    fn test_build_unresolved_target_fails() {
        registry::reset();
        let file = create_temp_json_file(
            r#"{"documents": [{"name": "Book", "fields": {"author": {"type": "relationship", "target": "Ghost"}}}]}"#,
        );

        let err = execute_cmd(BuildCmd {
            file: file.path().to_path_buf(),
        })
        .unwrap_err();

        assert!(err.to_string().contains("Ghost"));
        registry::reset();
    }

    #[test]
    #[serial]
    fn test_build_unknown_base_fails() {
        registry::reset();
        let file = create_temp_json_file(r#"{"documents": [{"name": "Book", "bases": [{"document": "Nope"}]}]}"#);

        let err = execute_cmd(BuildCmd {
            file: file.path().to_path_buf(),
        })
        .unwrap_err();

        assert!(err.to_string().contains("Nope"));
        registry::reset();
    }
}
