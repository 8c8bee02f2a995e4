//! Execute tests for create-index command.

#[cfg(test)]
mod tests {
    use super::super::CreateIndexCmd;
    use crate::commands::Execute;
    use crate::config::{ConfigFile, SearchConfigFile};
    use crate::registry;
    use crate::test_utils::{execute_cmd, library_schema_file};
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_create_index_all_types() {
        registry::reset();
        let file = library_schema_file();

        let result = execute_cmd(CreateIndexCmd {
            file: file.path().to_path_buf(),
            name: Some("library".to_string()),
            docs: vec![],
        })
        .unwrap();

        assert_eq!(result.index, "library");
        assert_eq!(result.backend, "Cozo");
        assert_eq!(result.doc_types, vec!["Author", "Book"]);
        registry::reset();
    }

    #[test]
    #[serial]
    fn test_create_index_selected_types() {
        registry::reset();
        let file = library_schema_file();

        let result = execute_cmd(CreateIndexCmd {
            file: file.path().to_path_buf(),
            name: Some("authors".to_string()),
            docs: vec!["Author".to_string()],
        })
        .unwrap();

        assert_eq!(result.doc_types, vec!["Author"]);
        registry::reset();
    }

    #[test]
    #[serial]
    fn test_create_index_uses_default_name() {
        registry::reset();
        let file = library_schema_file();
        let config = ConfigFile {
            default_index: Some("fallback".to_string()),
            ..ConfigFile::default()
        };

        let cmd = CreateIndexCmd {
            file: file.path().to_path_buf(),
            name: None,
            docs: vec![],
        };
        let result = cmd.execute(&config).unwrap();

        assert_eq!(result.index, "fallback");
        registry::reset();
    }

    #[test]
    #[serial]
    fn test_create_index_without_name_fails() {
        registry::reset();
        let file = library_schema_file();

        let err = execute_cmd(CreateIndexCmd {
            file: file.path().to_path_buf(),
            name: None,
            docs: vec![],
        })
        .unwrap_err();

        assert!(err.to_string().contains("--name"));
        registry::reset();
    }

    #[test]
    #[serial]
    fn test_create_index_unknown_doc_fails() {
        registry::reset();
        let file = library_schema_file();

        let err = execute_cmd(CreateIndexCmd {
            file: file.path().to_path_buf(),
            name: Some("library".to_string()),
            docs: vec!["Publisher".to_string()],
        })
        .unwrap_err();

        assert!(err.to_string().contains("Publisher"));
        registry::reset();
    }

    #[test]
    #[serial]
    fn test_create_index_twice_in_sqlite_store_fails() {
        registry::reset();
        let dir = TempDir::new().expect("Failed to create temp dir");
        let config = ConfigFile {
            search: SearchConfigFile::Sqlite {
                path: dir.path().join("store.sqlite"),
            },
            default_index: None,
        };
        let file = library_schema_file();
        let cmd = || CreateIndexCmd {
            file: file.path().to_path_buf(),
            name: Some("library".to_string()),
            docs: vec![],
        };

        cmd().execute(&config).unwrap();
        let err = cmd().execute(&config).unwrap_err();

        assert!(err.to_string().contains("library"));
        registry::reset();
    }
}
