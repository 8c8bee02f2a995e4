//! CLI parsing tests for create-index command using the test DSL.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;

    crate::cli_required_arg_test! {
        command: "create-index",
        test_name: test_create_index_requires_file,
        required_arg: "--file",
    }

    crate::cli_option_test! {
        command: "create-index",
        variant: CreateIndex,
        test_name: test_create_index_name_defaults_to_none,
        args: ["-f", "Cargo.toml"],
        field: name,
        expected: None,
    }

    crate::cli_option_test! {
        command: "create-index",
        variant: CreateIndex,
        test_name: test_create_index_with_name,
        args: ["-f", "Cargo.toml", "--name", "library"],
        field: name,
        expected: Some("library".to_string()),
    }

    crate::cli_option_test! {
        command: "create-index",
        variant: CreateIndex,
        test_name: test_create_index_docs_default_empty,
        args: ["-f", "Cargo.toml"],
        field: docs,
        expected: Vec::<String>::new(),
    }

    crate::cli_option_test! {
        command: "create-index",
        variant: CreateIndex,
        test_name: test_create_index_repeated_docs,
        args: ["-f", "Cargo.toml", "-d", "Author", "--doc", "Book"],
        field: docs,
        expected: vec!["Author".to_string(), "Book".to_string()],
    }

    #[rstest]
    fn test_global_db_option() {
        let args = Args::try_parse_from(["docmeta", "--db", "store.sqlite", "create-index", "-f", "Cargo.toml"]).unwrap();
        assert_eq!(args.db, Some(std::path::PathBuf::from("store.sqlite")));
    }
}
