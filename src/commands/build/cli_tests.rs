//! CLI parsing tests for build command using the test DSL.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;
    use std::path::PathBuf;

    crate::cli_required_arg_test! {
        command: "build",
        test_name: test_build_requires_file,
        required_arg: "--file",
    }

    crate::cli_option_test! {
        command: "build",
        variant: Build,
        test_name: test_build_with_file,
        args: ["--file", "Cargo.toml"],
        field: file,
        expected: PathBuf::from("Cargo.toml"),
    }

    crate::cli_option_test! {
        command: "build",
        variant: Build,
        test_name: test_build_with_short_file,
        args: ["-f", "Cargo.toml"],
        field: file,
        expected: PathBuf::from("Cargo.toml"),
    }

    crate::cli_error_test! {
        command: "build",
        test_name: test_build_missing_file_rejected,
        args: ["--file", "does/not/exist.json"],
    }

    #[rstest]
    fn test_global_format_after_subcommand() {
        let args = Args::try_parse_from(["docmeta", "build", "-f", "Cargo.toml", "--format", "json"]).unwrap();
        assert_eq!(args.format, crate::output::OutputFormat::Json);
    }
}
