//! Tests for CLI parsing and default behaviours.

use super::*;
use rstest::rstest;

#[test]
fn cli_parses_defaults() {
    let cli = Cli::parse_from(["pom-release"]);
    assert!(cli.directory.is_none());
    assert!(!cli.dry_run);
    assert_eq!(cli.verbosity, 0);
    assert!(!cli.quiet);
}

#[rstest]
#[case::short(&["pom-release", "-C", "/work/demo"])]
#[case::long(&["pom-release", "--directory", "/work/demo"])]
fn cli_parses_directory(#[case] args: &[&str]) {
    let cli = Cli::parse_from(args);
    assert_eq!(cli.directory, Some(Utf8PathBuf::from("/work/demo")));
}

#[test]
fn cli_parses_dry_run() {
    let cli = Cli::parse_from(["pom-release", "--dry-run"]);
    assert!(cli.dry_run);
}

#[rstest]
#[case(&["pom-release", "-v"], 1)]
#[case(&["pom-release", "-vv"], 2)]
#[case(&["pom-release", "--verbose", "--verbose", "--verbose"], 3)]
fn cli_counts_verbosity(#[case] args: &[&str], #[case] expected: u8) {
    let cli = Cli::parse_from(args);
    assert_eq!(cli.verbosity, expected);
}

#[test]
fn cli_rejects_quiet_with_verbose() {
    let result = Cli::try_parse_from(["pom-release", "-q", "-v"]);
    assert!(result.is_err());
}

#[test]
fn cli_rejects_positional_arguments() {
    let result = Cli::try_parse_from(["pom-release", "1.2.3"]);
    assert!(result.is_err());
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
