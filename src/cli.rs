//! CLI argument definitions for `pom-release`.
//!
//! Invoked without arguments the tool releases the Maven project in the
//! current directory. The flags only select a different directory, preview
//! the run, or tune diagnostics.

use camino::Utf8PathBuf;
use clap::Parser;

/// Release a Maven project from a local git repository.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "pom-release")]
#[command(version, about)]
#[command(long_about = concat!(
    "Release a Maven project from a local git repository.\n\n",
    "Reads the M.N.P-SNAPSHOT version from pom.xml, sets and commits the release ",
    "version M.N.P, tags it, then sets and commits M.N.(P+1)-SNAPSHOT. Versions are ",
    "changed with the Maven versions plugin; nothing is pushed.",
))]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Release the project in the current directory:\n",
    "    $ pom-release\n\n",
    "  Show the versions and commands without running them:\n",
    "    $ pom-release --dry-run\n\n",
    "  Release a project elsewhere:\n",
    "    $ pom-release -C ../my-service\n\n",
    "After a successful run: git push && git push --tags",
))]
pub struct Cli {
    /// Repository directory containing pom.xml [default: current directory].
    #[arg(short = 'C', long, value_name = "DIR")]
    pub directory: Option<Utf8PathBuf>,

    /// Show the derived versions and planned commands, then exit.
    #[arg(long)]
    pub dry_run: bool,

    /// Increase diagnostic output on stderr (repeatable: -v, -vv).
    #[arg(
        short,
        long = "verbose",
        action = clap::ArgAction::Count,
        conflicts_with = "quiet"
    )]
    pub verbosity: u8,

    /// Suppress per-command progress lines (errors still shown).
    #[arg(short, long, conflicts_with = "verbosity")]
    pub quiet: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
