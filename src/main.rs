//! pom-release CLI entrypoint.
//!
//! Releases the Maven project in the current (or given) directory and then
//! reminds the user to push. Any failure is reported on stdout and ends the
//! process with status 1.

use camino::Utf8PathBuf;
use clap::Parser;
use pom_release::cli::Cli;
use pom_release::error::{ReleaseError, Result};
use pom_release::executor::SystemCommandExecutor;
use pom_release::logging;
use pom_release::output::write_line_lossy;
use pom_release::release::{ReleaseContext, ReleaseOptions, run_release};
use std::io::Write;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbosity, cli.quiet);

    let mut stdout = std::io::stdout().lock();
    let run_result = run(&cli, &mut stdout);
    let exit_code = exit_code_for_run_result(run_result, &mut stdout);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(cli: &Cli, stdout: &mut dyn Write) -> Result<()> {
    let working_dir = resolve_working_dir(cli.directory.clone())?;
    let context = ReleaseContext::new(working_dir.clone());
    let executor = SystemCommandExecutor::new(working_dir);

    run_release(&context, release_options(cli), &executor, stdout)?;
    Ok(())
}

/// Uses the `-C` directory when given, otherwise the current directory.
fn resolve_working_dir(directory: Option<Utf8PathBuf>) -> Result<Utf8PathBuf> {
    if let Some(dir) = directory {
        return Ok(dir);
    }

    let cwd = std::env::current_dir()?;
    Utf8PathBuf::try_from(cwd).map_err(|e| {
        ReleaseError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("current directory is not valid UTF-8: {e}"),
        ))
    })
}

const fn release_options(cli: &Cli) -> ReleaseOptions {
    ReleaseOptions {
        dry_run: cli.dry_run,
        quiet: cli.quiet,
    }
}

fn exit_code_for_run_result(result: Result<()>, stdout: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            log::debug!("release failed: {err:?}");
            write_line_lossy(stdout, err);
            1
        }
    }
}
