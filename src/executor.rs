//! External command execution.
//!
//! Every `mvn` and `git` invocation goes through [`CommandExecutor`], so the
//! release sequence can be exercised without spawning real processes.

use crate::error::{ReleaseError, Result};
use camino::Utf8PathBuf;
use log::debug;
use std::process::{Command, Output};

/// Abstraction for running external commands.
#[cfg_attr(test, mockall::automock)]
pub trait CommandExecutor {
    /// Runs a command with arguments to completion and returns the captured
    /// output.
    ///
    /// A non-zero exit is not an error at this level; callers inspect
    /// `output.status`.
    ///
    /// # Errors
    ///
    /// Returns [`ReleaseError::Spawn`] if the command cannot be started.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use camino::Utf8PathBuf;
    /// use pom_release::executor::{CommandExecutor, SystemCommandExecutor};
    ///
    /// let executor = SystemCommandExecutor::new(Utf8PathBuf::from("."));
    /// let output = executor.run("git", &["status".to_owned()])?;
    /// assert!(output.status.success());
    /// # Ok::<(), pom_release::error::ReleaseError>(())
    /// ```
    fn run(&self, program: &str, args: &[String]) -> Result<Output>;
}

/// Executes commands on the host system inside a fixed working directory.
#[derive(Debug, Clone)]
pub struct SystemCommandExecutor {
    working_dir: Utf8PathBuf,
}

impl SystemCommandExecutor {
    /// Create an executor that runs every command in `working_dir`.
    #[must_use]
    pub const fn new(working_dir: Utf8PathBuf) -> Self {
        Self { working_dir }
    }
}

impl CommandExecutor for SystemCommandExecutor {
    fn run(&self, program: &str, args: &[String]) -> Result<Output> {
        debug!("running {program} {} in {}", args.join(" "), self.working_dir);
        Command::new(program)
            .args(args)
            .current_dir(self.working_dir.as_std_path())
            .output()
            .map_err(|source| ReleaseError::Spawn {
                program: program.to_owned(),
                source,
            })
    }
}

/// Describes why a finished command failed.
///
/// Uses the trimmed stderr, then the trimmed stdout (`mvn` and
/// `git commit` report there), then the exit status.
#[must_use]
pub fn failure_message(output: &Output) -> String {
    [&output.stderr, &output.stdout]
        .into_iter()
        .map(|stream| String::from_utf8_lossy(stream).trim().to_owned())
        .find(|text| !text.is_empty())
        .unwrap_or_else(|| output.status.to_string())
}
