//! The release sequence.
//!
//! A release reads the development version from the manifest and then walks
//! a fixed series of steps:
//!
//! 1. [`ReleaseStep::SetRelease`]: `mvn versions:set` to the release version.
//! 2. [`ReleaseStep::CommitRelease`]: `git add` and `git commit`.
//! 3. [`ReleaseStep::Tag`]: `git tag -a`.
//! 4. [`ReleaseStep::SetNextDevelopment`]: `mvn versions:set` to the next
//!    development version.
//! 5. [`ReleaseStep::CommitNextDevelopment`]: `git add` and `git commit`.
//!
//! The first failing command ends the run. Earlier steps are not rolled
//! back, so after a failure the repository must be inspected by hand before
//! trying again. Nothing is pushed.

use crate::error::Result;
use crate::executor::CommandExecutor;
use crate::git::{self, GIT_PROGRAM};
use crate::manifest::{MANIFEST_FILE_NAME, read_development_version};
use crate::maven::{self, MAVEN_PROGRAM};
use crate::output::{
    self, COMMITTED, PUSH_INSTRUCTIONS, SEPARATOR, file_staged, setting_version, tagged,
    version_set, version_summary,
};
use crate::version::{Version, VersionPlan};
use camino::{Utf8Path, Utf8PathBuf};
use log::info;
use std::fmt;
use std::io::Write;

/// Where a release takes place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseContext {
    working_dir: Utf8PathBuf,
    manifest_path: Utf8PathBuf,
}

impl ReleaseContext {
    /// Release the project whose `pom.xml` sits in `working_dir`.
    ///
    /// # Examples
    ///
    /// ```
    /// use camino::Utf8PathBuf;
    /// use pom_release::release::ReleaseContext;
    ///
    /// let context = ReleaseContext::new(Utf8PathBuf::from("/work/demo"));
    /// assert_eq!(context.manifest_path(), "/work/demo/pom.xml");
    /// ```
    #[must_use]
    pub fn new(working_dir: Utf8PathBuf) -> Self {
        let manifest_path = working_dir.join(MANIFEST_FILE_NAME);
        Self {
            working_dir,
            manifest_path,
        }
    }

    /// Repository working directory; every command runs here.
    #[must_use]
    pub fn working_dir(&self) -> &Utf8Path {
        &self.working_dir
    }

    /// Path of the manifest.
    #[must_use]
    pub fn manifest_path(&self) -> &Utf8Path {
        &self.manifest_path
    }

    /// Manifest path as given to `git add`, relative to the working directory.
    #[must_use]
    pub const fn manifest_file(&self) -> &'static str {
        MANIFEST_FILE_NAME
    }
}

/// Behavioural switches for a release run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReleaseOptions {
    /// List the commands instead of running them.
    pub dry_run: bool,
    /// Suppress per-command progress lines.
    pub quiet: bool,
}

/// The phases of a release, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseStep {
    /// Set the manifest to the release version.
    SetRelease,
    /// Stage and commit the release version.
    CommitRelease,
    /// Tag the release commit.
    Tag,
    /// Set the manifest to the next development version.
    SetNextDevelopment,
    /// Stage and commit the next development version.
    CommitNextDevelopment,
}

impl ReleaseStep {
    /// Every step, in execution order.
    pub const SEQUENCE: [Self; 5] = [
        Self::SetRelease,
        Self::CommitRelease,
        Self::Tag,
        Self::SetNextDevelopment,
        Self::CommitNextDevelopment,
    ];

    /// The commands this step issues for `plan`.
    #[must_use]
    pub fn actions(self, plan: &VersionPlan) -> Vec<ReleaseAction> {
        match self {
            Self::SetRelease => vec![ReleaseAction::SetVersion(plan.release)],
            Self::CommitRelease => vec![
                ReleaseAction::StageManifest,
                ReleaseAction::Commit(plan.release),
            ],
            Self::Tag => vec![ReleaseAction::Tag(plan.release)],
            Self::SetNextDevelopment => vec![ReleaseAction::SetVersion(plan.next_development)],
            Self::CommitNextDevelopment => vec![
                ReleaseAction::StageManifest,
                ReleaseAction::Commit(plan.next_development),
            ],
        }
    }
}

/// A single external command in the release sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseAction {
    /// `mvn versions:set` to the given version.
    SetVersion(Version),
    /// `git add` the manifest.
    StageManifest,
    /// `git commit` with the version as message.
    Commit(Version),
    /// `git tag -a` with the version as name and message.
    Tag(Version),
}

impl ReleaseAction {
    /// The command line this action runs.
    #[must_use]
    pub fn command(&self, manifest_file: &str) -> PlannedCommand {
        let (program, args) = match self {
            Self::SetVersion(version) => {
                (MAVEN_PROGRAM, maven::set_version_args(&version.to_string()))
            }
            Self::StageManifest => (GIT_PROGRAM, git::stage_args(manifest_file)),
            Self::Commit(version) => (GIT_PROGRAM, git::commit_args(&version.to_string())),
            Self::Tag(version) => (GIT_PROGRAM, git::tag_args(&version.to_string())),
        };
        PlannedCommand { program, args }
    }

    fn execute(
        &self,
        executor: &dyn CommandExecutor,
        manifest_file: &str,
        reporter: &mut Reporter<'_>,
    ) -> Result<()> {
        match self {
            Self::SetVersion(version) => {
                reporter.progress(setting_version(version))?;
                maven::set_version(executor, version)?;
                reporter.progress(version_set(version))
            }
            Self::StageManifest => {
                git::stage_file(executor, manifest_file)?;
                reporter.progress(file_staged(manifest_file))
            }
            Self::Commit(version) => {
                git::commit(executor, &version.to_string())?;
                reporter.progress(COMMITTED)
            }
            Self::Tag(version) => {
                let tag = version.to_string();
                git::tag(executor, &tag)?;
                reporter.progress(tagged(&tag))
            }
        }
    }
}

/// A rendered command line, shown in dry runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCommand {
    /// Program to run.
    pub program: &'static str,
    /// Arguments passed to the program.
    pub args: Vec<String>,
}

impl fmt::Display for PlannedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Every command a release of `plan` runs, in order.
///
/// # Examples
///
/// ```
/// use pom_release::release::planned_commands;
/// use pom_release::version::{Version, VersionPlan};
///
/// let plan = VersionPlan::derive(Version::development(1, 0, 1))?;
/// let commands = planned_commands(&plan, "pom.xml");
/// assert_eq!(commands.len(), 7);
/// assert_eq!(commands[3].to_string(), "git tag -a 1.0.1 -m 1.0.1");
/// # Ok::<(), pom_release::error::ReleaseError>(())
/// ```
#[must_use]
pub fn planned_commands(plan: &VersionPlan, manifest_file: &str) -> Vec<PlannedCommand> {
    ReleaseStep::SEQUENCE
        .iter()
        .flat_map(|step| step.actions(plan))
        .map(|action| action.command(manifest_file))
        .collect()
}

/// Reads the manifest and derives the versions for a release.
///
/// # Errors
///
/// Returns a precondition error if the manifest is missing, unparseable,
/// lacks a project version, or the version is not in `M.N.P-SNAPSHOT` form.
pub fn prepare(context: &ReleaseContext) -> Result<VersionPlan> {
    let source = read_development_version(context.manifest_path())?;
    VersionPlan::derive(source)
}

/// Runs a release.
///
/// Progress is written to `out`. On success the derived versions are
/// returned; on failure the first error is returned and nothing after the
/// failing command runs.
///
/// # Errors
///
/// Returns the precondition error from [`prepare`], or the first external
/// command failure.
pub fn run_release(
    context: &ReleaseContext,
    options: ReleaseOptions,
    executor: &dyn CommandExecutor,
    out: &mut dyn Write,
) -> Result<VersionPlan> {
    let plan = prepare(context)?;
    info!("releasing {} from {}", plan.release, context.working_dir());

    let mut reporter = Reporter {
        out,
        quiet: options.quiet,
    };
    reporter.always(version_summary(&plan))?;

    if options.dry_run {
        reporter.always("dry run - no commands will be run")?;
        for command in planned_commands(&plan, context.manifest_file()) {
            reporter.always(format_args!("  {command}"))?;
        }
        return Ok(plan);
    }

    for step in ReleaseStep::SEQUENCE {
        info!("release step: {step:?}");
        for action in step.actions(&plan) {
            action.execute(executor, context.manifest_file(), &mut reporter)?;
        }
    }

    reporter.always(SEPARATOR)?;
    reporter.always(PUSH_INSTRUCTIONS)?;
    info!("release {} complete", plan.release);

    Ok(plan)
}

struct Reporter<'a> {
    out: &'a mut dyn Write,
    quiet: bool,
}

impl Reporter<'_> {
    fn always(&mut self, message: impl fmt::Display) -> Result<()> {
        output::write_line(self.out, message)
    }

    fn progress(&mut self, message: impl fmt::Display) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.always(message)
    }
}

#[cfg(test)]
#[path = "release_tests.rs"]
mod tests;
