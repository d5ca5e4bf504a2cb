//! User-facing messages.
//!
//! The wording follows the long-standing output of the release script so
//! existing users recognise each step.

use crate::error::{ReleaseError, Result};
use crate::version::VersionPlan;
use std::fmt::Display;
use std::io::Write;

/// Separator printed before the closing instructions.
pub const SEPARATOR: &str = "---------------";

/// Reminder printed after a successful release.
pub const PUSH_INSTRUCTIONS: &str = "to complete the release; git push && git push --tags";

/// Summary of the versions involved.
///
/// # Examples
///
/// ```
/// use pom_release::output::version_summary;
/// use pom_release::version::{Version, VersionPlan};
///
/// let plan = VersionPlan::derive(Version::development(2, 5, 3))?;
/// assert_eq!(
///     version_summary(&plan),
///     "initial / current / next; 2.5.3-SNAPSHOT, 2.5.3, 2.5.4-SNAPSHOT"
/// );
/// # Ok::<(), pom_release::error::ReleaseError>(())
/// ```
#[must_use]
pub fn version_summary(plan: &VersionPlan) -> String {
    format!(
        "initial / current / next; {}, {}, {}",
        plan.source, plan.release, plan.next_development
    )
}

/// Message printed before asking the build tool to set a version.
#[must_use]
pub fn setting_version(version: &dyn Display) -> String {
    format!("will set the version to; {version}")
}

/// Message printed after the build tool set a version.
#[must_use]
pub fn version_set(version: &dyn Display) -> String {
    format!("set the version to; {version}")
}

/// Message printed after staging a file.
#[must_use]
pub fn file_staged(file: &str) -> String {
    format!("git add {file}")
}

/// Message printed after a commit.
pub const COMMITTED: &str = "commit";

/// Message printed after tagging.
#[must_use]
pub fn tagged(tag: &str) -> String {
    format!("tag the version at; {tag}")
}

/// Writes one line to `out`.
///
/// # Errors
///
/// Returns [`ReleaseError::WriteFailed`] if the writer fails.
pub fn write_line(out: &mut dyn Write, message: impl Display) -> Result<()> {
    writeln!(out, "{message}").map_err(|source| ReleaseError::WriteFailed { source })
}

/// Writes one line to `out`, ignoring failures.
///
/// Used for diagnostics on the way out, where a broken stream leaves nothing
/// better to do.
pub fn write_line_lossy(out: &mut dyn Write, message: impl Display) {
    if writeln!(out, "{message}").is_err() {
        // Best-effort; ignore write failures.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::Version;

    #[test]
    fn step_messages_match_script_wording() {
        let version = Version::release(1, 0, 1);
        assert_eq!(setting_version(&version), "will set the version to; 1.0.1");
        assert_eq!(version_set(&version), "set the version to; 1.0.1");
        assert_eq!(file_staged("pom.xml"), "git add pom.xml");
        assert_eq!(tagged("1.0.1"), "tag the version at; 1.0.1");
    }

    #[test]
    fn write_line_appends_newline() {
        let mut out = Vec::new();
        write_line(&mut out, COMMITTED).expect("write to vec");
        assert_eq!(out, b"commit\n");
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_line_reports_broken_stream() {
        let err = write_line(&mut BrokenWriter, "x").expect_err("stream is broken");
        assert!(matches!(err, ReleaseError::WriteFailed { .. }));
    }

    #[test]
    fn write_line_lossy_ignores_broken_stream() {
        write_line_lossy(&mut BrokenWriter, "x");
    }
}
