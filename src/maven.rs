//! Setting the project version through the Maven versions plugin.

use crate::error::{ReleaseError, Result};
use crate::executor::{CommandExecutor, failure_message};
use crate::version::Version;

/// Program name of the build tool.
pub const MAVEN_PROGRAM: &str = "mvn";

/// Arguments for `mvn versions:set` with backups disabled.
///
/// # Examples
///
/// ```
/// use pom_release::maven::set_version_args;
///
/// assert_eq!(
///     set_version_args("1.0.1"),
///     [
///         "-q",
///         "versions:set",
///         "-DnewVersion=1.0.1",
///         "-DgenerateBackupPoms=false",
///     ]
/// );
/// ```
#[must_use]
pub fn set_version_args(version: &str) -> Vec<String> {
    vec![
        "-q".to_owned(),
        "versions:set".to_owned(),
        format!("-DnewVersion={version}"),
        "-DgenerateBackupPoms=false".to_owned(),
    ]
}

/// Rewrites the manifest version in place.
///
/// # Errors
///
/// Returns [`ReleaseError::SetVersion`] if Maven exits non-zero, or
/// [`ReleaseError::Spawn`] if it cannot be started.
pub fn set_version(executor: &dyn CommandExecutor, version: &Version) -> Result<()> {
    let version_text = version.to_string();
    let output = executor.run(MAVEN_PROGRAM, &set_version_args(&version_text))?;

    if !output.status.success() {
        return Err(ReleaseError::SetVersion {
            version: version_text,
            message: failure_message(&output),
        });
    }

    Ok(())
}
