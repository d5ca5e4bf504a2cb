//! Git operations for recording a release.
//!
//! This module stages the manifest, commits it, and creates the annotated
//! release tag. Nothing here pushes; publishing the commits and tags is left
//! to the user.

use crate::error::{ReleaseError, Result};
use crate::executor::{CommandExecutor, failure_message};

/// Program name of the version-control client.
pub const GIT_PROGRAM: &str = "git";

/// Arguments for `git add <file>`.
#[must_use]
pub fn stage_args(file: &str) -> Vec<String> {
    vec!["add".to_owned(), file.to_owned()]
}

/// Arguments for `git commit -m <message>`.
#[must_use]
pub fn commit_args(message: &str) -> Vec<String> {
    vec!["commit".to_owned(), "-m".to_owned(), message.to_owned()]
}

/// Arguments for `git tag -a <tag> -m <tag>`.
#[must_use]
pub fn tag_args(tag: &str) -> Vec<String> {
    vec![
        "tag".to_owned(),
        "-a".to_owned(),
        tag.to_owned(),
        "-m".to_owned(),
        tag.to_owned(),
    ]
}

/// Adds `file` to the index.
///
/// # Errors
///
/// Returns [`ReleaseError::Stage`] if `git add` exits non-zero.
pub fn stage_file(executor: &dyn CommandExecutor, file: &str) -> Result<()> {
    let output = executor.run(GIT_PROGRAM, &stage_args(file))?;

    if !output.status.success() {
        return Err(ReleaseError::Stage {
            file: file.to_owned(),
            message: failure_message(&output),
        });
    }

    Ok(())
}

/// Commits whatever is staged with the given message.
///
/// # Errors
///
/// Returns [`ReleaseError::Commit`] if `git commit` exits non-zero.
pub fn commit(executor: &dyn CommandExecutor, message: &str) -> Result<()> {
    let output = executor.run(GIT_PROGRAM, &commit_args(message))?;

    if !output.status.success() {
        return Err(ReleaseError::Commit {
            message: failure_message(&output),
        });
    }

    Ok(())
}

/// Creates an annotated tag at the current commit, using the tag name as the
/// annotation message.
///
/// # Errors
///
/// Returns [`ReleaseError::Tag`] if `git tag` exits non-zero.
pub fn tag(executor: &dyn CommandExecutor, tag: &str) -> Result<()> {
    let output = executor.run(GIT_PROGRAM, &tag_args(tag))?;

    if !output.status.success() {
        return Err(ReleaseError::Tag {
            tag: tag.to_owned(),
            message: failure_message(&output),
        });
    }

    Ok(())
}
