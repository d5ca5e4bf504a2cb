//! Error types for the release orchestrator.
//!
//! Every variant is fatal: the release sequence stops at the first error and
//! the binary exits with status 1. Variants are grouped into the
//! [`ErrorKind`] taxonomy so callers can tell precondition failures (nothing
//! was changed) from failures part-way through the sequence.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur while preparing or running a release.
#[derive(Debug, Error)]
pub enum ReleaseError {
    /// The manifest file does not exist at the expected location.
    #[error("the 'pom.xml' file should be accessible at {path}")]
    ManifestNotFound {
        /// Path where the manifest was expected.
        path: Utf8PathBuf,
    },

    /// The manifest exists but could not be parsed as XML.
    #[error("the 'pom.xml' at {path} should be able to be parsed: {reason}")]
    ManifestUnparseable {
        /// Path to the manifest.
        path: Utf8PathBuf,
        /// Description of the parse failure.
        reason: String,
    },

    /// The manifest has no top-level project version.
    #[error("unable to find the top level project version in {path}")]
    VersionElementMissing {
        /// Path to the manifest.
        path: Utf8PathBuf,
    },

    /// The manifest version does not have the expected development form.
    #[error("the pom version is malformed; {version}")]
    MalformedVersion {
        /// The offending version text.
        version: String,
    },

    /// `mvn versions:set` reported a non-zero exit.
    #[error("unable to set the version to; {version}: {message}")]
    SetVersion {
        /// The version that could not be set.
        version: String,
        /// Failure output of the failed command.
        message: String,
    },

    /// `git add` reported a non-zero exit.
    #[error("unable to git add {file}: {message}")]
    Stage {
        /// The file that could not be staged.
        file: String,
        /// Failure output of the failed command.
        message: String,
    },

    /// `git commit` reported a non-zero exit.
    #[error("unable to commit: {message}")]
    Commit {
        /// Failure output of the failed command.
        message: String,
    },

    /// `git tag` reported a non-zero exit.
    #[error("unable to tag the version at; {tag}: {message}")]
    Tag {
        /// The tag that could not be created.
        tag: String,
        /// Failure output of the failed command.
        message: String,
    },

    /// An external command could not be started at all.
    #[error("failed to run {program}")]
    Spawn {
        /// Program that failed to start.
        program: String,
        /// The underlying spawn error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write user-facing output.
    #[error("failed to write output")]
    WriteFailed {
        /// The underlying write error.
        #[source]
        source: std::io::Error,
    },

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Test stub received an unexpected or mismatched command invocation.
    #[cfg(any(test, feature = "test-support"))]
    #[error("stub mismatch: {message}")]
    StubMismatch {
        /// Description of what was expected versus what was received.
        message: String,
    },
}

/// Broad classification of a [`ReleaseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Detected before any external command ran; the repository is untouched.
    Precondition,
    /// An external command reported failure; earlier steps may have run.
    ExternalCommand,
    /// Spawning a command or writing output failed.
    Io,
}

impl ReleaseError {
    /// Returns the taxonomy bucket for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use pom_release::error::{ErrorKind, ReleaseError};
    ///
    /// let err = ReleaseError::MalformedVersion {
    ///     version: "1.0.0-SNAPSHOT".to_owned(),
    /// };
    /// assert_eq!(err.kind(), ErrorKind::Precondition);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ManifestNotFound { .. }
            | Self::ManifestUnparseable { .. }
            | Self::VersionElementMissing { .. }
            | Self::MalformedVersion { .. } => ErrorKind::Precondition,
            Self::SetVersion { .. }
            | Self::Stage { .. }
            | Self::Commit { .. }
            | Self::Tag { .. } => ErrorKind::ExternalCommand,
            Self::Spawn { .. } | Self::WriteFailed { .. } | Self::Io(_) => ErrorKind::Io,
            #[cfg(any(test, feature = "test-support"))]
            Self::StubMismatch { .. } => ErrorKind::Io,
        }
    }
}

/// Result type alias using [`ReleaseError`].
pub type Result<T> = std::result::Result<T, ReleaseError>;
