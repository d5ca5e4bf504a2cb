//! pom-release library.
//!
//! This crate releases a Maven project kept in a local git repository: it
//! reads the `M.N.P-SNAPSHOT` version from `pom.xml`, commits and tags
//! `M.N.P`, then commits `M.N.(P+1)-SNAPSHOT`. It is used by the
//! `pom-release` binary and can be driven programmatically with a custom
//! [`executor::CommandExecutor`].
//!
//! # Modules
//!
//! - [`cli`] - Command-line argument definitions
//! - [`error`] - Error taxonomy for the release sequence
//! - [`executor`] - External command abstraction
//! - [`git`] - Staging, committing and tagging
//! - [`logging`] - Diagnostic logger setup
//! - [`manifest`] - Reading the project version from `pom.xml`
//! - [`maven`] - Setting the version with the Maven versions plugin
//! - [`output`] - User-facing message formatting
//! - [`release`] - The release step sequence
//! - [`version`] - Version parsing and derivation

pub mod cli;
pub mod error;
pub mod executor;
pub mod git;
pub mod logging;
pub mod manifest;
pub mod maven;
pub mod output;
pub mod release;
#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;
pub mod version;
