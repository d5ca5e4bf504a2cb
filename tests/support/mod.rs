//! Shared test support for the integration suites.
//!
//! Lays out a temporary repository with a `pom.xml`.

use camino::Utf8PathBuf;
use tempfile::TempDir;

/// A temporary directory standing in for a repository checkout.
pub struct TempRepo {
    dir: TempDir,
}

impl TempRepo {
    /// Create an empty repository directory.
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Create a repository whose manifest declares `version`.
    pub fn with_version(version: &str) -> Self {
        let repo = Self::empty();
        let pom = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <groupId>org.example</groupId>
  <artifactId>demo</artifactId>
  <version>{version}</version>
</project>
"#
        );
        std::fs::write(repo.root().join("pom.xml"), pom).expect("write manifest");
        repo
    }

    /// Root of the repository.
    pub fn root(&self) -> Utf8PathBuf {
        Utf8PathBuf::try_from(self.dir.path().to_path_buf()).expect("utf-8 temp dir")
    }
}
