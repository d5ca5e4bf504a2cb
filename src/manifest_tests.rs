//! Tests for POM version extraction.

use super::*;
use camino::Utf8PathBuf;
use rstest::{fixture, rstest};
use tempfile::TempDir;

fn pom(version_xml: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0"
         xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <modelVersion>4.0.0</modelVersion>
  <parent>
    <groupId>org.example</groupId>
    <artifactId>parent</artifactId>
    <version>9.9.9</version>
  </parent>
  <groupId>org.example</groupId>
  <artifactId>demo</artifactId>
  {version_xml}
  <dependencies>
    <dependency>
      <groupId>junit</groupId>
      <artifactId>junit</artifactId>
      <version>4.12</version>
    </dependency>
  </dependencies>
</project>
"#
    )
}

struct ManifestDir {
    _dir: TempDir,
    path: Utf8PathBuf,
}

#[fixture]
fn manifest_dir() -> ManifestDir {
    let dir = TempDir::new().expect("create temp dir");
    let root = Utf8PathBuf::try_from(dir.path().to_path_buf()).expect("utf-8 temp dir");
    ManifestDir {
        path: root.join(MANIFEST_FILE_NAME),
        _dir: dir,
    }
}

fn write_manifest(manifest_dir: &ManifestDir, contents: &str) {
    std::fs::write(&manifest_dir.path, contents).expect("write manifest");
}

#[test]
fn finds_project_version_and_ignores_nested_versions() {
    let xml = pom("<version>2.5.3-SNAPSHOT</version>");
    let version = find_project_version(&xml).expect("well-formed");
    assert_eq!(version.as_deref(), Some("2.5.3-SNAPSHOT"));
}

#[test]
fn nested_versions_alone_do_not_count() {
    let xml = pom("");
    assert_eq!(find_project_version(&xml), Ok(None));
}

#[test]
fn prefixed_pom_namespace_is_recognised() {
    let xml = r#"<pom:project xmlns:pom="http://maven.apache.org/POM/4.0.0">
  <pom:version>1.0.1-SNAPSHOT</pom:version>
</pom:project>"#;
    assert_eq!(
        find_project_version(xml).expect("well-formed").as_deref(),
        Some("1.0.1-SNAPSHOT")
    );
}

#[test]
fn unnamespaced_version_is_ignored() {
    let xml = "<project><version>1.0.1-SNAPSHOT</version></project>";
    assert_eq!(find_project_version(xml), Ok(None));
}

#[test]
fn entities_are_unescaped() {
    let xml = pom("<version>1.0.1&#45;SNAPSHOT</version>");
    assert_eq!(
        find_project_version(&xml).expect("well-formed").as_deref(),
        Some("1.0.1-SNAPSHOT")
    );
}

#[test]
fn surrounding_whitespace_is_kept() {
    let xml = pom("<version>\n    1.0.1-SNAPSHOT\n  </version>");
    let text = find_project_version(&xml)
        .expect("well-formed")
        .expect("version present");
    assert!(text.starts_with('\n'));
}

#[test]
fn empty_version_element_yields_empty_text() {
    let xml = pom("<version/>");
    assert_eq!(
        find_project_version(&xml).expect("well-formed").as_deref(),
        Some("")
    );
}

#[rstest]
#[case::empty("")]
#[case::whitespace_only("   \n")]
#[case::mismatched_end("<project xmlns=\"http://maven.apache.org/POM/4.0.0\"></projec>")]
#[case::unclosed_root("<project xmlns=\"http://maven.apache.org/POM/4.0.0\"><version>1.0.1-SNAPSHOT</version>")]
fn rejects_documents_that_are_not_well_formed(#[case] xml: &str) {
    assert!(find_project_version(xml).is_err());
}

#[rstest]
fn reads_development_version_from_disk(manifest_dir: ManifestDir) {
    write_manifest(&manifest_dir, &pom("<version>2.5.3-SNAPSHOT</version>"));
    let version = read_development_version(&manifest_dir.path).expect("valid manifest");
    assert_eq!(version, Version::development(2, 5, 3));
}

#[rstest]
fn missing_manifest_is_reported(manifest_dir: ManifestDir) {
    let err = read_development_version(&manifest_dir.path).expect_err("no manifest");
    assert!(matches!(err, ReleaseError::ManifestNotFound { path } if path == manifest_dir.path));
}

#[rstest]
fn unparseable_manifest_is_reported(manifest_dir: ManifestDir) {
    write_manifest(&manifest_dir, "<project><version>");
    let err = read_development_version(&manifest_dir.path).expect_err("broken manifest");
    assert!(matches!(err, ReleaseError::ManifestUnparseable { .. }));
}

#[rstest]
fn manifest_without_version_is_reported(manifest_dir: ManifestDir) {
    write_manifest(&manifest_dir, &pom(""));
    let err = read_development_version(&manifest_dir.path).expect_err("no version");
    assert!(matches!(err, ReleaseError::VersionElementMissing { .. }));
}

#[rstest]
fn zero_micro_manifest_is_malformed(manifest_dir: ManifestDir) {
    write_manifest(&manifest_dir, &pom("<version>1.0.0-SNAPSHOT</version>"));
    let err = read_development_version(&manifest_dir.path).expect_err("micro is zero");
    assert!(matches!(
        err,
        ReleaseError::MalformedVersion { version } if version == "1.0.0-SNAPSHOT"
    ));
}

#[rstest]
fn directory_in_place_of_manifest_is_not_found(manifest_dir: ManifestDir) {
    std::fs::create_dir(&manifest_dir.path).expect("create directory");
    let err = read_development_version(&manifest_dir.path).expect_err("not a file");
    assert!(matches!(err, ReleaseError::ManifestNotFound { .. }));
}
