//! Reading the project version from a Maven `pom.xml`.
//!
//! Only the `<version>` element that is a direct child of the document root
//! in the POM namespace counts. Versions nested under `<parent>`,
//! `<dependency>` and similar elements are ignored.

use crate::error::{ReleaseError, Result};
use crate::version::Version;
use camino::Utf8Path;
use log::{debug, trace};
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::reader::NsReader;

/// File name of the manifest inside the repository working directory.
pub const MANIFEST_FILE_NAME: &str = "pom.xml";

/// Namespace of Maven 4.0.0 project descriptors.
pub const POM_NAMESPACE: &str = "http://maven.apache.org/POM/4.0.0";

const VERSION_ELEMENT: &[u8] = b"version";

/// Depth of the root element's children.
const PROJECT_CHILD_DEPTH: usize = 2;

/// Reads and validates the development version stored in the manifest.
///
/// # Errors
///
/// Returns a precondition error when the file is missing
/// ([`ReleaseError::ManifestNotFound`]), cannot be read or parsed
/// ([`ReleaseError::ManifestUnparseable`]), has no project version
/// ([`ReleaseError::VersionElementMissing`]), or the version is not in
/// `M.N.P-SNAPSHOT` form ([`ReleaseError::MalformedVersion`]).
pub fn read_development_version(path: &Utf8Path) -> Result<Version> {
    let text = read_version_text(path)?;
    debug!("manifest {path} declares version {text}");
    Version::parse_development(&text)
}

/// Reads the raw text of the project version element.
///
/// # Errors
///
/// See [`read_development_version`]; this function performs every check
/// except the version pattern match.
pub fn read_version_text(path: &Utf8Path) -> Result<String> {
    if !path.is_file() {
        return Err(ReleaseError::ManifestNotFound {
            path: path.to_owned(),
        });
    }

    let unparseable = |reason: String| ReleaseError::ManifestUnparseable {
        path: path.to_owned(),
        reason,
    };

    let contents = std::fs::read_to_string(path).map_err(|e| unparseable(e.to_string()))?;

    find_project_version(&contents)
        .map_err(unparseable)?
        .ok_or_else(|| ReleaseError::VersionElementMissing {
            path: path.to_owned(),
        })
}

/// Scans a POM document for the project version.
///
/// The whole document is read so that syntax errors after the version
/// element are still reported. Returns `Ok(None)` for a well-formed document
/// without a project version, and `Err` with a description when the
/// document is not well-formed.
pub(crate) fn find_project_version(xml: &str) -> std::result::Result<Option<String>, String> {
    let mut reader = NsReader::from_str(xml);
    let mut scan = VersionScan::default();

    loop {
        match reader.read_resolved_event() {
            Ok((namespace, Event::Start(start))) => {
                let is_version = is_pom_version(&namespace, start.local_name().as_ref());
                scan.open(is_version);
            }
            Ok((namespace, Event::Empty(start))) => {
                let is_version = is_pom_version(&namespace, start.local_name().as_ref());
                scan.open(is_version);
                scan.close();
            }
            Ok((_, Event::Text(text))) => {
                if scan.capturing() {
                    let unescaped = text.unescape().map_err(|e| e.to_string())?;
                    scan.push_text(&unescaped);
                }
            }
            Ok((_, Event::CData(cdata))) => {
                if scan.capturing() {
                    scan.push_text(&String::from_utf8_lossy(&cdata));
                }
            }
            Ok((_, Event::End(_))) => scan.close(),
            Ok((_, Event::Eof)) => break,
            Ok(_) => {}
            Err(e) => return Err(e.to_string()),
        }
    }

    if !scan.seen_root {
        return Err("no root element".to_owned());
    }
    if scan.depth != 0 {
        return Err("unexpected end of document".to_owned());
    }

    trace!("project version element: {:?}", scan.version);
    Ok(scan.version)
}

fn is_pom_version(namespace: &ResolveResult<'_>, local_name: &[u8]) -> bool {
    matches!(namespace, ResolveResult::Bound(Namespace(ns)) if *ns == POM_NAMESPACE.as_bytes())
        && local_name == VERSION_ELEMENT
}

/// Element depth tracking for [`find_project_version`].
#[derive(Debug, Default)]
struct VersionScan {
    depth: usize,
    seen_root: bool,
    /// Text collected so far for the element being captured.
    current: Option<String>,
    /// First completed project version.
    version: Option<String>,
}

impl VersionScan {
    fn open(&mut self, is_version: bool) {
        self.depth = self.depth.saturating_add(1);
        if self.depth == 1 {
            self.seen_root = true;
        }
        if is_version && self.depth == PROJECT_CHILD_DEPTH && self.version.is_none() {
            self.current = Some(String::new());
        }
    }

    fn close(&mut self) {
        if self.depth == PROJECT_CHILD_DEPTH && self.current.is_some() {
            self.version = self.current.take();
        }
        self.depth = self.depth.saturating_sub(1);
    }

    const fn capturing(&self) -> bool {
        self.current.is_some() && self.depth == PROJECT_CHILD_DEPTH
    }

    fn push_text(&mut self, text: &str) {
        if let Some(current) = self.current.as_mut() {
            current.push_str(text);
        }
    }
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
