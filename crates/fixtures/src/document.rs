//! Owned interchange form of the fixture manifest.
//!
//! Mirrors the static table for TOML export/import, and gives harness
//! consumers a way to assemble case lists at runtime (e.g. a subset, or
//! scratch fixtures in tests).

use serde::{Deserialize, Serialize};

use crate::manifest::SUITE;
use crate::types::{CaseMeta, FileRef};

/// Serializable manifest document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Suite identifier.
    pub suite: String,
    /// Ordered case list; order is the execution and report order.
    #[serde(rename = "case")]
    pub cases: Vec<TestCase>,
}

/// One conformance case in interchange form.
// Scalar fields precede the file tables so the document serializes as TOML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// Friendly case name.
    pub name: String,
    /// Expected terminal scalar, rendered as two hex digits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    /// ROM image exercised by the case.
    pub rom: FileEntry,
    /// Golden output binary, where a trusted reference capture exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub golden: Option<FileEntry>,
}

impl TestCase {
    /// True when the case carries no comparison oracle at all.
    pub fn is_informational(&self) -> bool {
        self.golden.is_none() && self.result.is_none()
    }
}

/// Filename plus expected content digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Filename relative to the fixture data directory.
    pub name: String,
    /// SHA-256 digest of the file bytes, lowercase hex.
    pub sha256: String,
}

impl From<&FileRef> for FileEntry {
    fn from(file: &FileRef) -> Self {
        FileEntry {
            name: file.name.to_owned(),
            sha256: file.sha256.to_owned(),
        }
    }
}

impl From<&CaseMeta> for TestCase {
    fn from(meta: &CaseMeta) -> Self {
        TestCase {
            name: meta.name.to_owned(),
            result: meta.result.map(str::to_owned),
            rom: (&meta.rom).into(),
            golden: meta.golden.as_ref().map(Into::into),
        }
    }
}

impl Manifest {
    /// Interchange copy of the built-in table, order preserved.
    pub fn builtin() -> Self {
        Manifest {
            suite: SUITE.to_owned(),
            cases: crate::list().iter().map(Into::into).collect(),
        }
    }

    /// Serializes the manifest as a TOML document.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Parses a manifest from a TOML document.
    pub fn from_toml(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }
}
