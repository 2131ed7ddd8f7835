//! Core type definitions for the sprite-hit fixture manifest.

/// Reference to a fixture file identified by name and content digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileRef {
    /// Filename relative to the fixture data directory.
    pub name: &'static str,
    /// SHA-256 digest of the file bytes, lowercase hex.
    pub sha256: &'static str,
}

/// Describes a single case of the sprite-zero-hit conformance suite.
///
/// `golden` and `result` happen to be present together for every case that
/// has either, but that is a property of the reference material available
/// when the suite was captured, not a structural rule. The two oracles are
/// independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseMeta {
    /// Friendly name (ROM filename without index and extension).
    pub name: &'static str,
    /// ROM image exercised by the case.
    pub rom: FileRef,
    /// Golden output binary, where a trusted reference capture exists.
    pub golden: Option<FileRef>,
    /// Expected terminal scalar, rendered as two hex digits.
    pub result: Option<&'static str>,
}

impl CaseMeta {
    /// True when the case carries no comparison oracle at all.
    pub fn is_informational(&self) -> bool {
        self.golden.is_none() && self.result.is_none()
    }
}
