use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type FixtureResult<T> = Result<T, FixtureError>;

/// Integrity failure of the test environment itself.
///
/// Never a verdict on the system under test: a case whose fixtures cannot
/// be verified must not have its comparisons run at all.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("fixture {name} unreadable at {path}: {source}")]
    Io {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("fixture {name} digest mismatch: expected {expected}, found {found}")]
    DigestMismatch {
        name: String,
        expected: String,
        found: String,
    },
}

impl FixtureError {
    /// Filename of the fixture that failed verification.
    pub fn fixture_name(&self) -> &str {
        match self {
            FixtureError::Io { name, .. } => name,
            FixtureError::DigestMismatch { name, .. } => name,
        }
    }
}
