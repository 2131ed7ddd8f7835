//! Per-case and suite-level reporting types.

use std::fmt;

use sprite_hit_fixtures::FixtureError;
use thiserror::Error;

/// Outcome of one conformance case.
#[derive(Debug)]
pub enum Verdict {
    /// Every available oracle matched.
    Pass,
    /// An oracle did not match, or the system under test crashed.
    Fail(Vec<Mismatch>),
    /// No oracle exists; the case ran without crashing.
    Informational,
    /// The fixtures for this case could not be verified. Nothing was
    /// compared; the test environment needs fixing, not the emulator.
    IntegrityError(FixtureError),
}

impl Verdict {
    /// Stable label used in reports and logs.
    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Pass => "pass",
            Verdict::Fail(_) => "fail",
            Verdict::Informational => "informational",
            Verdict::IntegrityError(_) => "integrity-error",
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

/// A single way in which the produced outcome diverged from an oracle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Mismatch {
    /// Produced output bytes differ from the golden binary.
    #[error("output differs from golden binary: expected {expected_len} bytes, produced {found_len}, {}", offset_note(.first_diff))]
    Output {
        expected_len: usize,
        found_len: usize,
        /// Offset of the first differing byte, when both sides reach it.
        first_diff: Option<usize>,
    },
    /// The case has a golden binary but the run produced no output.
    #[error("no output produced for golden comparison")]
    MissingOutput,
    /// Terminal scalar differs from the expected value.
    #[error("expected result {expected:?}, {}", found_note(.found))]
    Result {
        expected: String,
        found: Option<String>,
    },
    /// The system under test failed to complete the run.
    #[error("run did not complete: {0}")]
    Crash(String),
}

// A `None` offset means the shorter side is a prefix of the longer one.
fn offset_note(first_diff: &Option<usize>) -> String {
    match first_diff {
        Some(offset) => format!("first difference at offset {offset}"),
        None => "differing only in length".to_owned(),
    }
}

fn found_note(found: &Option<String>) -> String {
    match found {
        Some(found) => format!("found {found:?}"),
        None => "none produced".to_owned(),
    }
}

/// Verdict for one named case.
#[derive(Debug)]
pub struct CaseReport {
    pub case: String,
    pub verdict: Verdict,
}

/// Ordered verdicts for a whole suite run.
#[derive(Debug, Default)]
pub struct SuiteReport {
    pub cases: Vec<CaseReport>,
}

impl SuiteReport {
    pub fn passed(&self) -> usize {
        self.count(|v| matches!(v, Verdict::Pass))
    }

    pub fn failed(&self) -> usize {
        self.count(|v| matches!(v, Verdict::Fail(_)))
    }

    pub fn informational(&self) -> usize {
        self.count(|v| matches!(v, Verdict::Informational))
    }

    pub fn integrity_errors(&self) -> usize {
        self.count(|v| matches!(v, Verdict::IntegrityError(_)))
    }

    /// True when every fixture verified, regardless of test outcomes.
    pub fn environment_ok(&self) -> bool {
        self.integrity_errors() == 0
    }

    /// True when no case failed and every fixture verified.
    pub fn is_success(&self) -> bool {
        self.failed() == 0 && self.environment_ok()
    }

    fn count(&self, pred: impl Fn(&Verdict) -> bool) -> usize {
        self.cases.iter().filter(|r| pred(&r.verdict)).count()
    }
}

impl fmt::Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} pass, {} fail, {} informational, {} integrity errors",
            self.passed(),
            self.failed(),
            self.informational(),
            self.integrity_errors()
        )
    }
}
