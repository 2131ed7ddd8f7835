//! Conformance-runner contract for the sprite-hit fixture suite.
//!
//! The harness owns fixture verification and oracle comparison; the
//! emulator under test stays behind the [`Emulator`] trait and never sees
//! unverified bytes. Two failure classes are kept strictly apart: a
//! [`Verdict::IntegrityError`] means the test assets are wrong, while a
//! [`Verdict::Fail`] means the emulator produced the wrong answer. Neither
//! stops the remaining cases.

mod report;

pub use report::{CaseReport, Mismatch, SuiteReport, Verdict};

use std::path::Path;

use sprite_hit_fixtures::{verified_read, Manifest, TestCase};

/// System under test. Implementations execute one ROM to completion and
/// surface whatever observable state the suite compares against.
pub trait Emulator {
    type Error: std::error::Error;

    fn run(&mut self, case: &TestCase, rom: &[u8]) -> Result<CaseOutcome, Self::Error>;
}

/// Observable outcome of one emulator run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseOutcome {
    /// Captured output bytes, compared against the golden binary when the
    /// case has one.
    pub output: Option<Vec<u8>>,
    /// Terminal scalar rendered as two hex digits.
    pub result: Option<String>,
}

/// Runs every case of `manifest` in order, resolving fixture files against
/// `data_dir`. A failing or unverifiable case never aborts the rest.
pub fn run_suite<E: Emulator>(manifest: &Manifest, data_dir: &Path, emu: &mut E) -> SuiteReport {
    let mut suite = SuiteReport::default();
    for case in &manifest.cases {
        let verdict = run_case(case, data_dir, emu);
        match &verdict {
            Verdict::IntegrityError(err) => {
                log::warn!("{}: {} ({err})", case.name, verdict.label())
            }
            Verdict::Fail(mismatches) => {
                log::info!("{}: {}", case.name, verdict.label());
                for mismatch in mismatches {
                    log::info!("{}:   {mismatch}", case.name);
                }
            }
            _ => log::info!("{}: {}", case.name, verdict.label()),
        }
        suite.cases.push(CaseReport {
            case: case.name.clone(),
            verdict,
        });
    }
    suite
}

/// Runs a single case and classifies the outcome.
pub fn run_case<E: Emulator>(case: &TestCase, data_dir: &Path, emu: &mut E) -> Verdict {
    // Both the ROM and the golden binary are fixtures; verify them before
    // anything runs or is compared.
    let rom = match verified_read(data_dir, &case.rom.name, &case.rom.sha256) {
        Ok(bytes) => bytes,
        Err(err) => return Verdict::IntegrityError(err),
    };
    let golden = match &case.golden {
        Some(entry) => match verified_read(data_dir, &entry.name, &entry.sha256) {
            Ok(bytes) => Some(bytes),
            Err(err) => return Verdict::IntegrityError(err),
        },
        None => None,
    };

    let outcome = match emu.run(case, &rom) {
        Ok(outcome) => outcome,
        Err(err) => return Verdict::Fail(vec![Mismatch::Crash(err.to_string())]),
    };

    let mut mismatches = Vec::new();
    if let Some(expected) = &golden {
        match &outcome.output {
            Some(found) if found == expected => {}
            Some(found) => mismatches.push(Mismatch::Output {
                expected_len: expected.len(),
                found_len: found.len(),
                first_diff: first_diff(expected, found),
            }),
            None => mismatches.push(Mismatch::MissingOutput),
        }
    }
    if let Some(expected) = &case.result {
        if outcome.result.as_deref() != Some(expected.as_str()) {
            mismatches.push(Mismatch::Result {
                expected: expected.clone(),
                found: outcome.result.clone(),
            });
        }
    }

    if !mismatches.is_empty() {
        Verdict::Fail(mismatches)
    } else if case.is_informational() {
        Verdict::Informational
    } else {
        Verdict::Pass
    }
}

fn first_diff(expected: &[u8], found: &[u8]) -> Option<usize> {
    expected
        .iter()
        .zip(found.iter())
        .position(|(a, b)| a != b)
}
