//! Behavioural tests for the conformance runner, driven by scratch
//! fixtures and a scripted stand-in for the emulator under test.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use sha2::{Digest, Sha256};
use sprite_hit_fixtures::{FileEntry, FixtureError, Manifest, TestCase};
use sprite_hit_harness::{run_case, run_suite, CaseOutcome, Emulator, Mismatch, Verdict};
use thiserror::Error;

fn scratch_dir(suffix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos();
    let path = std::env::temp_dir().join(format!("sprite-hit-harness-{suffix}-{nanos}"));
    std::fs::create_dir_all(&path).expect("create scratch dir");
    path
}

fn write_fixture(root: &Path, name: &str, bytes: &[u8]) -> FileEntry {
    std::fs::write(root.join(name), bytes).expect("write scratch fixture");
    FileEntry {
        name: name.to_owned(),
        sha256: hex::encode(Sha256::digest(bytes)),
    }
}

fn case(name: &str, rom: FileEntry, golden: Option<FileEntry>, result: Option<&str>) -> TestCase {
    TestCase {
        name: name.to_owned(),
        result: result.map(str::to_owned),
        rom,
        golden,
    }
}

#[derive(Debug, Error)]
#[error("{0}")]
struct StubCrash(String);

/// Emulator stand-in scripted per ROM filename.
#[derive(Default)]
struct ScriptedEmu {
    outcomes: HashMap<String, Result<CaseOutcome, String>>,
    runs: Vec<String>,
}

impl ScriptedEmu {
    fn script(&mut self, rom_name: &str, outcome: Result<CaseOutcome, String>) {
        self.outcomes.insert(rom_name.to_owned(), outcome);
    }
}

impl Emulator for ScriptedEmu {
    type Error = StubCrash;

    fn run(&mut self, case: &TestCase, _rom: &[u8]) -> Result<CaseOutcome, StubCrash> {
        self.runs.push(case.rom.name.clone());
        match self.outcomes.get(&case.rom.name) {
            Some(Ok(outcome)) => Ok(outcome.clone()),
            Some(Err(message)) => Err(StubCrash(message.clone())),
            None => Ok(CaseOutcome::default()),
        }
    }
}

#[test]
fn passes_when_output_and_result_both_match() {
    let root = scratch_dir("pass");
    let rom = write_fixture(&root, "01.basics.nes", b"rom bytes");
    let golden = write_fixture(&root, "01.bin", b"captured output");
    let case = case("basics", rom, Some(golden), Some("33"));

    let mut emu = ScriptedEmu::default();
    emu.script(
        "01.basics.nes",
        Ok(CaseOutcome {
            output: Some(b"captured output".to_vec()),
            result: Some("33".to_owned()),
        }),
    );

    let verdict = run_case(&case, &root, &mut emu);
    assert!(verdict.is_pass(), "expected pass, got {verdict:?}");
}

#[test]
fn fails_when_only_the_scalar_diverges() {
    let root = scratch_dir("scalar");
    let rom = write_fixture(&root, "01.basics.nes", b"rom bytes");
    let golden = write_fixture(&root, "01.bin", b"captured output");
    let case = case("basics", rom, Some(golden), Some("33"));

    let mut emu = ScriptedEmu::default();
    emu.script(
        "01.basics.nes",
        Ok(CaseOutcome {
            output: Some(b"captured output".to_vec()),
            result: Some("34".to_owned()),
        }),
    );

    match run_case(&case, &root, &mut emu) {
        Verdict::Fail(mismatches) => {
            assert_eq!(
                mismatches,
                vec![Mismatch::Result {
                    expected: "33".to_owned(),
                    found: Some("34".to_owned()),
                }]
            );
        }
        other => panic!("expected fail, got {other:?}"),
    }
}

#[test]
fn reports_first_differing_output_byte() {
    let root = scratch_dir("diff");
    let rom = write_fixture(&root, "02.alignment.nes", b"rom bytes");
    let golden = write_fixture(&root, "02.bin", b"abcdef");
    let case = case("alignment", rom, Some(golden), None);

    let mut emu = ScriptedEmu::default();
    emu.script(
        "02.alignment.nes",
        Ok(CaseOutcome {
            output: Some(b"abcxef".to_vec()),
            result: None,
        }),
    );

    match run_case(&case, &root, &mut emu) {
        Verdict::Fail(mismatches) => {
            assert_eq!(
                mismatches,
                vec![Mismatch::Output {
                    expected_len: 6,
                    found_len: 6,
                    first_diff: Some(3),
                }]
            );
        }
        other => panic!("expected fail, got {other:?}"),
    }
}

#[test]
fn tampered_rom_is_an_integrity_error_and_never_runs() {
    let root = scratch_dir("tampered");
    let rom = write_fixture(&root, "03.corners.nes", b"original bytes");
    std::fs::write(root.join("03.corners.nes"), b"tampered bytes").expect("tamper rom");
    let case = case("corners", rom, None, None);

    let mut emu = ScriptedEmu::default();
    match run_case(&case, &root, &mut emu) {
        Verdict::IntegrityError(FixtureError::DigestMismatch { name, .. }) => {
            assert_eq!(name, "03.corners.nes");
        }
        other => panic!("expected integrity error, got {other:?}"),
    }
    assert!(emu.runs.is_empty(), "emulator must not see unverified bytes");
}

#[test]
fn missing_golden_binary_is_an_integrity_error() {
    let root = scratch_dir("missing-golden");
    let rom = write_fixture(&root, "04.flip.nes", b"rom bytes");
    let golden = FileEntry {
        name: "04.bin".to_owned(),
        sha256: "0".repeat(64),
    };
    let case = case("flip", rom, Some(golden), Some("18"));

    let mut emu = ScriptedEmu::default();
    match run_case(&case, &root, &mut emu) {
        Verdict::IntegrityError(FixtureError::Io { name, .. }) => assert_eq!(name, "04.bin"),
        other => panic!("expected integrity error, got {other:?}"),
    }
    assert!(emu.runs.is_empty());
}

#[test]
fn no_oracle_cases_report_informational() {
    let root = scratch_dir("no-oracle");
    let rom = write_fixture(&root, "06.right_edge.nes", b"rom bytes");
    let case = case("right_edge", rom, None, None);

    let mut emu = ScriptedEmu::default();
    let verdict = run_case(&case, &root, &mut emu);
    assert!(
        matches!(verdict, Verdict::Informational),
        "expected informational, got {verdict:?}"
    );
    assert_eq!(emu.runs, vec!["06.right_edge.nes"]);
}

#[test]
fn crash_on_a_no_oracle_case_still_fails() {
    let root = scratch_dir("crash");
    let rom = write_fixture(&root, "07.screen_bottom.nes", b"rom bytes");
    let case = case("screen_bottom", rom, None, None);

    let mut emu = ScriptedEmu::default();
    emu.script("07.screen_bottom.nes", Err("watchdog expired".to_owned()));

    match run_case(&case, &root, &mut emu) {
        Verdict::Fail(mismatches) => {
            assert_eq!(
                mismatches,
                vec![Mismatch::Crash("watchdog expired".to_owned())]
            );
        }
        other => panic!("expected fail, got {other:?}"),
    }
}

#[test]
fn one_failing_case_does_not_abort_the_suite() {
    let root = scratch_dir("suite");
    let rom1 = write_fixture(&root, "01.basics.nes", b"rom one");
    let golden1 = write_fixture(&root, "01.bin", b"golden one");
    let rom2 = write_fixture(&root, "06.right_edge.nes", b"rom six");
    let rom3 = write_fixture(&root, "02.alignment.nes", b"rom two");
    let golden3 = write_fixture(&root, "02.bin", b"golden two");

    let manifest = Manifest {
        suite: "ppu/sprite_hit_tests".to_owned(),
        cases: vec![
            case("basics", rom1, Some(golden1), Some("33")),
            case("right_edge", rom2, None, None),
            case("alignment", rom3, Some(golden3), Some("31")),
        ],
    };

    let mut emu = ScriptedEmu::default();
    // First case produces the wrong bytes, last case matches everything.
    emu.script(
        "01.basics.nes",
        Ok(CaseOutcome {
            output: Some(b"wrong".to_vec()),
            result: Some("33".to_owned()),
        }),
    );
    emu.script(
        "02.alignment.nes",
        Ok(CaseOutcome {
            output: Some(b"golden two".to_vec()),
            result: Some("31".to_owned()),
        }),
    );

    let report = run_suite(&manifest, &root, &mut emu);
    assert_eq!(report.cases.len(), 3);
    assert_eq!(report.failed(), 1);
    assert_eq!(report.informational(), 1);
    assert_eq!(report.passed(), 1);
    assert!(report.environment_ok());
    assert!(!report.is_success());
    assert_eq!(
        emu.runs,
        vec!["01.basics.nes", "06.right_edge.nes", "02.alignment.nes"]
    );

    let labels: Vec<_> = report.cases.iter().map(|r| r.verdict.label()).collect();
    assert_eq!(labels, ["fail", "informational", "pass"]);
}
