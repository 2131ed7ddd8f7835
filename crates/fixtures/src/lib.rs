//! Fixture manifest and verified loading for the PPU sprite-zero-hit
//! conformance suite.
//!
//! The manifest is a static, ordered table of eleven test cases. Each names
//! the ROM to execute (filename + SHA-256 digest) and, where reference
//! material exists, a golden output binary and an expected terminal scalar.
//! Files are verified against their digests before being trusted; a
//! mismatch is a [`FixtureError`], which means the test environment is
//! broken, never that the system under test failed.

mod document;
mod error;
mod manifest;
mod types;

pub use document::{FileEntry, Manifest, TestCase};
pub use error::{FixtureError, FixtureResult};
pub use manifest::SUITE;
pub use types::{CaseMeta, FileRef};

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use once_cell::sync::{Lazy, OnceCell};
use sha2::{Digest, Sha256};

/// Environment variable overriding the fixture data directory.
pub const DATA_DIR_ENV: &str = "SPRITE_HIT_DATA_DIR";

static DATA_DIR: Lazy<PathBuf> = Lazy::new(|| {
    std::env::var_os(DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| workspace_root().join("tests/data/sprite_hit_tests"))
});

// The default must not depend on the process cwd: `cargo test` runs from
// the member crate, the CLI from wherever it was invoked.
fn workspace_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .expect("crate sits two levels below the workspace root")
}

struct Entry {
    rom: OnceCell<Arc<[u8]>>,
    golden: OnceCell<Arc<[u8]>>,
}

static ENTRIES: Lazy<Vec<Entry>> = Lazy::new(|| {
    manifest::CASES
        .iter()
        .map(|_| Entry {
            rom: OnceCell::new(),
            golden: OnceCell::new(),
        })
        .collect()
});

static BY_NAME: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for (idx, case) in manifest::CASES.iter().enumerate() {
        map.insert(case.name, idx);
        map.insert(case.rom.name, idx);
    }
    map
});

/// Returns every case of the suite, in execution order.
pub fn list() -> &'static [CaseMeta] {
    manifest::CASES
}

/// Looks up a case by friendly name or ROM filename.
pub fn metadata(name: &str) -> Option<&'static CaseMeta> {
    BY_NAME.get(name).map(|&idx| &manifest::CASES[idx])
}

/// Directory the fixture files are resolved against.
pub fn data_dir() -> &'static Path {
    DATA_DIR.as_path()
}

/// Loads and verifies the ROM bytes for a case, caching the result.
pub fn rom_bytes(case: &CaseMeta) -> FixtureResult<Arc<[u8]>> {
    let idx = index_of(case);
    ENTRIES[idx]
        .rom
        .get_or_try_init(|| load(&case.rom))
        .map(Arc::clone)
}

/// Loads and verifies the golden output bytes for a case, caching the
/// result. Returns `None` for cases without a reference capture.
pub fn golden_bytes(case: &CaseMeta) -> FixtureResult<Option<Arc<[u8]>>> {
    let Some(golden) = &case.golden else {
        return Ok(None);
    };
    let idx = index_of(case);
    ENTRIES[idx]
        .golden
        .get_or_try_init(|| load(golden))
        .map(|bytes| Some(Arc::clone(bytes)))
}

fn index_of(case: &CaseMeta) -> usize {
    *BY_NAME
        .get(case.name)
        .unwrap_or_else(|| panic!("case {} is not in the suite manifest", case.name))
}

fn load(file: &FileRef) -> FixtureResult<Arc<[u8]>> {
    let bytes = verified_read(data_dir(), file.name, file.sha256)?;
    Ok(Arc::from(bytes.into_boxed_slice()))
}

/// Reads `name` from `root` and verifies its digest before returning it.
pub fn verified_read(root: &Path, name: &str, sha256: &str) -> FixtureResult<Vec<u8>> {
    let path = root.join(name);
    let bytes = std::fs::read(&path).map_err(|source| FixtureError::Io {
        name: name.to_owned(),
        path: path.clone(),
        source,
    })?;

    let found = hex::encode(Sha256::digest(&bytes));
    if found != sha256 {
        return Err(FixtureError::DigestMismatch {
            name: name.to_owned(),
            expected: sha256.to_owned(),
            found,
        });
    }

    log::debug!("verified fixture {name} ({len} bytes)", len = bytes.len());
    Ok(bytes)
}
