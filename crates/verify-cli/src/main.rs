//! Integrity verifier for the sprite-hit fixture set.
//!
//! Checks every manifest-referenced file on disk against its recorded
//! digest and reports per-file status. Runs no emulator: a failure here
//! means the test environment is broken, not that any test failed.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use sprite_hit_fixtures::{data_dir, list, verified_read, FileRef, Manifest};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about = "Verify sprite-hit fixtures against the manifest")]
struct Args {
    /// Fixture data directory (defaults to SPRITE_HIT_DATA_DIR or the
    /// in-tree layout)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Print the manifest as TOML and exit
    #[arg(long)]
    export_manifest: bool,
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    if args.export_manifest {
        print!("{}", Manifest::builtin().to_toml()?);
        return Ok(());
    }

    let root = args.data_dir.unwrap_or_else(|| data_dir().to_path_buf());
    info!("verifying fixtures under {}", root.display());

    let mut checked = 0usize;
    let mut broken = 0usize;
    for case in list() {
        let mut files = vec![&case.rom];
        if let Some(golden) = &case.golden {
            files.push(golden);
        }
        for file in files {
            checked += 1;
            if !check(&root, case.name, file) {
                broken += 1;
            }
        }
    }

    if broken > 0 {
        bail!("{broken} of {checked} fixture files failed verification");
    }
    info!("all {checked} fixture files verified");
    Ok(())
}

fn check(root: &std::path::Path, case: &str, file: &FileRef) -> bool {
    match verified_read(root, file.name, file.sha256) {
        Ok(bytes) => {
            info!("{case}: {} ok ({} bytes)", file.name, bytes.len());
            true
        }
        Err(err) => {
            error!("{case}: {err}");
            false
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(env_filter).try_init();
}
