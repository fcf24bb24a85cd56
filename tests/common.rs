// tests/common.rs

use std::fs;
use std::path::Path;
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn dirls_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("dirls"))
}

/// Creates the three-entry fixture used across tests: a hidden file, a
/// regular file and a subdirectory.
#[allow(dead_code)]
pub fn populate_basic(dir: &Path) -> std::io::Result<()> {
    fs::write(dir.join(".hidden"), "h")?;
    fs::write(dir.join("a.txt"), "hello")?;
    fs::create_dir(dir.join("bdir"))?;
    Ok(())
}
