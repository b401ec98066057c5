// tests/common.rs

use std::fs;
use std::io;
use std::path::Path;
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn pattern_break_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pattern-break"));
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Creates one small file per name inside `dir`.
#[allow(dead_code)]
pub fn touch_all(dir: &Path, names: &[&str]) -> io::Result<()> {
    fs::create_dir_all(dir)?;
    for name in names {
        fs::write(dir.join(name), "x")?;
    }
    Ok(())
}

/// Creates one empty subdirectory per name inside `dir`.
#[allow(dead_code)]
pub fn mkdir_all(dir: &Path, names: &[&str]) -> io::Result<()> {
    for name in names {
        fs::create_dir_all(dir.join(name))?;
    }
    Ok(())
}
