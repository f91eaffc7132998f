//! Test harness for scopetable integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A scratch directory for JSON input files.
pub struct TestInputs {
    dir: TempDir,
}

impl TestInputs {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn add_file(&self, name: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(name);
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Copy a file from `tests/fixtures` into the scratch directory.
    pub fn add_fixture(&self, name: &str) -> PathBuf {
        self.add_file(name, &fixture(name))
    }
}

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name)).expect("Failed to read fixture")
}

pub fn run_scopetable(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_scopetable");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run scopetable");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let inputs = TestInputs::new();
        assert!(inputs.path().exists());
    }

    #[test]
    fn test_harness_copies_fixture() {
        let inputs = TestInputs::new();
        let path = inputs.add_fixture("computed.json");
        assert!(path.exists());
        assert!(fixture("computed.json").contains("parentA"));
    }
}
