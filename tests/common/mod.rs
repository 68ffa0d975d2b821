//! Common test utilities for toolhost integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Environment variables the binary reads, cleared so the caller's shell cannot leak in
const HOST_ENV: [&str; 4] = [
    "TOOLHOST_CONFIG",
    "TOOLHOST_BUNDLE_DIR",
    "TOOLHOST_OUTPUT_DIR",
    "RUST_LOG",
];

/// A scratch directory holding config, bundle and output for one test
pub struct TestWorkspace {
    #[allow(dead_code)]
    pub temp: TempDir,
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in the workspace, creating parent directories
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Write toolhost.yaml at the workspace root
    pub fn write_config(&self, yaml: &str) -> PathBuf {
        self.write_file("toolhost.yaml", yaml)
    }

    /// Create a regression bundle under `assets/` with every listed entry present
    pub fn create_regression_bundle(&self, configs: &[&str], clips: &[&str]) -> PathBuf {
        let manifest = serde_json::json!({ "configs": configs, "clips": clips });
        self.write_file("assets/metadata.json", &manifest.to_string());
        for entry in configs.iter().chain(clips) {
            self.write_file(&format!("assets/{entry}"), "{}");
        }
        self.path.join("assets")
    }

    /// Write an executable shell script
    #[cfg(unix)]
    pub fn write_script(&self, path: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script = self.write_file(path, &format!("#!/bin/sh\n{body}\n"));
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make script executable");
        script
    }

    /// The toolhost binary running inside this workspace with a clean environment
    pub fn toolhost_cmd(&self) -> Command {
        let mut cmd = toolhost_cmd();
        cmd.current_dir(&self.path);
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated, dead_code)]
pub fn toolhost_cmd() -> Command {
    let mut cmd = Command::cargo_bin("toolhost").expect("toolhost binary");
    for var in HOST_ENV {
        cmd.env_remove(var);
    }
    cmd
}
