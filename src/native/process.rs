//! Child process binding
//!
//! Runs a native tool as an executable. The bundle root and output directory are
//! handed over in the [`BUNDLE_DIR_ENV`] and [`OUTPUT_DIR_ENV`] environment variables
//! and the exit status becomes the return code:
//!
//! - an exit code is returned unchanged
//! - termination by a signal decodes to the negated signal number
//! - a program that cannot be started yields [`SPAWN_FAILED`]
//!
//! A unit test runner's case count is read from the first integer the program prints
//! on stdout when started with its count arguments.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use tracing::{debug, error, warn};

use super::{Compressor, Decompressor, RegressionTester, UNREADABLE_RESULT, UnitTestRunner};
use crate::resources::paths::{BUNDLE_DIR_ENV, OUTPUT_DIR_ENV};
use crate::resources::{OutputLocation, ResourceBundle};

/// Return code for a program that could not be started
pub const SPAWN_FAILED: i32 = -127;

/// Executable plus the arguments of its entry points
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessTool {
    program: PathBuf,
    args: Vec<String>,
    count_args: Vec<String>,
}

impl ProcessTool {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            count_args: Vec::new(),
        }
    }

    /// Arguments that make a unit test runner print its case count
    #[must_use]
    pub fn with_count_args(mut self, count_args: Vec<String>) -> Self {
        self.count_args = count_args;
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Same program with different arguments
    #[must_use]
    pub fn with_args(&self, args: Vec<String>) -> Self {
        Self {
            program: self.program.clone(),
            args,
            count_args: self.count_args.clone(),
        }
    }

    /// Run the program with its arguments and wait for the return code
    pub fn execute(&self) -> i32 {
        self.wait(self.command(&self.args))
    }

    fn command<I, S>(&self, args: I) -> Command
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut command = Command::new(&self.program);
        command.args(args);
        command
    }

    fn wait(&self, mut command: Command) -> i32 {
        debug!(program = %self.program.display(), "starting native tool process");
        match command.status() {
            Ok(status) => decode_status(status),
            Err(e) => {
                error!(program = %self.program.display(), error = %e, "failed to start native tool");
                SPAWN_FAILED
            }
        }
    }
}

/// Turn a child exit status into a return code
pub fn decode_status(status: ExitStatus) -> i32 {
    match status.code() {
        Some(code) => code,
        None => signal_code(status),
    }
}

#[cfg(unix)]
fn signal_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    match status.signal() {
        Some(signal) => {
            warn!(signal, "native tool terminated by signal");
            -signal
        }
        None => UNREADABLE_RESULT,
    }
}

#[cfg(not(unix))]
fn signal_code(_status: ExitStatus) -> i32 {
    UNREADABLE_RESULT
}

fn parse_count(stdout: &str) -> Option<i32> {
    stdout
        .split_whitespace()
        .find_map(|token| token.parse::<i32>().ok())
}

impl UnitTestRunner for ProcessTool {
    fn count_cases(&self) -> i32 {
        let output = match self.command(&self.count_args).output() {
            Ok(output) => output,
            Err(e) => {
                error!(program = %self.program.display(), error = %e, "failed to query case count");
                return SPAWN_FAILED;
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout);
        parse_count(&stdout).unwrap_or_else(|| {
            warn!(program = %self.program.display(), "case count query printed no integer");
            UNREADABLE_RESULT
        })
    }

    fn run_all(&self) -> i32 {
        self.execute()
    }
}

impl Compressor for ProcessTool {
    fn run(&self) -> i32 {
        self.execute()
    }
}

impl Decompressor for ProcessTool {
    fn run(&self, bundle: &ResourceBundle, output: &OutputLocation) -> i32 {
        let mut command = self.command(&self.args);
        command
            .env(BUNDLE_DIR_ENV, bundle.root())
            .env(OUTPUT_DIR_ENV, output.path());
        self.wait(command)
    }
}

impl RegressionTester for ProcessTool {
    fn run(&self, bundle: &ResourceBundle) -> i32 {
        let mut command = self.command(&self.args);
        command.env(BUNDLE_DIR_ENV, bundle.root());
        self.wait(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("42\n"), Some(42));
        assert_eq!(parse_count("cases: 17 registered"), Some(17));
        assert_eq!(parse_count("no cases"), None);
        assert_eq!(parse_count(""), None);
    }

    #[test]
    fn test_spawn_failure() {
        let tool = ProcessTool::new("/nonexistent/toolhost-test-binary", Vec::new());
        assert_eq!(Compressor::run(&tool), SPAWN_FAILED);
        assert_eq!(tool.count_cases(), SPAWN_FAILED);
    }

    #[cfg(unix)]
    mod unix {
        use super::*;
        use tempfile::TempDir;

        fn sh(script: &str) -> ProcessTool {
            ProcessTool::new("sh", vec!["-c".to_string(), script.to_string()])
        }

        #[test]
        fn test_exit_code_passes_through() {
            assert_eq!(Compressor::run(&sh("exit 0")), 0);
            assert_eq!(Compressor::run(&sh("exit 7")), 7);
        }

        #[test]
        fn test_highest_exit_code_passes_through() {
            assert_eq!(Compressor::run(&sh("exit 255")), 255);

            let tool = sh("exit 255").with_count_args(vec!["-c".to_string(), "echo 300".to_string()]);
            assert_eq!(tool.run_all(), 255);
        }

        #[test]
        fn test_signal_decodes_negative() {
            assert_eq!(Compressor::run(&sh("kill -9 $$")), -9);
        }

        #[test]
        fn test_unit_test_runner_queries() {
            let tool = sh("exit 3")
                .with_count_args(vec!["-c".to_string(), "echo 42".to_string()]);
            assert_eq!(tool.count_cases(), 42);
            assert_eq!(tool.run_all(), 3);
        }

        #[test]
        fn test_regression_receives_bundle_dir() {
            let temp = TempDir::new().unwrap();
            std::fs::write(temp.path().join("metadata.json"), "{}").unwrap();
            let bundle = ResourceBundle::open(temp.path()).unwrap();

            let tool = sh("test -f \"$TOOLHOST_BUNDLE_DIR/metadata.json\" || exit 9");
            assert_eq!(RegressionTester::run(&tool, &bundle), 0);
        }

        #[test]
        fn test_decompressor_writes_into_output_dir() {
            let bundle_dir = TempDir::new().unwrap();
            let out_dir = TempDir::new().unwrap();
            let bundle = ResourceBundle::open(bundle_dir.path()).unwrap();
            let output = OutputLocation::prepare(out_dir.path()).unwrap();

            let tool = sh("echo '[]' > \"$TOOLHOST_OUTPUT_DIR/benchmark_results.json\"");
            assert_eq!(Decompressor::run(&tool, &bundle, &output), 0);
            assert!(output.join("benchmark_results.json").is_file());
        }
    }
}
