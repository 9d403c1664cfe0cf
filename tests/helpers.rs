//! Shared test utilities for gocross integration tests.
//!
//! Tests drive the real binary against a fake `docker` executable on a
//! private PATH; every engine invocation is logged for inspection.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment simulating a GOPATH checkout and a container engine.
pub struct TestEnv {
    /// Temporary directory (kept alive for lifetime of TestEnv)
    pub _temp_dir: TempDir,
    /// Directory holding the fake docker executable (used as PATH).
    pub bin_dir: PathBuf,
    /// Simulated GOPATH source root.
    pub gopath: PathBuf,
    /// Project checkout under `<gopath>/src/example.com/demo`.
    pub project_dir: PathBuf,
    /// Base directory for scratch paths outside the source root.
    pub base_dir: PathBuf,
    /// Log of engine invocations, one line of arguments per call.
    log: PathBuf,
}

impl TestEnv {
    /// Create a new test environment with temporary directories.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base = temp_dir.path();

        let bin_dir = base.join("bin");
        let gopath = base.join("gopath");
        let project_dir = gopath.join("src/example.com/demo");
        let base_dir = base.to_path_buf();
        let log = base.join("docker.log");

        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");
        fs::create_dir_all(&project_dir).expect("Failed to create project dir");

        Self {
            _temp_dir: temp_dir,
            bin_dir,
            gopath,
            project_dir,
            base_dir,
            log,
        }
    }

    /// Install a fake `docker` that logs its arguments and plays the
    /// scripted behavior for each subcommand.
    pub fn install_docker(&self, inspect_exit: i32, pull_exit: i32, run_body: &str) {
        let script = format!(
            "#!/bin/sh\n\
             printf '%s\\n' \"$*\" >> {log}\n\
             case \"$1\" in\n\
             inspect) exit {inspect_exit} ;;\n\
             pull) exit {pull_exit} ;;\n\
             run) {run_body} ;;\n\
             esac\n\
             exit 0\n",
            log = self.log.display(),
        );

        let path = self.bin_dir.join("docker");
        fs::write(&path, script).expect("Failed to write fake docker");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to chmod fake docker");
    }

    /// Every logged engine invocation, in call order.
    pub fn engine_calls(&self) -> Vec<String> {
        match fs::read_to_string(&self.log) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }
}
