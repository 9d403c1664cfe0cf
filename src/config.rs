//! Run configuration.
//!
//! Flags are parsed once at startup and frozen here together with the
//! resolved source root. A `.env` file may provide GOPATH (loaded by
//! `main` before [`Config::resolve`]); real environment variables win.

use std::env;
use std::path::PathBuf;

/// Base build image providing the Go toolchain inside the container.
pub const BUILD_IMAGE: &str = "golang";

/// Image version tag. Fixed, not user-configurable.
pub const BUILD_IMAGE_VERSION: &str = "latest";

/// Immutable configuration for one build run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Name of the outputted file.
    pub output: String,
    /// Target operating system (GOOS).
    pub goos: String,
    /// Target architecture (GOARCH).
    pub goarch: String,
    /// Source root under which Go projects are conventionally checked out.
    pub gopath: PathBuf,
}

impl Config {
    /// Freeze the flag values and resolve the source root.
    ///
    /// GOPATH comes from the environment; empty counts as unset and
    /// falls back to the toolchain default `~/go`.
    pub fn resolve(output: String, goos: String, goarch: String) -> Self {
        let gopath = match env::var("GOPATH") {
            Ok(v) if !v.is_empty() => PathBuf::from(v),
            _ => default_gopath(),
        };

        Self {
            output,
            goos,
            goarch,
            gopath,
        }
    }
}

/// Toolchain-default source root (`~/go`).
fn default_gopath() -> PathBuf {
    dirs::home_dir().unwrap_or_default().join("go")
}
