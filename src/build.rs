//! The build orchestration sequence.
//!
//! Strictly linear: resolve identity and paths, ensure the base image,
//! derive the in-container mount path, run the containerized build,
//! report the outcome.

use std::env;

use nix::unistd::{self, User};

use crate::config::{Config, BUILD_IMAGE_VERSION};
use crate::docker;
use crate::error::ToolError;
use crate::paths;

/// Numeric identity the output file is handed back to.
struct Identity {
    uid: u32,
    gid: u32,
}

/// uid/gid from the user database record for the process's real uid.
fn invoking_user() -> Result<Identity, ToolError> {
    let record = User::from_uid(unistd::getuid())
        .ok()
        .flatten()
        .ok_or(ToolError::CurrentUser)?;

    Ok(Identity {
        uid: record.uid.as_raw(),
        gid: record.gid.as_raw(),
    })
}

/// Run one containerized cross-compile with the frozen configuration.
pub fn run(config: &Config) -> Result<(), ToolError> {
    let user = invoking_user()?;
    let pwd = env::current_dir().map_err(|_| ToolError::WorkingDir)?;

    docker::ensure_image(BUILD_IMAGE_VERSION);

    let repo = paths::repo_path(&config.gopath, &pwd);

    println!(
        "Compile for {} using architecture {} and output a file named \"{}\"",
        capitalize(&config.goos),
        config.goarch,
        config.output
    );

    docker::BuildRun {
        config,
        host_dir: &pwd,
        repo_path: &repo,
        uid: user.uid,
        gid: user.gid,
    }
    .run()?;

    println!("Compiled!");
    Ok(())
}

/// First letter upper-cased ("linux" -> "Linux").
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
