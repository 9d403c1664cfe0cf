//! Container-engine operations.
//!
//! Docker is treated as an opaque host tool: inspect and pull are used
//! only for their success/failure signal, and only stderr of the build
//! run is kept.

use std::path::Path;

use crate::config::{Config, BUILD_IMAGE};
use crate::error::ToolError;
use crate::process::{sh_quote, Cmd};

/// Name of the container engine executable.
pub const ENGINE: &str = "docker";

/// True if `golang:<version>` is already present locally.
fn image_exists(version: &str) -> bool {
    Cmd::new(ENGINE)
        .arg("inspect")
        .arg(format!("{BUILD_IMAGE}:{version}"))
        .allow_fail()
        .run()
        .map(|out| out.success())
        .unwrap_or(false)
}

/// Pull the base image if it is missing locally.
///
/// A failed pull is not fatal: the build run reports the authoritative
/// error if the image is truly unusable.
pub fn ensure_image(version: &str) {
    if image_exists(version) {
        return;
    }

    println!("Pulling image for {BUILD_IMAGE}:{version}");
    let _ = Cmd::new(ENGINE)
        .arg("pull")
        .arg(format!("{BUILD_IMAGE}:{version}"))
        .allow_fail()
        .run();
}

/// One containerized build: the working directory is bind-mounted under
/// `/go/src`, built there, and the output file handed back to the
/// invoking user.
pub struct BuildRun<'a> {
    pub config: &'a Config,
    /// Host directory mounted into the container.
    pub host_dir: &'a Path,
    /// Repository path under the container's `/go/src`.
    pub repo_path: &'a str,
    pub uid: u32,
    pub gid: u32,
}

impl BuildRun<'_> {
    /// In-container script: build, then fix ownership of the output.
    fn script(&self) -> String {
        format!(
            "cd /go/src/{repo} && go build -a -o {out} && chown {uid}:{gid} {out}",
            repo = sh_quote(self.repo_path),
            out = sh_quote(&self.config.output),
            uid = self.uid,
            gid = self.gid,
        )
    }

    /// Bind-mount specification, `hostPath:containerPath`.
    fn mount(&self) -> String {
        format!("{}:/go/src/{}", self.host_dir.display(), self.repo_path)
    }

    /// Execute the build. Returns the captured stderr on failure.
    pub fn run(&self) -> Result<(), ToolError> {
        let out = Cmd::new(ENGINE)
            .args(["run", "--rm", "-v"])
            .arg(self.mount())
            .arg("-e")
            .arg(format!("GOOS={}", self.config.goos))
            .args(["-e", "CGO_ENABLED=0"])
            .arg("-e")
            .arg(format!("GOARCH={}", self.config.goarch))
            .args([BUILD_IMAGE, "sh", "-c"])
            .arg(self.script())
            .allow_fail()
            .run()
            .map_err(|err| ToolError::Build(err.to_string()))?;

        if !out.success() {
            return Err(ToolError::Build(out.stderr_trimmed().to_string()));
        }
        Ok(())
    }
}
