//! Command execution with consistent error handling.
//!
//! Every external invocation goes through [`Cmd`], which assembles the
//! argument list explicitly (no string-concatenated command lines) and
//! captures stderr for error reporting. Stdout is discarded: the engine
//! is used only for its success/failure signal.

use anyhow::{bail, Context, Result};
use std::process::{Command, ExitStatus, Stdio};

/// Outcome of a finished command.
#[derive(Debug)]
pub struct CmdOutput {
    /// Exit status of the command.
    pub status: ExitStatus,
    /// Captured stderr as a string.
    pub stderr: String,
}

impl CmdOutput {
    /// Returns true if the command exited successfully.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Get the exit code, or -1 if terminated by signal.
    pub fn code(&self) -> i32 {
        self.status.code().unwrap_or(-1)
    }

    /// Get stderr, trimmed of surrounding whitespace.
    pub fn stderr_trimmed(&self) -> &str {
        self.stderr.trim()
    }
}

/// Builder for one external command invocation.
pub struct Cmd {
    program: String,
    args: Vec<String>,
    /// If true, don't fail on non-zero exit.
    allow_fail: bool,
}

impl Cmd {
    /// Create a new command builder.
    pub fn new(program: impl AsRef<str>) -> Self {
        Self {
            program: program.as_ref().to_string(),
            args: Vec::new(),
            allow_fail: false,
        }
    }

    /// Add a single argument.
    pub fn arg(mut self, arg: impl AsRef<str>) -> Self {
        self.args.push(arg.as_ref().to_string());
        self
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for arg in args {
            self.args.push(arg.as_ref().to_string());
        }
        self
    }

    /// Allow non-zero exit codes without failing.
    pub fn allow_fail(mut self) -> Self {
        self.allow_fail = true;
        self
    }

    /// Run the command to completion, capturing stderr.
    pub fn run(self) -> Result<CmdOutput> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .with_context(|| {
                format!("Failed to execute '{}'. Is it installed?", self.program)
            })?;

        let result = CmdOutput {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        if !self.allow_fail && !result.success() {
            let stderr = result.stderr_trimmed();
            if stderr.is_empty() {
                bail!("'{}' failed (exit code {})", self.program, result.code());
            } else {
                bail!(
                    "'{}' failed (exit code {}):\n{}",
                    self.program,
                    result.code(),
                    stderr
                );
            }
        }

        Ok(result)
    }
}

/// Quote a string for safe interpolation into a `sh -c` script.
///
/// Plain path-and-filename characters pass through untouched; anything
/// else is wrapped in single quotes with embedded quotes escaped.
pub fn sh_quote(s: &str) -> String {
    let plain = !s.is_empty()
        && s.bytes().all(|b| {
            b.is_ascii_alphanumeric() || matches!(b, b'/' | b'.' | b'_' | b'-' | b'+' | b':')
        });
    if plain {
        return s.to_string();
    }
    format!("'{}'", s.replace('\'', r"'\''"))
}
