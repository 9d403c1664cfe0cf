//! Failure reasons reported by the tool.
//!
//! Every detected error prints as `Error: <reason>` on stdout while the
//! process still exits 0. Only `main` applies that policy; everything
//! below the entry point returns the reason instead of exiting.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    /// A required host executable is not resolvable on PATH.
    #[error("Missing executable \"{0}\". ")]
    MissingExecutable(String),

    /// The invoking user's database record could not be resolved.
    #[error("Couldn't get current user.")]
    CurrentUser,

    /// The working directory could not be determined.
    #[error("Couldn't get working directory.")]
    WorkingDir,

    /// The containerized build exited non-zero; carries its captured
    /// stderr verbatim.
    #[error("{0}")]
    Build(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_executable_message_keeps_trailing_space() {
        let err = ToolError::MissingExecutable("docker".to_string());
        assert_eq!(err.to_string(), "Missing executable \"docker\". ");
    }

    #[test]
    fn test_user_and_pwd_messages() {
        assert_eq!(
            ToolError::CurrentUser.to_string(),
            "Couldn't get current user."
        );
        assert_eq!(
            ToolError::WorkingDir.to_string(),
            "Couldn't get working directory."
        );
    }

    #[test]
    fn test_build_error_is_raw_stderr() {
        let err = ToolError::Build("undefined: Foo".to_string());
        assert_eq!(err.to_string(), "undefined: Foo");
    }
}
