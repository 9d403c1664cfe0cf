//! Host-tool preflight check.
//!
//! Runs before any flag is examined: without the container engine there
//! is nothing else worth doing.

use std::path::PathBuf;

use crate::error::ToolError;

/// Confirm `tool` resolves on the search path.
pub fn require_executable(tool: &str) -> Result<PathBuf, ToolError> {
    which::which(tool).map_err(|_| ToolError::MissingExecutable(tool.to_string()))
}
