//! Executor that runs commands through a shell on the local host

use super::CommandExecutor;
use crate::error::{AppError, Result};
use std::process::Command;

/// Shell used when neither the executor nor the caller names one
pub const DEFAULT_SHELL: &str = "sh";

/// Runs command lines with `<shell> -c <command>` on this machine
#[derive(Debug, Clone)]
pub struct LocalShellExecutor {
    default_shell: String,
}

impl LocalShellExecutor {
    pub fn new() -> Self {
        Self {
            default_shell: DEFAULT_SHELL.to_string(),
        }
    }

    /// Use `shell` whenever the caller does not name one
    pub fn with_default_shell<S: Into<String>>(shell: S) -> Self {
        Self {
            default_shell: shell.into(),
        }
    }

    pub fn default_shell(&self) -> &str {
        &self.default_shell
    }
}

impl Default for LocalShellExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor for LocalShellExecutor {
    fn execute(&self, command: &str, shell: Option<&str>) -> Result<String> {
        let shell = shell.unwrap_or(&self.default_shell);
        let output = Command::new(shell)
            .arg("-c")
            .arg(command)
            .output()
            .map_err(|e| AppError::execution(format!("failed to spawn {}: {}", shell, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::execution(format!(
                "'{}' exited with status {}: {}",
                command,
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
