use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::process::Command;
use thiserror::Error;

/// Shell program used when none is configured
pub const DEFAULT_SHELL: &str = "/bin/sh";

/// Errors that can occur while executing a command line
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Command produced no output")]
    EmptyOutput,

    #[error("Command exited with status {code}: {message}")]
    ExitFailure { code: i32, message: String },

    #[error("Failed to run shell: {0}")]
    Io(#[from] io::Error),
}

/// Result type for shell execution
pub type ShellResult<T> = std::result::Result<T, ShellError>;

/// Trait for shells that can execute a command line and capture its output
///
/// Implementations interpret the whole command line (including any `&&`
/// chaining) and return captured stdout with trailing newlines trimmed.
/// A successful exit with zero bytes on stdout is reported as
/// [`ShellError::EmptyOutput`]; a non-zero exit as
/// [`ShellError::ExitFailure`] carrying the exact exit code and captured
/// stderr.
#[async_trait]
pub trait Shell: Send + Sync {
    /// Execute a command line, blocking until the process exits
    fn run(&self, command: &str) -> ShellResult<String>;

    /// Execute a command line on a background worker
    ///
    /// The returned future resolves exactly once, with the same result the
    /// blocking call would produce. It may complete on a different thread
    /// than the caller's.
    async fn run_async(&self, command: &str) -> ShellResult<String>;
}

/// Executes command lines through a system shell (`/bin/sh -c` by default)
#[derive(Debug, Clone)]
pub struct SystemShell {
    program: String,
    env: HashMap<String, String>,
}

impl SystemShell {
    /// Create a shell backed by `/bin/sh` with no extra environment
    pub fn new() -> Self {
        Self::with_program(DEFAULT_SHELL)
    }

    /// Create a shell backed by a custom program
    pub fn with_program<S: Into<String>>(program: S) -> Self {
        Self {
            program: program.into(),
            env: HashMap::new(),
        }
    }

    /// Create a shell with a custom program and extra environment variables
    ///
    /// The variables are laid over the parent process environment for every
    /// invocation; the parent environment itself is inherited unchanged.
    pub fn with_env<S: Into<String>>(program: S, env: HashMap<String, String>) -> Self {
        Self {
            program: program.into(),
            env,
        }
    }

    /// Get the shell program path
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for SystemShell {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Shell for SystemShell {
    fn run(&self, command: &str) -> ShellResult<String> {
        let output = Command::new(&self.program)
            .arg("-c")
            .arg(command)
            .envs(&self.env)
            .output()?;

        // Signal-terminated processes have no exit code
        let exit_code = output.status.code().unwrap_or(-1);

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ShellError::ExitFailure {
                code: exit_code,
                message: stderr.trim().to_string(),
            });
        }

        // Emptiness is judged on the raw bytes: a lone newline is output
        if output.stdout.is_empty() {
            return Err(ShellError::EmptyOutput);
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.trim_end_matches('\n').to_string())
    }

    async fn run_async(&self, command: &str) -> ShellResult<String> {
        let shell = self.clone();
        let command = command.to_string();

        tokio::task::spawn_blocking(move || shell.run(&command))
            .await
            .map_err(|e| ShellError::Io(io::Error::other(e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_captures_stdout() {
        let shell = SystemShell::new();
        let output = shell.run("echo hello").unwrap();
        assert_eq!(output, "hello");
    }

    #[test]
    fn test_run_trims_trailing_newlines_only() {
        let shell = SystemShell::new();
        let output = shell.run("printf ' a\\n\\n'").unwrap();
        assert_eq!(output, " a");
    }

    #[test]
    fn test_silent_success_is_empty_output() {
        let shell = SystemShell::new();
        let result = shell.run("true");
        assert!(matches!(result, Err(ShellError::EmptyOutput)));
    }

    #[test]
    fn test_newline_only_output_is_not_empty() {
        let shell = SystemShell::new();
        let output = shell.run("echo").unwrap();
        assert_eq!(output, "");
    }

    #[test]
    fn test_exit_failure_carries_code() {
        let shell = SystemShell::new();
        let result = shell.run("exit 7");
        match result {
            Err(ShellError::ExitFailure { code, .. }) => assert_eq!(code, 7),
            other => panic!("Expected ExitFailure, got {:?}", other),
        }
    }

    #[test]
    fn test_exit_failure_carries_stderr() {
        let shell = SystemShell::new();
        let result = shell.run("echo oops >&2; exit 1");
        match result {
            Err(ShellError::ExitFailure { code, message }) => {
                assert_eq!(code, 1);
                assert_eq!(message, "oops");
            }
            other => panic!("Expected ExitFailure, got {:?}", other),
        }
    }

    #[test]
    fn test_signal_termination_maps_to_minus_one() {
        let shell = SystemShell::new();
        let result = shell.run("kill -9 $$");
        match result {
            Err(ShellError::ExitFailure { code, .. }) => assert_eq!(code, -1),
            other => panic!("Expected ExitFailure, got {:?}", other),
        }
    }

    #[test]
    fn test_env_reaches_subprocess() {
        let mut env = HashMap::new();
        env.insert("GITRUN_TEST_VAR".to_string(), "42".to_string());

        let shell = SystemShell::with_env(DEFAULT_SHELL, env);
        let output = shell.run("echo $GITRUN_TEST_VAR").unwrap();
        assert_eq!(output, "42");
    }

    #[test]
    fn test_parent_env_inherited() {
        let shell = SystemShell::new();
        let output = shell.run("echo $PATH").unwrap();
        assert!(!output.is_empty());
    }

    #[test]
    fn test_missing_program_is_io_error() {
        let shell = SystemShell::with_program("/nonexistent/shell-binary");
        let result = shell.run("echo hi");
        assert!(matches!(result, Err(ShellError::Io(_))));
    }

    #[test]
    fn test_program_accessor() {
        let shell = SystemShell::new();
        assert_eq!(shell.program(), DEFAULT_SHELL);

        let custom = SystemShell::with_program("/bin/bash");
        assert_eq!(custom.program(), "/bin/bash");
    }

    #[tokio::test]
    async fn test_run_async_matches_blocking() {
        let shell = SystemShell::new();

        let blocking = shell.run("echo async").unwrap();
        let background = shell.run_async("echo async").await.unwrap();
        assert_eq!(blocking, background);
    }

    #[tokio::test]
    async fn test_run_async_propagates_failure() {
        let shell = SystemShell::new();
        let result = shell.run_async("exit 3").await;
        match result {
            Err(ShellError::ExitFailure { code, .. }) => assert_eq!(code, 3),
            other => panic!("Expected ExitFailure, got {:?}", other),
        }
    }
}
