use crate::audit::AuditLog;
use crate::config::{Config, SessionConfig};
use crate::error::Error;
use crate::git::operation::Operation;
use crate::shell::{Shell, ShellError, ShellResult, SystemShell};

/// Runs git operations through a shell collaborator
///
/// A runner is a long-lived session. It owns the session configuration and
/// reads it fresh on every invocation, so changing the working directory or
/// verbosity between calls affects the next command. Execution itself never
/// mutates the runner; a `&GitRunner` can issue concurrent calls.
pub struct GitRunner {
    session: SessionConfig,
    shell: Box<dyn Shell>,
    audit: Option<AuditLog>,
}

impl GitRunner {
    /// Create a runner with default session state and the system shell
    pub fn new() -> Self {
        Self::with_session(SessionConfig::default())
    }

    /// Create a runner with the given session state and the system shell
    pub fn with_session(session: SessionConfig) -> Self {
        Self::with_shell(session, Box::new(SystemShell::new()))
    }

    /// Create a runner with a custom shell collaborator
    pub fn with_shell(session: SessionConfig, shell: Box<dyn Shell>) -> Self {
        Self {
            session,
            shell,
            audit: None,
        }
    }

    /// Build a runner from a full configuration
    ///
    /// Constructs the shell and, when enabled, the audit log the
    /// configuration describes.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let shell = SystemShell::with_env(config.shell.program.clone(), config.shell.env.clone());
        let mut runner = Self::with_shell(config.session.clone(), Box::new(shell));

        if config.audit.enabled {
            let audit = match &config.audit.path {
                Some(path) => AuditLog::with_path(path)?,
                None => AuditLog::new()?,
            };
            runner.audit = Some(audit);
        }

        Ok(runner)
    }

    /// Attach an audit log that records every executed command
    pub fn set_audit(&mut self, audit: AuditLog) {
        self.audit = Some(audit);
    }

    /// Get the session configuration
    pub fn config(&self) -> &SessionConfig {
        &self.session
    }

    /// Get the session configuration for modification between calls
    pub fn config_mut(&mut self) -> &mut SessionConfig {
        &mut self.session
    }

    /// Assemble the full shell command line for an operation
    ///
    /// Without a working directory this is `git <resolved>`. With one, a
    /// `cd` step is chained in front, and operations that create their own
    /// repository additionally get a `mkdir -p` step so the directory
    /// exists before the shell changes into it.
    pub fn command_line(&self, operation: &Operation) -> String {
        let resolved = operation.resolve();

        match &self.session.workdir {
            None => format!("git {}", resolved),
            Some(workdir) => {
                let dir = workdir.display();
                let mut segments = Vec::with_capacity(3);

                if operation.initializes_repository() {
                    segments.push(format!("mkdir -p {}", dir));
                }
                segments.push(format!("cd {}", dir));
                segments.push(format!("git {}", resolved));

                segments.join(" && ")
            }
        }
    }

    /// Execute an operation, blocking until the subprocess exits
    ///
    /// Returns captured stdout with trailing newlines trimmed. Commands
    /// that succeed silently (like `add` or `clone`, which writes its
    /// progress to stderr) surface [`ShellError::EmptyOutput`].
    pub fn run(&self, operation: &Operation) -> ShellResult<String> {
        let line = self.command_line(operation);
        self.echo(&line);

        let result = self.shell.run(&line);
        self.record(&line, &result);
        result
    }

    /// Execute an operation without blocking the calling task
    ///
    /// The subprocess runs on a background worker and the returned future
    /// resolves exactly once. Concurrent calls complete in subprocess
    /// duration order, not issue order.
    pub async fn run_async(&self, operation: &Operation) -> ShellResult<String> {
        let line = self.command_line(operation);
        self.echo(&line);

        let result = self.shell.run_async(&line).await;
        self.record_off_thread(line, &result).await;
        result
    }

    /// Echo the assembled line to stderr when verbose mode is on
    fn echo(&self, line: &str) {
        if self.session.verbose {
            eprintln!("{}", line);
        }
    }

    /// Exit code an execution should record, if any
    ///
    /// Silent successes record exit 0; spawn-level failures record nothing
    /// since no process ran.
    fn audit_exit_code(result: &ShellResult<String>) -> Option<i32> {
        match result {
            Ok(_) | Err(ShellError::EmptyOutput) => Some(0),
            Err(ShellError::ExitFailure { code, .. }) => Some(*code),
            Err(ShellError::Io(_)) => None,
        }
    }

    /// Record an execution in the audit log, if one is attached
    ///
    /// Audit write errors never mask the execution result.
    fn record(&self, line: &str, result: &ShellResult<String>) {
        let Some(audit) = &self.audit else {
            return;
        };
        let Some(exit_code) = Self::audit_exit_code(result) else {
            return;
        };

        let _ = audit.record(line, self.session.workdir.as_deref(), exit_code);
    }

    /// Record an execution without tying up the runtime worker thread
    ///
    /// The file append runs on the blocking pool and is awaited, so the
    /// history line is on disk before the returned future resolves.
    async fn record_off_thread(&self, line: String, result: &ShellResult<String>) {
        let Some(audit) = &self.audit else {
            return;
        };
        let Some(exit_code) = Self::audit_exit_code(result) else {
            return;
        };

        let audit = audit.clone();
        let workdir = self.session.workdir.clone();
        let _ = tokio::task::spawn_blocking(move || {
            audit.record(&line, workdir.as_deref(), exit_code)
        })
        .await;
    }
}

impl Default for GitRunner {
    fn default() -> Self {
        Self::new()
    }
}
