use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::shell::DEFAULT_SHELL;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    pub session: SessionConfig,
    pub shell: ShellConfig,
    pub audit: AuditConfig,
}

/// Session state the runner reads on every invocation
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SessionConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workdir: Option<PathBuf>,
    pub verbose: bool,
}

/// Construction parameters for the system shell
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ShellConfig {
    pub program: String,
    pub env: HashMap<String, String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_SHELL.to_string(),
            env: HashMap::new(),
        }
    }
}

/// Command history settings
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AuditConfig {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;

        // Validate config
        config.validate()?;

        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        // Validate before saving
        self.validate()?;

        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        // Set permissions to 600 (owner read/write only); env may hold tokens
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    /// Create default configuration
    pub fn default_config() -> Self {
        Config {
            session: SessionConfig {
                workdir: None,
                verbose: false,
            },
            shell: ShellConfig {
                program: DEFAULT_SHELL.to_string(),
                env: HashMap::new(),
            },
            audit: AuditConfig {
                enabled: false,
                path: None,
            },
        }
    }

    /// Validate configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.shell.program.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "shell.program must not be empty".to_string(),
            ));
        }

        if let Some(workdir) = &self.session.workdir {
            if workdir.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "session.workdir must not be empty when set".to_string(),
                ));
            }
        }

        for key in self.shell.env.keys() {
            if key.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "shell.env keys must not be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
