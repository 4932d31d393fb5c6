use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default backend endpoint, matching the service's local development port.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";

pub const ENDPOINT_ENV_VAR: &str = "INFOAGENT_BASE_URL";
pub const VOICE_COMMAND_ENV_VAR: &str = "INFOAGENT_VOICE_COMMAND";

/// Errors that can occur when loading configuration from disk.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse the configuration file as valid TOML.
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "Failed to read config at {}: {}", path.display(), source)
            }
            ConfigError::Parse { path, source } => {
                write!(
                    f,
                    "Failed to parse config at {}: {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl StdError for ConfigError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Backend base URL; `--endpoint` and `INFOAGENT_BASE_URL` override it.
    pub endpoint: Option<String>,
    /// Color theme name (`dark` or `light`).
    pub theme: Option<String>,
    /// Command run to capture a voice utterance; its stdout is appended to
    /// the input buffer. `INFOAGENT_VOICE_COMMAND` overrides it.
    pub voice_command: Option<String>,
}

impl Config {
    /// Load from the platform config directory. A missing file yields the
    /// defaults; unreadable or invalid TOML is an error.
    pub fn load() -> Result<Config, ConfigError> {
        match Self::config_path() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn load_from_path(config_path: &Path) -> Result<Config, ConfigError> {
        if !config_path.exists() {
            return Ok(Config::default());
        }
        let contents = fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
            path: config_path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source,
        })
    }

    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "permacommons", "infoagent")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn resolve_endpoint(&self, cli: Option<&str>) -> String {
        resolve_endpoint(
            cli,
            std::env::var(ENDPOINT_ENV_VAR).ok().as_deref(),
            self.endpoint.as_deref(),
        )
    }

    pub fn resolve_theme(&self, cli: Option<&str>) -> String {
        cli.or(self.theme.as_deref()).unwrap_or("dark").to_string()
    }

    pub fn resolve_voice_command(&self) -> Option<String> {
        std::env::var(VOICE_COMMAND_ENV_VAR)
            .ok()
            .filter(|cmd| !cmd.trim().is_empty())
            .or_else(|| self.voice_command.clone())
    }
}

/// Precedence: CLI flag, then environment, then config file, then the
/// built-in default. Kept free of environment access so it can be tested
/// directly.
fn resolve_endpoint(cli: Option<&str>, env: Option<&str>, file: Option<&str>) -> String {
    cli.or(env)
        .or(file)
        .filter(|endpoint| !endpoint.trim().is_empty())
        .unwrap_or(DEFAULT_ENDPOINT)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = Config::load_from_path(&dir.path().join("absent.toml")).expect("defaults");
        assert!(config.endpoint.is_none());
        assert!(config.voice_command.is_none());
    }

    #[test]
    fn file_values_are_read() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "endpoint = \"https://chat.example.com\"").expect("write");
        writeln!(file, "theme = \"light\"").expect("write");

        let config = Config::load_from_path(file.path()).expect("parse");
        assert_eq!(config.endpoint.as_deref(), Some("https://chat.example.com"));
        assert_eq!(config.resolve_theme(None), "light");
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "endpoint = [not toml").expect("write");

        match Config::load_from_path(file.path()) {
            Err(ConfigError::Parse { .. }) => {}
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn endpoint_precedence_is_cli_env_file_default() {
        assert_eq!(
            resolve_endpoint(Some("cli"), Some("env"), Some("file")),
            "cli"
        );
        assert_eq!(resolve_endpoint(None, Some("env"), Some("file")), "env");
        assert_eq!(resolve_endpoint(None, None, Some("file")), "file");
        assert_eq!(resolve_endpoint(None, None, None), DEFAULT_ENDPOINT);
        assert_eq!(resolve_endpoint(None, None, Some("  ")), DEFAULT_ENDPOINT);
    }

    #[test]
    fn cli_theme_wins_over_file() {
        let config = Config {
            theme: Some("light".into()),
            ..Config::default()
        };
        assert_eq!(config.resolve_theme(Some("dark")), "dark");
    }
}
