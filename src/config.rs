//! Shell Options
//!
//! Identity and seeding for a session, loadable from a TOML file.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Options for creating a shell session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellOptions {
    /// Shown by `whoami`, in the prompt and as owner in `ls -l`
    pub username: String,
    /// Shown in the prompt
    pub hostname: String,
    /// Starting directory and target of `cd` / `cd ~`
    pub home: String,
    /// Fixed RNG seed; entropy when unset
    pub seed: Option<u64>,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            username: "root".to_string(),
            hostname: "cybersec".to_string(),
            home: "/home/cybersec".to_string(),
            seed: None,
        }
    }
}

/// Values given on the command line. Each one that is set wins over the
/// config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub username: Option<String>,
    pub hostname: Option<String>,
    pub seed: Option<u64>,
}

impl ShellOptions {
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(username) = overrides.username {
            self.username = username;
        }
        if let Some(hostname) = overrides.hostname {
            self.hostname = hostname;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        self
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = ShellOptions::default();
        assert_eq!(opts.username, "root");
        assert_eq!(opts.hostname, "cybersec");
        assert_eq!(opts.home, "/home/cybersec");
        assert_eq!(opts.seed, None);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let opts = ShellOptions::from_toml_str("username = \"neo\"\nseed = 42\n").unwrap();
        assert_eq!(opts.username, "neo");
        assert_eq!(opts.hostname, "cybersec");
        assert_eq!(opts.seed, Some(42));
    }

    #[test]
    fn test_empty_toml() {
        assert_eq!(ShellOptions::from_toml_str("").unwrap(), ShellOptions::default());
    }

    #[test]
    fn test_bad_toml() {
        let err = ShellOptions::from_toml_str("username = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = ShellOptions::load("/definitely/not/here.toml").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }

    #[test]
    fn test_flags_beat_file_values() {
        let file = ShellOptions::from_toml_str("username = \"neo\"\nhostname = \"zion\"\nseed = 1\n").unwrap();
        let opts = file.with_overrides(Overrides {
            username: Some("trinity".into()),
            hostname: None,
            seed: Some(9),
        });
        assert_eq!(opts.username, "trinity");
        assert_eq!(opts.hostname, "zion");
        assert_eq!(opts.seed, Some(9));
    }

    #[test]
    fn test_no_overrides_keeps_file() {
        let file = ShellOptions::from_toml_str("seed = 3\n").unwrap();
        assert_eq!(file.clone().with_overrides(Overrides::default()), file);
    }
}
