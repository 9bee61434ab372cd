use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::active_quest::DEFAULT_ACCEPT_WINDOW_SECS;
use crate::error::Result;

pub const CONFIG_ENV_VAR: &str = "JUGAAD_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "campus_jugaad.yml";

/// Runtime settings, read from YAML. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
    /// Seconds on the clock when a quest is accepted
    pub accept_window_secs: u64,
    pub countdown_interval_ms: u64,
    /// How long the "Incorrect OTP" line stays up
    pub otp_error_display_ms: u64,
    pub toast_display_ms: u64,
    /// Keep everything in memory instead of the sqlite file
    pub in_memory: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./db"),
            log_dir: PathBuf::from("./logs"),
            accept_window_secs: DEFAULT_ACCEPT_WINDOW_SECS,
            countdown_interval_ms: 1000,
            otp_error_display_ms: 2000,
            toast_display_ms: 3000,
            in_memory: false,
        }
    }
}

impl AppConfig {
    /// `$JUGAAD_CONFIG`, else `./campus_jugaad.yml`, else defaults
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));
        Self::load_from_path(&path)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn countdown_interval(&self) -> Duration {
        Duration::from_millis(self.countdown_interval_ms.max(1))
    }

    pub fn otp_error_display(&self) -> Duration {
        Duration::from_millis(self.otp_error_display_ms)
    }

    pub fn toast_display(&self) -> Duration {
        Duration::from_millis(self.toast_display_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
accept_window_secs: 600
in_memory: true
"#;

        let config = AppConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.accept_window_secs, 600);
        assert!(config.in_memory);
        assert_eq!(config.otp_error_display(), Duration::from_secs(2));
        assert_eq!(config.data_dir, PathBuf::from("./db"));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from_path(&dir.path().join("nope.yml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.accept_window_secs, 7185);
    }

    #[test]
    fn test_bad_yaml_is_an_error() {
        assert!(AppConfig::from_yaml("accept_window_secs: [1, 2").is_err());
    }
}
