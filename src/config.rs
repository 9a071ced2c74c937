//! Runtime configuration
//!
//! Loaded from a RON file, with fallback to hardcoded defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "keybreach.ron";

/// Config loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed RNG seed for reproducible codes
    pub seed: Option<u64>,
    /// Log file, relative to the working directory
    pub log_file: String,
    /// Default log filter when RUST_LOG is unset
    pub log_level: String,
    /// Frame loop rate
    pub target_fps: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_file: "keybreach.log".to_string(),
            log_level: "info".to_string(),
            target_fps: 30,
        }
    }
}

impl GameConfig {
    /// Load from the first config file found
    ///
    /// No config file at all is not an error: defaults are returned.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::candidate_paths().into_iter().find(|p| p.exists()) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config)
    }

    /// Parse RON text; missing fields take their defaults
    pub fn parse(content: &str) -> Result<Self, ron::error::SpannedError> {
        let mut config: Self = ron::from_str(content)?;
        config.target_fps = config.target_fps.clamp(1, 240);
        Ok(config)
    }

    /// Working directory first, then the platform config directory
    fn candidate_paths() -> Vec<PathBuf> {
        use directories::ProjectDirs;

        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        if let Some(proj_dirs) = ProjectDirs::from("com", "keybreach", "Keybreach") {
            paths.push(proj_dirs.config_dir().join("config.ron"));
        }
        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = GameConfig::parse(
            r#"(seed: Some(1234), log_file: "run.log", log_level: "debug", target_fps: 60)"#,
        )
        .unwrap();
        assert_eq!(config.seed, Some(1234));
        assert_eq!(config.log_file, "run.log");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.target_fps, 60);
    }

    #[test]
    fn test_parse_partial_uses_defaults() {
        let config = GameConfig::parse("(seed: Some(5))").unwrap();
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.log_file, GameConfig::default().log_file);
        assert_eq!(config.target_fps, 30);
    }

    #[test]
    fn test_parse_clamps_fps() {
        let config = GameConfig::parse("(target_fps: 0)").unwrap();
        assert_eq!(config.target_fps, 1);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(GameConfig::parse("(seed: \"not a number\")").is_err());
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = GameConfig::load_from(Path::new("/nonexistent/keybreach.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn test_load_from_bad_file() {
        let path = std::env::temp_dir().join(format!("keybreach-test-{}.ron", std::process::id()));
        fs::write(&path, "(target_fps: ").unwrap();
        let err = GameConfig::load_from(&path).unwrap_err();
        fs::remove_file(&path).ok();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
