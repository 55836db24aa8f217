use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use polyrun::LOCAL_LANGUAGE;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name of the natively executable language
    pub local_language: String,

    /// Prompt shown in interactive mode
    pub prompt: String,

    /// Extra diagnostics in CLI output
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            local_language: LOCAL_LANGUAGE.to_string(),
            prompt: "polyrun> ".to_string(),
            debug: false,
        }
    }
}

impl Config {
    /// Load configuration from the standard search paths.
    ///
    /// Search order:
    /// 1. Explicit path if provided
    /// 2. .polyrun.yml in current directory (project config)
    /// 3. ~/.config/polyrun/polyrun.yml (user config)
    /// 4. Default values
    pub fn load(explicit_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        let project = PathBuf::from(".polyrun.yml");
        if project.exists() {
            return Self::from_file(&project);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user = config_dir.join("polyrun").join("polyrun.yml");
            if user.exists() {
                return Self::from_file(&user);
            }
        }

        Ok(Self::default())
    }

    fn from_file(path: &PathBuf) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.local_language, "LOCAL");
        assert_eq!(config.prompt, "polyrun> ");
        assert!(!config.debug);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: Config = serde_yaml::from_str("local_language: x86\n").unwrap();
        assert_eq!(config.local_language, "x86");
        assert_eq!(config.prompt, "polyrun> ");
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let path = PathBuf::from("/nonexistent/polyrun.yml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("polyrun.yml");
        fs::write(&path, "local_language: x86\ndebug: true\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.local_language, "x86");
        assert!(config.debug);
        assert_eq!(config.prompt, "polyrun> ");
    }
}
