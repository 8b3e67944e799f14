use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::models::sort::ToggleMode;

const DEFAULT_CONFIG: &str = include_str!("../.config/config.yaml");

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub data_file: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
    #[serde(default)]
    pub toggle_mode: ToggleMode,
}

impl Config {
    /// Load config from `path`, or from the default location if `None`.
    ///
    /// A missing file is created with the default content.
    pub fn new(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => get_config_path()?,
        };
        Self::load(&config_path)
    }

    fn load(config_path: &Path) -> Result<Self> {
        if !config_path.is_file() {
            if let Some(dir) = config_path.parent()
                && !dir.as_os_str().is_empty()
            {
                fs::create_dir_all(dir)
                    .with_context(|| format!("Fail to create directory `{}`", dir.display()))?;
            }
            fs::write(config_path, DEFAULT_CONFIG)
                .with_context(|| format!("Fail to write file `{}`", config_path.display()))?;
            return Ok(serde_yaml_ng::from_str(DEFAULT_CONFIG)?);
        }

        let file = fs::File::open(config_path)
            .with_context(|| format!("Fail to open file `{}`", config_path.display()))?;
        let cfg: Config = serde_yaml_ng::from_reader(file)
            .with_context(|| format!("Fail to deserialize file `{}`", config_path.display()))?;

        Ok(cfg)
    }
}

pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_project_dir()?.config_dir().join("config.yaml"))
}

pub fn get_project_dir() -> Result<ProjectDirs> {
    ProjectDirs::from("io.github", "", env!("CARGO_PKG_NAME"))
        .ok_or_else(|| anyhow!("Fail to get project directory"))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_config_default() {
        let temp = TempDir::new().unwrap();
        let cfg_path = temp.path().join("nested").join("config.yaml");

        let config = Config::load(&cfg_path).unwrap();
        assert!(cfg_path.is_file(), "default config should be written");
        assert_eq!(config.data_file, None);
        assert_eq!(config.log_file, None);
        assert_eq!(config.log_level, Some("info".to_owned()));
        assert_eq!(config.toggle_mode, ToggleMode::FieldAware);
    }

    #[test]
    fn test_config_existing_file() {
        let temp = TempDir::new().unwrap();
        let cfg_path = temp.path().join("config.yaml");
        let custom_config = r#"
data-file: /tmp/people.json
log-file: /tmp/log.log
log-level: "debug"
toggle-mode: always-flip
"#;
        fs::write(&cfg_path, custom_config).unwrap();

        let config = Config::new(Some(cfg_path)).unwrap();
        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/people.json")));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/log.log")));
        assert_eq!(config.log_level, Some("debug".to_owned()));
        assert_eq!(config.toggle_mode, ToggleMode::AlwaysFlip);
    }

    #[test]
    fn test_config_partial_file() {
        let temp = TempDir::new().unwrap();
        let cfg_path = temp.path().join("config.yaml");
        fs::write(&cfg_path, "log-level: warn\n").unwrap();

        let config = Config::load(&cfg_path).unwrap();
        assert_eq!(config.log_level, Some("warn".to_owned()));
        assert_eq!(config.toggle_mode, ToggleMode::FieldAware);
    }

    #[test]
    fn test_config_de_error() {
        let temp = TempDir::new().unwrap();
        let cfg_path = temp.path().join("config.yaml");
        fs::write(&cfg_path, "toggle-mode: sideways\n").unwrap();

        let result = Config::load(&cfg_path);
        assert!(result.is_err(), "expected error, got {:?}", result);

        let err_msg = result.unwrap_err().to_string();
        assert!(
            err_msg.contains("Fail to deserialize file"),
            "expected contains `Fail to deserialize file`, but got {}",
            err_msg
        );
    }
}
