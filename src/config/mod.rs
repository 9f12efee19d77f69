use crate::errors::{AppError, AppResult};
use crate::report::preview::PreviewStyle;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Keys every configuration file is expected to carry.
pub const CONFIG_KEYS: &[&str] = &["clipboard_command", "color", "wrap_width", "separator_char"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Copy command overriding the platform default (e.g. "xclip -selection clipboard")
    #[serde(default)]
    pub clipboard_command: Option<String>,
    #[serde(default = "default_color")]
    pub color: bool,
    #[serde(default)]
    pub wrap_width: usize,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,

    #[serde(skip)]
    pub path: PathBuf,
}

fn default_color() -> bool {
    true
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clipboard_command: None,
            color: default_color(),
            wrap_width: 0,
            separator_char: default_separator_char(),
            path: Self::config_file(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("shiftreport")
        } else {
            let home = env::var("HOME")
                .map(PathBuf::from)
                .ok()
                .or_else(dirs::home_dir)
                .unwrap_or_else(|| PathBuf::from("."));
            home.join(".shiftreport")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shiftreport.conf")
    }

    /// Load configuration from the default location.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from `path`, or return defaults if it does not exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config {
                path: path.to_path_buf(),
                ..Config::default()
            });
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let mut cfg: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?
        };
        cfg.path = path.to_path_buf();
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn save(&self) -> AppResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = self.to_yaml()?;
        let mut file = fs::File::create(&self.path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        tracing::info!(path = %self.path.display(), "config saved");
        Ok(())
    }

    /// Keys missing from the file on disk (defaults are used for them).
    pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let yaml: Value = if content.trim().is_empty() {
            Value::Null
        } else {
            serde_yaml::from_str(&content)?
        };

        let missing = CONFIG_KEYS
            .iter()
            .copied()
            .filter(|k| {
                yaml.as_mapping()
                    .map(|m| !m.contains_key(*k))
                    .unwrap_or(true)
            })
            .collect();
        Ok(missing)
    }

    pub fn preview_style(&self) -> PreviewStyle {
        PreviewStyle {
            color: self.color,
            wrap_width: self.wrap_width,
            separator_char: self.separator_char.clone(),
        }
    }
}
