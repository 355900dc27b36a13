use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Names accepted by `settings get/set/reset`
pub const SETTING_NAMES: &[&str] = &[
    "data-path",
    "sheet",
    "model-column",
    "compat-column",
    "split",
    "sample-rows",
];

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
    #[serde(default)]
    pub sheet: Option<String>,
    #[serde(default)]
    pub model_column: Option<String>,
    #[serde(default)]
    pub compat_column: Option<String>,
    #[serde(default = "default_split")]
    pub split: bool,
    #[serde(default = "default_sample_rows")]
    pub sample_rows: usize,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data/final.xlsx")
}

fn default_split() -> bool {
    true
}

fn default_sample_rows() -> usize {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            sheet: None,
            model_column: None,
            compat_column: None,
            split: default_split(),
            sample_rows: default_sample_rows(),
        }
    }
}

impl Settings {
    /// Current value of a setting as display text; unset optional values are `None`.
    pub fn get(&self, name: &str) -> Result<Option<String>> {
        let value = match name {
            "data-path" => Some(self.data_path.display().to_string()),
            "sheet" => self.sheet.clone(),
            "model-column" => self.model_column.clone(),
            "compat-column" => self.compat_column.clone(),
            "split" => Some(self.split.to_string()),
            "sample-rows" => Some(self.sample_rows.to_string()),
            _ => anyhow::bail!("Unknown setting: {}", name),
        };
        Ok(value)
    }

    /// Parse and apply a value for a setting.
    pub fn set(&mut self, name: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match name {
            "data-path" => {
                if value.is_empty() {
                    anyhow::bail!("data-path cannot be empty");
                }
                self.data_path = PathBuf::from(value);
            }
            "sheet" => self.sheet = non_empty(value),
            "model-column" => self.model_column = non_empty(value),
            "compat-column" => self.compat_column = non_empty(value),
            "split" => {
                self.split = match value.to_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    _ => anyhow::bail!("Invalid value for split: '{}'. Use true or false.", value),
                };
            }
            "sample-rows" => {
                let rows: usize = value.parse().map_err(|_| {
                    anyhow::anyhow!(
                        "Invalid value for sample-rows: '{}'. Must be a positive integer.",
                        value
                    )
                })?;
                if rows == 0 {
                    anyhow::bail!("sample-rows must be greater than 0");
                }
                self.sample_rows = rows;
            }
            _ => anyhow::bail!("Unknown setting: {}", name),
        }
        Ok(())
    }

    /// Restore a single setting to its default value.
    pub fn reset(&mut self, name: &str) -> Result<()> {
        let defaults = Settings::default();
        match name {
            "data-path" => self.data_path = defaults.data_path,
            "sheet" => self.sheet = defaults.sheet,
            "model-column" => self.model_column = defaults.model_column,
            "compat-column" => self.compat_column = defaults.compat_column,
            "split" => self.split = defaults.split,
            "sample-rows" => self.sample_rows = defaults.sample_rows,
            _ => anyhow::bail!("Unknown setting: {}", name),
        }
        Ok(())
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("compat-finder")
        } else {
            // Use home directory with dot prefix on Windows/Mac
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".compat-finder")
        };

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            info!("Config file doesn't exist, using defaults");
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        Self::from_toml(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        debug!("Saving config to: {:?}", config_path);

        if let Some(config_dir) = config_path.parent() {
            if !config_dir.exists() {
                fs::create_dir_all(config_dir)
                    .with_context(|| format!("Failed to create config directory: {:?}", config_dir))?;
                info!("Created config directory: {:?}", config_dir);
            }
        }

        let config_content =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(&config_path, config_content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        info!("Config saved successfully");
        Ok(())
    }

    pub fn get_settings(&self) -> &Settings {
        &self.settings
    }

    pub fn update_setting(&mut self, name: &str, value: &str) -> Result<()> {
        info!("Updating setting {} to {}", name, value);
        self.settings.set(name, value)?;
        self.save()
    }

    pub fn reset_setting(&mut self, name: &str) -> Result<()> {
        info!("Resetting setting {}", name);
        self.settings.reset(name)?;
        self.save()
    }

    pub fn reset_all_settings(&mut self) -> Result<()> {
        info!("Resetting all settings");
        self.settings = Settings::default();
        self.save()
    }
}
