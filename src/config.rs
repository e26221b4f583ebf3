use crate::error::ConfigError;
use crate::io::HintResolver;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub navigator: NavigatorConfig,
    pub hints: HintConfig,
    pub listing: ListingConfig,
    pub window: WindowConfig,
}

/// Theme configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ThemeConfig {
    /// "dark" or "light"
    pub mode: String,
}

/// Breadcrumb bar behavior
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Path shown at startup; home directory when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_path: Option<PathBuf>,
    /// Text drawn between segments
    pub separator: String,
    /// Reject committed paths that exist but are not directories
    pub commit_requires_directory: bool,
}

/// Autocomplete hints in edit mode
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct HintConfig {
    pub enabled: bool,
    /// Suggest dot-directories even when the typed leaf does not start with '.'
    pub show_hidden: bool,
}

/// Directory listing under the bar
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ListingConfig {
    pub show_hidden: bool,
    pub dirs_first: bool,
}

/// Initial window size (in pixels)
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            mode: "dark".to_string(),
        }
    }
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        NavigatorConfig {
            start_path: None,
            separator: ">".to_string(),
            commit_requires_directory: false,
        }
    }
}

impl Default for HintConfig {
    fn default() -> Self {
        HintConfig {
            enabled: true,
            show_hidden: true,
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        ListingConfig {
            show_hidden: false,
            dirs_first: true,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: 800.0,
            height: 500.0,
        }
    }
}

impl HintConfig {
    /// The resolver to hand the navigator, `None` when hints are off.
    pub fn resolver(&self) -> Option<HintResolver> {
        self.enabled.then(|| HintResolver::new(self.show_hidden))
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "crumbbar")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file, or return defaults if file doesn't exist
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{}; using default configuration", e);
                Config::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str::<Config>(&contents)?)
    }

    /// Save configuration to file
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        // Create config directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> Result<(), ConfigError> {
        if let Some(path) = Self::config_path() {
            if !path.exists() {
                Config::default().save_to(&path)?;
                log::info!("wrote default config to {}", path.display());
            }
        }
        Ok(())
    }

    /// Configured start path, else home, else the working directory, else root.
    pub fn start_path(&self) -> PathBuf {
        if let Some(path) = &self.navigator.start_path {
            return path.clone();
        }
        directories::UserDirs::new()
            .map(|ud| ud.home_dir().to_path_buf())
            .or_else(|| env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("/"))
    }
}
