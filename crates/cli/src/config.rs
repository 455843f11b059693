//! Configuration file loading and environment variable handling.
//!
//! Precedence: CLI args > Environment vars > Config file > Defaults

use dateguess_core::Notation;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file content for `--config-init`.
pub const DEFAULT_CONFIG: &str = r#"# dguess configuration
# See: dguess --help for all options

# Output notation: "default" (yyyy-MM-DD) or "strftime" (%Y-%m-%d)
notation = "default"

# Accept any day from 1 to 31 in any month (31/02 passes)
lenient_days = false

# Disable colored output
no_color = false
"#;

/// Configuration loaded from file and environment.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub notation: Option<Notation>,
    pub lenient_days: Option<bool>,
    pub no_color: Option<bool>,
}

impl Config {
    /// Get the config file path.
    ///
    /// - Linux: `~/.config/dguess/config.toml`
    /// - macOS: `~/Library/Application Support/dguess/config.toml`
    /// - Windows: `%APPDATA%\dguess\config.toml`
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dguess").join("config.toml"))
    }

    /// Load config from the standard location. Returns default if the file
    /// doesn't exist.
    pub fn load() -> Self {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load config from `path`. Returns default if the file is missing or
    /// malformed.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };

        toml::from_str(&contents).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Read value from environment variable.
    fn env_var<T: std::str::FromStr>(name: &str) -> Option<T> {
        std::env::var(name).ok()?.parse().ok()
    }

    /// Get notation with precedence: env > config > default.
    pub fn notation(&self) -> Notation {
        Self::env_var("DGUESS_NOTATION")
            .or(self.notation)
            .unwrap_or_default()
    }

    /// Get lenient_days with precedence: env > config > default.
    pub fn lenient_days(&self) -> bool {
        Self::env_var("DGUESS_LENIENT_DAYS")
            .or(self.lenient_days)
            .unwrap_or(false)
    }

    /// Get no_color with precedence: env > config > default.
    ///
    /// Respects the `NO_COLOR` standard (https://no-color.org/).
    pub fn no_color(&self) -> bool {
        // NO_COLOR is a standard - presence means disable color
        if std::env::var("NO_COLOR").is_ok() {
            return true;
        }
        if std::env::var("DGUESS_NO_COLOR").is_ok() {
            return true;
        }
        self.no_color.unwrap_or(false)
    }
}

/// Create a default config file at the standard location.
pub fn init_config() -> Result<PathBuf, String> {
    let path = Config::path().ok_or("Cannot determine config directory")?;
    init_config_at(&path)?;
    Ok(path)
}

/// Create a default config file at `path`, refusing to overwrite one.
pub fn init_config_at(path: &Path) -> Result<(), String> {
    if path.exists() {
        return Err(format!("Config file already exists: {}", path.display()));
    }

    // Create parent directory
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("Failed to create directory: {}", e))?;
    }

    fs::write(path, DEFAULT_CONFIG).map_err(|e| format!("Failed to write config: {}", e))
}
