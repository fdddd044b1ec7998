//! Configuration file support for wraithdeck
//!
//! Config is loaded from `~/.wraithdeck/config.toml` (or `$WRAITHDECK_HOME/config.toml`).
//! Environment variables override config file settings.

use crate::storage::wraithdeck_dir;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::OnceLock;

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Get the global config instance (loaded once on first access)
pub fn config() -> &'static Config {
    CONFIG.get_or_init(Config::load)
}

/// Main configuration struct
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Whose deck this is
    pub profile: ProfileConfig,

    /// Section toggles
    pub display: DisplayConfig,
}

/// Identity of the profile being displayed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Discord user id watched via Lanyard
    pub discord_id: String,
    /// GitHub account whose repos fill the projects grid
    pub github_user: String,
    /// Avatar URL shown before the first presence snapshot arrives,
    /// or when the snapshot carries no avatar hash
    pub fallback_avatar: String,
    /// How many repos the projects grid keeps (default: 6)
    pub repo_limit: usize,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            discord_id: "843136836947410945".to_string(),
            github_user: "wraithsdev".to_string(),
            fallback_avatar: "https://r.resimlink.com/8CWnMTIk4ur.png".to_string(),
            repo_limit: 6,
        }
    }
}

/// Which optional sections the deck renders
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Local time badge in the header (default: true)
    pub clock: bool,
    /// Technologies grid (default: true)
    pub technologies: bool,
    /// Past projects list (default: true)
    pub experience: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            clock: true,
            technologies: true,
            experience: true,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn path() -> Option<PathBuf> {
        wraithdeck_dir().ok().map(|d| d.join("config.toml"))
    }

    /// Load config from file, with environment variable overrides
    pub fn load() -> Self {
        let mut config = Self::load_from_file().unwrap_or_default();
        config.apply_env_overrides();
        config
    }

    /// Load config from file only (no env overrides)
    fn load_from_file() -> Option<Self> {
        let path = Self::path()?;
        if !path.exists() {
            return None;
        }

        let content = std::fs::read_to_string(&path).ok()?;
        match toml::from_str::<Self>(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                crate::logging::error(&format!("Failed to parse config file: {}", e));
                None
            }
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("WRAITHDECK_DISCORD_ID") {
            let trimmed = v.trim().to_string();
            if !trimmed.is_empty() {
                self.profile.discord_id = trimmed;
            }
        }
        if let Ok(v) = std::env::var("WRAITHDECK_GITHUB_USER") {
            let trimmed = v.trim().to_string();
            if !trimmed.is_empty() {
                self.profile.github_user = trimmed;
            }
        }
        if let Ok(v) = std::env::var("WRAITHDECK_REPO_LIMIT") {
            if let Ok(parsed) = v.trim().parse::<usize>() {
                self.profile.repo_limit = parsed;
            }
        }
        if let Ok(v) = std::env::var("WRAITHDECK_CLOCK") {
            if let Some(parsed) = parse_env_bool(&v) {
                self.display.clock = parsed;
            }
        }
        if let Ok(v) = std::env::var("WRAITHDECK_TECHNOLOGIES") {
            if let Some(parsed) = parse_env_bool(&v) {
                self.display.technologies = parsed;
            }
        }
        if let Ok(v) = std::env::var("WRAITHDECK_EXPERIENCE") {
            if let Some(parsed) = parse_env_bool(&v) {
                self.display.experience = parsed;
            }
        }
    }

    /// Save config to file
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::path().ok_or_else(|| anyhow::anyhow!("No config path"))?;

        if let Some(parent) = path.parent() {
            crate::storage::ensure_dir(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Create a default config file with comments
    pub fn create_default_config_file() -> anyhow::Result<PathBuf> {
        let path = Self::path().ok_or_else(|| anyhow::anyhow!("No config path"))?;

        if let Some(parent) = path.parent() {
            crate::storage::ensure_dir(parent)?;
        }

        let default_content = r#"# wraithdeck configuration file
# Location: ~/.wraithdeck/config.toml
#
# Environment variables override these settings:
#   WRAITHDECK_DISCORD_ID, WRAITHDECK_GITHUB_USER, WRAITHDECK_REPO_LIMIT,
#   WRAITHDECK_CLOCK, WRAITHDECK_TECHNOLOGIES, WRAITHDECK_EXPERIENCE

[profile]
# Discord user id watched via Lanyard (https://github.com/Phineas/lanyard)
discord_id = "843136836947410945"

# GitHub account whose public repos fill the projects grid
github_user = "wraithsdev"

# Shown until the first presence snapshot arrives
fallback_avatar = "https://r.resimlink.com/8CWnMTIk4ur.png"

# How many repos the grid keeps
repo_limit = 6

[display]
# Local time badge in the header
clock = true

# Technologies grid
technologies = true

# Past projects list
experience = true
"#;

        if !path.exists() {
            std::fs::write(&path, default_content)?;
        }

        Ok(path)
    }
}

fn parse_env_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
