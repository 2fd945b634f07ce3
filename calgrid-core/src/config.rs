//! User configuration at ~/.config/calgrid/config.toml

use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::error::{CalGridError, CalGridResult};
use crate::query::WeekStart;
use crate::seed::SeedKind;
use crate::store::StoreOptions;

static DEFAULT_USER_NAME: &str = "Calendar User";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalGridConfig {
    /// Shown in the header
    pub user_name: String,

    /// First column of the month grid
    pub week_start: WeekStart,

    /// Report unknown or duplicate event ids instead of ignoring them
    pub strict: bool,

    pub seed: SeedConfig,
}

/// Where the session's initial events come from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub kind: SeedKind,

    /// Year generated by the year-plan seed (defaults to the current year)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    /// Fixed RNG seed for reproducible year plans
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rng_seed: Option<u64>,
}

impl Default for CalGridConfig {
    fn default() -> Self {
        CalGridConfig {
            user_name: DEFAULT_USER_NAME.to_string(),
            week_start: WeekStart::default(),
            strict: false,
            seed: SeedConfig::default(),
        }
    }
}

impl CalGridConfig {
    pub fn config_path() -> CalGridResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalGridError::Config("Could not determine config directory".into()))?
            .join("calgrid");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the default config file, creating a commented one if missing.
    pub fn load() -> CalGridResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> CalGridResult<Self> {
        if !path.exists() {
            Self::create_default_config(path)?;
        }

        Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .build()
            .map_err(|e| CalGridError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalGridError::Config(e.to_string()))
    }

    pub fn from_toml_str(contents: &str) -> CalGridResult<Self> {
        Config::builder()
            .add_source(File::from_str(contents, FileFormat::Toml))
            .build()
            .map_err(|e| CalGridError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalGridError::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> CalGridResult<String> {
        toml::to_string_pretty(self).map_err(|e| CalGridError::Config(e.to_string()))
    }

    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            strict: self.strict,
        }
    }

    /// Expand `~` in a user-supplied config path.
    pub fn expand_path(raw: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(raw).into_owned())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalGridResult<()> {
        let contents = format!(
            "\
# calgrid configuration

# Name shown in the header:
# user_name = \"{}\"

# First day of the week in the month grid (\"monday\" or \"sunday\"):
# week_start = \"monday\"

# Treat edits and deletes of unknown events as errors:
# strict = false

# Initial events for each session:
# [seed]
# kind = \"year-plan\"   # or \"sample\", \"empty\"
# year = 2026
# rng_seed = 42
",
            DEFAULT_USER_NAME
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, contents)?;

        Ok(())
    }
}
