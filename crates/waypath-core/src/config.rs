//! Configuration for waypath
//!
//! Configuration lives in `config.toml`. It is resolved from an explicit path,
//! then `$WAYPATH_CONFIG_DIR/config.toml`, then the platform config directory
//! (`~/.config/waypath/config.toml` on Linux). A missing file yields defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_invalid;
use crate::error::{Result, WaypathError};
use crate::graph::SearchOptions;

pub use types::{GridConfig, RoadConfig, SearchConfig, WaypathConfig, EARTH_RADIUS_KM, MAX_GRID_SIZE};

const CONFIG_DIR: &str = "waypath";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "WAYPATH_CONFIG_DIR";

impl WaypathConfig {
    /// Default location of the configuration file
    pub fn default_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    WaypathError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Resolve and load configuration.
    ///
    /// An explicit path must exist; the default location is optional.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let config = match explicit {
            Some(path) => Self::load(path)?,
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::load(&path)?
                } else {
                    tracing::debug!(path = %path.display(), "no config file, using defaults");
                    Self::default()
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: WaypathConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| WaypathError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject values no search or generator can work with
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_GRID_SIZE).contains(&self.grid.size) {
            bail_invalid!("grid.size", self.grid.size);
        }
        if !(0.0..1.0).contains(&self.grid.obstacle_ratio) {
            bail_invalid!("grid.obstacle_ratio", self.grid.obstacle_ratio);
        }
        if self.search.max_expansions == Some(0) {
            bail_invalid!("search.max_expansions", 0);
        }
        if !(self.road.earth_radius_km > 0.0) {
            bail_invalid!("road.earth_radius_km", self.road.earth_radius_km);
        }
        Ok(())
    }

    /// Engine options derived from the `[search]` section
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            check_admissibility: self.search.check_admissibility,
            max_expansions: self.search.max_expansions,
            ..SearchOptions::default()
        }
    }
}
