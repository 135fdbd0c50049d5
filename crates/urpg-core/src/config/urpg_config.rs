//! Top-level URPG configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ApiConfig, CatalogConfig, StorageConfig};
use crate::constants::MAX_READ_POOL_SIZE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`URPG_*`)
/// 3. Project config (`urpg.toml` in project root)
/// 4. User config (`~/.urpg/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UrpgConfig {
    pub catalog: CatalogConfig,
    pub storage: StorageConfig,
    pub api: ApiConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub db_path: Option<String>,
    pub num_species: Option<i32>,
    pub pretty_json: Option<bool>,
}

impl UrpgConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        ::tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join("urpg.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        config.with_overrides(cli_overrides)
    }

    /// Apply env and CLI overrides on top of an already-loaded config, then validate.
    pub fn with_overrides(mut self, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        Self::apply_env_overrides(&mut self);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut self, cli);
        }

        Self::validate(&self)?;

        Ok(self)
    }

    /// Load configuration from a single TOML file, ignoring other layers.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        Self::merge_toml_file(&mut config, path)?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load a single TOML file in place of the file layers, keeping env and
    /// CLI overrides on top. Validation runs after the overrides.
    pub fn from_file_with_overrides(
        path: &Path,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        Self::merge_toml_file(&mut config, path)?;
        config.with_overrides(cli_overrides)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &UrpgConfig) -> Result<(), ConfigError> {
        if let Some(n) = config.catalog.num_species {
            if n < 1 {
                return Err(ConfigError::ValidationFailed {
                    field: "catalog.num_species".to_string(),
                    message: "must be at least 1".to_string(),
                });
            }
        }
        if let Some(size) = config.storage.read_pool_size {
            if size == 0 || size > MAX_READ_POOL_SIZE {
                return Err(ConfigError::ValidationFailed {
                    field: "storage.read_pool_size".to_string(),
                    message: format!("must be between 1 and {MAX_READ_POOL_SIZE}"),
                });
            }
        }
        if let Some(ref db_path) = config.storage.db_path {
            if db_path.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "storage.db_path".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(ref base) = config.api.base_path {
            if !base.starts_with('/') {
                return Err(ConfigError::ValidationFailed {
                    field: "api.base_path".to_string(),
                    message: "must start with '/'".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Resolve the database path against `root` unless it is absolute.
    pub fn resolve_db_path(&self, root: &Path) -> PathBuf {
        let configured = Path::new(self.storage.effective_db_path());
        if configured.is_absolute() {
            configured.to_path_buf()
        } else {
            root.join(configured)
        }
    }

    /// Returns the user config path: `~/.urpg/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".urpg").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut UrpgConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: UrpgConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut UrpgConfig, other: &UrpgConfig) {
        // Catalog
        if other.catalog.num_species.is_some() {
            base.catalog.num_species = other.catalog.num_species;
        }
        if other.catalog.derive_size_from_store.is_some() {
            base.catalog.derive_size_from_store = other.catalog.derive_size_from_store;
        }

        // Storage
        if other.storage.db_path.is_some() {
            base.storage.db_path = other.storage.db_path.clone();
        }
        if other.storage.read_pool_size.is_some() {
            base.storage.read_pool_size = other.storage.read_pool_size;
        }

        // API
        if other.api.base_path.is_some() {
            base.api.base_path = other.api.base_path.clone();
        }
        if other.api.pretty_json.is_some() {
            base.api.pretty_json = other.api.pretty_json;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `URPG_NUM_SPECIES`, `URPG_DB_PATH`, etc. Unparseable values are ignored.
    fn apply_env_overrides(config: &mut UrpgConfig) {
        if let Ok(val) = std::env::var("URPG_NUM_SPECIES") {
            if let Ok(v) = val.parse::<i32>() {
                config.catalog.num_species = Some(v);
            }
        }
        if let Ok(val) = std::env::var("URPG_DERIVE_SIZE_FROM_STORE") {
            if let Ok(v) = val.parse::<bool>() {
                config.catalog.derive_size_from_store = Some(v);
            }
        }
        if let Ok(val) = std::env::var("URPG_DB_PATH") {
            config.storage.db_path = Some(val);
        }
        if let Ok(val) = std::env::var("URPG_READ_POOL_SIZE") {
            if let Ok(v) = val.parse::<usize>() {
                config.storage.read_pool_size = Some(v);
            }
        }
        if let Ok(val) = std::env::var("URPG_PRETTY_JSON") {
            if let Ok(v) = val.parse::<bool>() {
                config.api.pretty_json = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut UrpgConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.db_path {
            config.storage.db_path = Some(v.clone());
        }
        if let Some(v) = cli.num_species {
            config.catalog.num_species = Some(v);
        }
        if let Some(v) = cli.pretty_json {
            config.api.pretty_json = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
