//! Configuration system for URPG.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod api_config;
pub mod catalog_config;
pub mod storage_config;
pub mod urpg_config;

pub use api_config::ApiConfig;
pub use catalog_config::CatalogConfig;
pub use storage_config::StorageConfig;
pub use urpg_config::{CliOverrides, UrpgConfig};
