//! UrpgRuntime: process-wide singleton via `OnceLock`, lock-free after
//! initialization.
//!
//! Owns the resolved configuration, the storage engine and the router built
//! over it. Initialize once with `initialize()`, then use `get()`.

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use urpg_core::config::{CliOverrides, UrpgConfig};
use urpg_core::traits::ICatalogStorage;
use urpg_service::{AbilityService, AttackService, SpeciesService};
use urpg_storage::CatalogStorageEngine;

use crate::errors::{ApiError, ApiResult};
use crate::router::Router;

static RUNTIME: OnceLock<Arc<UrpgRuntime>> = OnceLock::new();

pub struct UrpgRuntime {
    pub config: UrpgConfig,
    pub storage: Arc<CatalogStorageEngine>,
    pub router: Router,
    pub project_root: PathBuf,
}

/// Options for building the runtime.
#[derive(Debug, Default)]
pub struct RuntimeOptions {
    /// Project root for `urpg.toml` and relative database paths. Default: `.`
    pub project_root: Option<PathBuf>,
    /// Database file. Overrides `storage.db_path` from config.
    pub db_path: Option<PathBuf>,
    /// Use an in-memory database instead of a file.
    pub in_memory: bool,
    /// Single config file to load instead of the file layers.
    pub config_path: Option<PathBuf>,
    /// Inline TOML config, for tests. Takes precedence over `config_path`.
    pub config_toml: Option<String>,
    /// Highest-priority overrides, applied whichever config source is used.
    pub cli_overrides: Option<CliOverrides>,
}

impl UrpgRuntime {
    /// Build a runtime without registering it globally.
    pub fn new(opts: RuntimeOptions) -> ApiResult<Self> {
        let project_root = opts
            .project_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config = Self::resolve_config(&opts, &project_root)?;

        let storage = if opts.in_memory {
            CatalogStorageEngine::open_in_memory()?
        } else {
            let db_path = opts
                .db_path
                .clone()
                .unwrap_or_else(|| config.resolve_db_path(&project_root));
            CatalogStorageEngine::open(&db_path, config.storage.effective_read_pool_size())?
        };
        let storage = Arc::new(storage);

        let router = Self::build_router(Arc::clone(&storage) as Arc<dyn ICatalogStorage>, &config)?;

        let db = storage
            .path()
            .map_or_else(|| "<memory>".to_string(), |p| p.display().to_string());
        tracing::info!(db = %db, base_path = router.base_path(), "urpg runtime ready");

        Ok(Self {
            config,
            storage,
            router,
            project_root,
        })
    }

    fn resolve_config(opts: &RuntimeOptions, root: &Path) -> ApiResult<UrpgConfig> {
        let cli = opts.cli_overrides.as_ref();
        let config = match (&opts.config_toml, &opts.config_path) {
            (Some(toml_str), _) => UrpgConfig::from_toml(toml_str)?.with_overrides(cli)?,
            (None, Some(path)) => UrpgConfig::from_file_with_overrides(path, cli)?,
            (None, None) => UrpgConfig::load(root, cli)?,
        };
        Ok(config)
    }

    fn build_router(store: Arc<dyn ICatalogStorage>, config: &UrpgConfig) -> ApiResult<Router> {
        let species = SpeciesService::from_config(Arc::clone(&store), &config.catalog)?;
        let abilities = AbilityService::new(Arc::clone(&store));
        let attacks = AttackService::new(store);

        Ok(Router::new(Arc::new(species), Arc::new(abilities), Arc::new(attacks))
            .with_base_path(config.api.effective_base_path()))
    }
}

/// Build the global runtime. Fails if it is already initialized.
pub fn initialize(opts: RuntimeOptions) -> ApiResult<()> {
    let runtime = UrpgRuntime::new(opts)?;
    RUNTIME
        .set(Arc::new(runtime))
        .map_err(|_| ApiError::AlreadyInitialized)
}

/// The global runtime, or an error before `initialize()`.
pub fn get() -> ApiResult<Arc<UrpgRuntime>> {
    RUNTIME.get().cloned().ok_or(ApiError::RuntimeNotInitialized)
}

pub fn is_initialized() -> bool {
    RUNTIME.get().is_some()
}
