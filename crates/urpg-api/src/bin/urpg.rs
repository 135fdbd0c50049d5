//! `urpg`: run one GET request through the catalog router.
//!
//! ```text
//! urpg [--db PATH] [--config PATH] [--root DIR] <PATH>
//! urpg /pokemon/Pikachu
//! urpg --db dex.db /pokemon/dex/25
//! ```
//!
//! Exit code: 0 on 2xx, 1 on any other status, 2 on usage errors.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use urpg_api::runtime::{self, RuntimeOptions};
use urpg_core::config::CliOverrides;
use urpg_core::errors::UrpgErrorCode;

#[derive(Parser)]
#[command(name = "urpg", version, about = "Query the URPG species catalog")]
struct Cli {
    /// Request path, e.g. /pokemon/Pikachu
    path: String,

    /// Database file (overrides storage.db_path)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Config file to use instead of urpg.toml and the user config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Project root for urpg.toml and relative paths
    #[arg(long)]
    root: Option<PathBuf>,

    /// Catalog size override
    #[arg(long)]
    num_species: Option<i32>,

    /// Pretty-print the JSON body
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    urpg_core::tracing::init_tracing();
    let cli = Cli::parse();

    let opts = RuntimeOptions {
        project_root: cli.root,
        db_path: cli.db,
        config_path: cli.config,
        cli_overrides: Some(CliOverrides {
            num_species: cli.num_species,
            pretty_json: cli.pretty.then_some(true),
            ..Default::default()
        }),
        ..Default::default()
    };

    if let Err(e) = runtime::initialize(opts) {
        eprintln!("{}", e.coded_string());
        return ExitCode::FAILURE;
    }
    let rt = match runtime::get() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("{}", e.coded_string());
            return ExitCode::FAILURE;
        }
    };

    let response = rt.router.handle("GET", &cli.path);
    let pretty = cli.pretty || rt.config.api.effective_pretty_json();

    println!("{}", response.status);
    let body = response.body_string(pretty);
    if !body.is_empty() {
        println!("{body}");
    }

    if response.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
