//! # CLI Layer
//!
//! One possible UI client for tankobon. This layer is the only place that knows about
//! stdout, stderr and exit codes.
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: shell arguments into a [`Cli`] via clap
//! 2. **Option Layering**: defaults, then the config file, then the command line
//! 3. **Logging**: install the `tracing` subscriber selected by `--log`
//! 4. **API Dispatch**: run the selected work mode through `TankobonApi`
//! 5. **Output Formatting**: print the report, the moves and the messages

use super::render::{print_messages, print_moves, print_report};
use super::setup::Cli;
use clap::Parser;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tankobon::api::{CmdMessage, TankobonApi};
use tankobon::config::{LogLevel, Options, Settings, WorkMode};
use tankobon::error::{Result, TankobonError};
use tankobon::store::fs::FsStore;
use tracing::debug;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const CONFIG_DIR_ENV: &str = "TANKOBON_CONFIG_DIR";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let opts = init_options(&cli)?;
    init_tracing(opts.log);
    debug!("Options: {:?}", opts);

    if let Some(target) = &cli.store {
        let path = store_settings(&opts, target.as_deref())?;
        print_messages(&[CmdMessage::success(format!(
            "Settings saved to {}",
            path.display()
        ))]);
    }

    let mut api = TankobonApi::new(FsStore::new());
    let result = api.run(&opts)?;
    match opts.action {
        WorkMode::Report => print_report(&result.report),
        WorkMode::DryRun => print_moves(&result.moves),
        WorkMode::Enable => {}
    }
    print_messages(&result.messages);
    Ok(())
}

fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("org", "tankobon", "tankobon").map(|dirs| dirs.config_dir().to_path_buf())
}

fn init_options(cli: &Cli) -> Result<Options> {
    let file_layer = match (&cli.config, config_dir()) {
        (Some(file), _) => Settings::load_file(file)?,
        (None, Some(dir)) => Settings::load(dir)?,
        (None, None) => Settings::default(),
    };
    let settings = file_layer.merge(cli.settings());

    let mut opts = Options::new(cli.name.clone(), resolve_root(&cli.root)?);
    settings.apply(&mut opts);
    Ok(opts)
}

fn resolve_root(root: &Path) -> Result<PathBuf> {
    let resolved = root.canonicalize().map_err(|e| {
        TankobonError::Config(format!("cannot open {}: {}", root.display(), e))
    })?;
    if !resolved.is_dir() {
        return Err(TankobonError::Config(format!(
            "not a directory: {}",
            resolved.display()
        )));
    }
    Ok(resolved)
}

fn store_settings(opts: &Options, file: Option<&Path>) -> Result<PathBuf> {
    let settings = Settings::capture(opts);
    match file {
        Some(file) => {
            settings.save_file(file)?;
            Ok(file.to_path_buf())
        }
        None => {
            let dir = config_dir().ok_or_else(|| {
                TankobonError::Config("no configuration directory available".to_string())
            })?;
            settings.save(dir)
        }
    }
}

fn init_tracing(log: LogLevel) {
    let level = match log {
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Quiet => LevelFilter::OFF,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .finish();

    // Ignore error if already set
    let _ = tracing::subscriber::set_global_default(subscriber);
}
