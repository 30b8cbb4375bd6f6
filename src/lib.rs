//! Crypto Bill Pay terminal client.

pub mod cli;

use std::sync::Arc;

use anyhow::Context;
use cb_app::AppPaths;
use cb_core::ports::AppDirsPort;
use cb_platform::DirsAppDirsAdapter;
use cb_shell::bootstrap::{create_runtime, resolve_config, tracing::init_tracing_subscriber};
use cb_shell::render;
use cb_shell::{commands, AppRuntime, BootstrapError, Repl, StorageMode};
use tracing::info;

pub use cli::{Cli, Commands};

fn app_paths() -> Result<AppPaths, BootstrapError> {
    let dirs = DirsAppDirsAdapter::new().get_app_dirs()?;
    Ok(AppPaths::from_app_dirs(&dirs))
}

/// Run the client described by `cli` to completion.
pub fn run(cli: Cli) -> anyhow::Result<()> {
    // A missing .env file is normal.
    let _ = dotenvy::dotenv();

    let paths = app_paths()?;
    if cli.command() == Commands::Paths {
        println!("config:  {}", paths.config_path.display());
        println!("storage: {}", paths.storage_path.display());
        println!("logs:    {}", paths.logs_dir.display());
        return Ok(());
    }

    init_tracing_subscriber(Some(&paths.logs_dir), cli.verbose)?;

    let config = resolve_config(&paths, cli.config.as_deref(), |key| std::env::var(key).ok())?;
    let mode = if cli.ephemeral {
        StorageMode::Ephemeral
    } else {
        StorageMode::File
    };
    let runtime = Arc::new(create_runtime(config, mode)?);

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build async runtime")?
        .block_on(drive(runtime, cli.command()))
}

async fn drive(runtime: Arc<AppRuntime>, command: Commands) -> anyhow::Result<()> {
    runtime.start().await?;
    let result = match command {
        Commands::Status { json } => print_status(&runtime, json).await,
        Commands::Run | Commands::Paths => {
            let mut repl = Repl::new(runtime.clone());
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            repl.run(stdin, tokio::io::stdout()).await
        }
    };
    runtime.shutdown().await;
    info!("exiting");
    result
}

async fn print_status(runtime: &AppRuntime, json: bool) -> anyhow::Result<()> {
    let status = commands::status(runtime).await;
    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("screen: {}", render::decision_label(&status.decision));
        println!("route:  {}", status.route);
    }
    Ok(())
}
