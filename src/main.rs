use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use admin_grid::config::Config;
use admin_grid::console::load_records;
use admin_grid::logging::init_tracing;

#[derive(Parser, Debug)]
#[command(name = "admin-grid", version, about = "Terminal admin console for entity lists")]
struct Cli {
    /// Config file (defaults to the user config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Entity label, overriding `[screen].entity`
    #[arg(long)]
    entity: Option<String>,

    /// JSON array of records to manage
    #[arg(long)]
    data: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let path = cli.config.unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path)
        .with_context(|| format!("loading config from {}", path.display()))?;
    if let Some(entity) = cli.entity {
        config.screen.entity = entity;
    }

    let records = load_records(&cli.data)?;
    info!(count = records.len(), data = %cli.data.display(), "records loaded");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_time()
        .build()
        .context("starting async runtime")?;

    admin_grid::ui::run(&config, records, runtime.handle().clone())?;
    runtime.shutdown_timeout(std::time::Duration::from_millis(200));
    Ok(())
}
