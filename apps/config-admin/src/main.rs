use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use config_admin::{AdminConfig, Command, run_command};
use config_core::ConfigCore;
use config_core::config::core_config::{self, AppConfig};
use sql_data_provider::DataLayer;
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    config: Option<Vec<PathBuf>>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config_files = cli.config.unwrap_or_default();
    config_files.insert(0, "config/config.yml".into());

    let app_config: AppConfig<AdminConfig> = core_config::AppConfig::from_files(&config_files)?;

    initialize_tracing(&app_config.app)?;

    let data_layer = DataLayer::create(&app_config.app.database_url).await?;
    let core = ConfigCore::new(Arc::new(data_layer), app_config.core);

    for line in run_command(&core, cli.command).await? {
        println!("{line}");
    }

    Ok(())
}

fn initialize_tracing(config: &AdminConfig) -> anyhow::Result<()> {
    // Create a filter based on the log level
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().or_else(|_| {
        tracing_subscriber::EnvFilter::try_new(config.trace_level.as_deref().unwrap_or("info"))
    })?;

    let tracing_layer = tracing_subscriber::registry().with(filter);

    if config.trace_json.unwrap_or_default() {
        tracing_layer
            .with(tracing_subscriber::fmt::layer().json().flatten_event(true))
            .try_init()?;
    } else {
        tracing_layer.with(tracing_subscriber::fmt::layer()).try_init()?;
    };

    Ok(())
}
