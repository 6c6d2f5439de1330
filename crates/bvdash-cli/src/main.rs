mod render;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bvdash_client::{DashboardClient, LoadState, Loader};
use bvdash_core::aggregate;

#[derive(Debug, Parser)]
#[command(name = "bvdash")]
#[command(about = "Beauty brand video analytics dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render the full dashboard (default).
    Dashboard,
    /// Print the derived KPI set as JSON.
    Kpis,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = bvdash_core::load_app_config()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    let cli = Cli::parse();

    let client = DashboardClient::new(&config)?;
    let mut loader = Loader::new(client);
    let data = match loader.load().await {
        LoadState::Ready(data) => data,
        LoadState::Failed(err) => anyhow::bail!("dashboard load failed: {err}"),
        LoadState::Idle | LoadState::Loading => {
            anyhow::bail!("load cycle ended without a terminal state")
        }
    };

    let kpis = aggregate(&data.brand_summaries, &data.videos);
    match cli.command {
        Some(Commands::Kpis) => println!("{}", serde_json::to_string_pretty(&kpis)?),
        Some(Commands::Dashboard) | None => print!(
            "{}",
            render::render_dashboard(&kpis, &data.brand_summaries, &data.videos, config.top_videos)
        ),
    }

    Ok(())
}
