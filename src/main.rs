use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use std::path::PathBuf;

mod badge;
mod config;
mod scrape;
mod stats;
mod sync;
mod telemetry;
mod util;

#[derive(Parser)]
#[command(name = "badges", about = "Profile badge sync CLI")]
struct Cli {
    /// Path to the README whose badges get patched
    #[arg(global = true, long)]
    readme: Option<PathBuf>,
    /// Emit a single JSON envelope to stdout; logs go to stderr
    #[arg(global = true, long, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Sync(sync::SyncCmd),
    Stats(stats::StatsCmd),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    telemetry::config::set_json_mode(cli.json);

    // initialize logging/tracing (stderr). Respect RUST_LOG and BADGES_LOG_FORMAT
    telemetry::config::init_tracing();

    let cfg = config::Config::load(cli.readme);

    match cli.command {
        Commands::Sync(args) => sync::run(&cfg, args).await?,
        Commands::Stats(args) => stats::run(&cfg, args).await?,
    }

    Ok(())
}
