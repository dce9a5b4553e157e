mod snapshot;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use lotwatch_core::{DashboardController, Role, StatsClient};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lotwatch")]
#[command(about = "A terminal dashboard for the parking service", long_about = None)]
struct Cli {
    /// Base URL of the parking service
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    url: String,

    /// Session cookie of an authenticated login (e.g. "session=eyJf...")
    #[arg(long)]
    session: Option<String>,

    /// Dashboard role: admin or user
    #[arg(long, default_value = "admin")]
    role: String,

    /// Seconds between automatic refreshes
    #[arg(long, default_value_t = 30)]
    interval: u64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the live dashboard (default)
    Dashboard,
    /// Fetch the statistics once and print them as tables
    Snapshot,
}

fn parse_role(role_str: &str) -> Role {
    match role_str.to_lowercase().as_str() {
        "user" | "u" => Role::User,
        _ => Role::Admin,
    }
}

fn init_logging() -> Result<()> {
    // The TUI owns stdout, so logs go to a file next to the binary.
    let log_file = std::fs::File::create("lotwatch.log").context("failed to create lotwatch.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(log_file)
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    let mut client = StatsClient::new(cli.url.trim_end_matches('/'));
    if let Some(session) = cli.session {
        client = client.with_session(session);
    }
    let controller = DashboardController::new(client, parse_role(&cli.role));
    tracing::info!(
        url = %cli.url,
        role = controller.role().as_str(),
        interval = cli.interval,
        "starting lotwatch"
    );

    match cli.command {
        Some(Commands::Snapshot) => snapshot::run(&controller).await,
        Some(Commands::Dashboard) | None => tui::run(controller, cli.interval).await,
    }
}
