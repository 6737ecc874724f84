use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agent_dashboard::{api, config::DashboardConfig, snapshot};

#[derive(Parser)]
#[command(name = "agentdash")]
#[command(about = "Live status dashboard for multi-agent workspaces")]
struct Cli {
    /// Path to a JSON config file (default: user config dir, then built-in agents)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the dashboard, regenerating data.json on every request
    Serve {
        /// Port for HTTP server
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Run one extraction pass and write the snapshot to disk
    Generate {
        /// Output file for the snapshot JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Initialize tracing to stderr so `generate` output stays clean on stdout
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "agent_dashboard=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<DashboardConfig> {
    match path {
        Some(path) => DashboardConfig::from_file(path),
        None => Ok(DashboardConfig::load()),
    }
}

async fn serve(config: DashboardConfig) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.bind, config.port);
    tracing::info!(
        "Starting dashboard for {} agents on port {}",
        config.agents.len(),
        config.port
    );

    let app = api::create_router(config);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Dashboard listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

fn generate(config: DashboardConfig) -> anyhow::Result<()> {
    let snapshot = snapshot::build_snapshot(&config.agents);
    snapshot::write_snapshot(&snapshot, &config.output)?;

    let file_name = config
        .output
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| config.output.display().to_string());
    println!(
        "✅ {} generated with {} agents",
        file_name,
        snapshot.agents.len()
    );
    for line in snapshot.summary_lines() {
        println!("   {}", line);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = load_config(cli.config.as_ref())?;

    match cli.command {
        Some(Commands::Generate { output }) => {
            if let Some(output) = output {
                config.output = output;
            }
            generate(config)?;
        }
        Some(Commands::Serve { port }) => {
            if let Some(port) = port {
                config.port = port;
            }
            serve(config).await?;
        }
        None => {
            // Default: start server
            serve(config).await?;
        }
    }

    Ok(())
}
