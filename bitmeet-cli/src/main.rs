use anyhow::{Context, Result};
use bitmeet::server::{DEFAULT_PORT, DEFAULT_WS_PATH, ServerConfig, serve};
use clap::{Parser, Subcommand};
use colored::*;
use std::net::{IpAddr, SocketAddr};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bitmeet")]
#[command(about = "Room coordination relay for calls, shared editors and whiteboards")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the WebSocket relay.
    Serve {
        #[arg(long, env = "BITMEET_HOST", default_value = "0.0.0.0")]
        host: IpAddr,

        #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
        port: u16,

        #[arg(long, env = "BITMEET_WS_PATH", default_value = DEFAULT_WS_PATH)]
        ws_path: String,

        /// Allowed CORS origin; repeat or comma-separate. Any origin when unset.
        #[arg(long, env = "BITMEET_ALLOWED_ORIGINS", value_delimiter = ',')]
        allowed_origin: Vec<String>,

        /// Log filter directive, e.g. `info` or `bitmeet_server=debug`.
        #[arg(long, env = "RUST_LOG", default_value = "info")]
        log: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            port,
            ws_path,
            allowed_origin,
            log,
        } => {
            init_tracing(&log)?;

            let config = ServerConfig {
                bind: SocketAddr::new(host, port),
                ws_path,
                allowed_origins: allowed_origin,
            };
            config.validate()?;

            println!("{}", "🚀 Starting BitMeet relay...".green().bold());
            println!("   🔌 WebSocket: ws://{}{}", config.bind, config.ws_path);
            if config.allowed_origins.is_empty() {
                println!("   🌐 Origins:   {}", "any".yellow());
            } else {
                println!("   🌐 Origins:   {}", config.allowed_origins.join(", "));
            }

            serve(config).await?;
            println!("{}", "✨ Relay stopped.".green().bold());
        }
    }

    Ok(())
}

fn init_tracing(directive: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directive)
        .with_context(|| format!("Invalid log filter `{directive}`"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {e}"))
}
