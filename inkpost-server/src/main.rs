//! inkpostd: the inkpost API server binary
//!
//! Usage:
//!   inkpostd                          # Serve on 0.0.0.0:5002
//!   inkpostd --bind 127.0.0.1:8080    # Custom bind address
//!   inkpostd --debug                  # Debug logging to console
//!   RUST_LOG=inkpost_server=debug inkpostd   # Fine-grained log control

use std::net::SocketAddr;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use inkpost_server::{run_server, ServerConfig};

/// In-memory blog post API server
#[derive(Parser, Debug)]
#[command(name = "inkpostd", version, about)]
struct Args {
    /// Address to bind to
    #[arg(short, long, env = "INKPOST_BIND", default_value = "0.0.0.0:5002")]
    bind: SocketAddr,

    /// Enable debug logging (sets RUST_LOG=debug if not already set)
    #[arg(long)]
    debug: bool,
}

fn init_tracing(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(args.debug)?;

    let config = ServerConfig {
        bind_addr: args.bind,
    };

    run_server(config).await.context("Server error")
}
