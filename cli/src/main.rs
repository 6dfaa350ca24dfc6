use std::net::{IpAddr, Ipv4Addr};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use server::{ServerOpts, run};

/// Leave Planner API
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Start the HTTP server.
    Server {
        /// Address to bind.
        /// Example: `0.0.0.0` inside a container, `127.0.0.1` locally
        #[arg(long, env = "LEAVE_PLANNER_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
        host: IpAddr,

        /// The port number on which the server will listen for incoming connections.
        /// Example: `8080`
        #[arg(long, env = "LEAVE_PLANNER_PORT", default_value_t = 8000)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    match Args::parse().cmd {
        Command::Server { host, port } => {
            tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting leave planner");

            run(ServerOpts { host, port })
                .await
                .inspect_err(|e| tracing::error!("server stopped :: {:?}", e))
                .context("leave planner server")
        }
    }
}
