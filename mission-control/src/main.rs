//! Mission control for the Mars rover simulator.
//!
//! One binary, two operator surfaces over the same deployment engine: a
//! REST endpoint (`serve`) and an interactive console (`console`). Both
//! keep a single occupancy grid alive for the lifetime of the process, so
//! every settled rover stays visible to later deployments.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod console;
mod server;

/// Mission control CLI.
#[derive(Parser)]
#[command(name = "mission-control")]
#[command(about = "Operator front ends for the Mars rover simulator", long_about = None)]
#[command(version)]
struct Cli {
    /// Log level used when RUST_LOG is not set.
    #[arg(long, env = "MISSION_CONTROL_LOG", default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand)]
enum Mode {
    /// Serve the REST deployment endpoint.
    Serve {
        /// Listen address.
        #[arg(
            short,
            long,
            env = "MISSION_CONTROL_LISTEN",
            default_value = "127.0.0.1:8080"
        )]
        listen: String,
    },
    /// Read deployments line by line from stdin.
    Console,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| cli.log_level.clone().into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.mode {
        Mode::Serve { listen } => {
            let addr = listen.parse()?;
            tokio::runtime::Runtime::new()?.block_on(server::serve(addr))?;
        }
        Mode::Console => console::run()?,
    }
    Ok(())
}
