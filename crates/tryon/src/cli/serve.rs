//! The `tryon serve` command.

use clap::Args;
use tryon_core::Config;

use crate::server;

/// Arguments for the `serve` command. Flags override `[server]` in the config.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Execute the serve command. Runs until Ctrl+C or SIGTERM.
pub async fn execute(args: ServeArgs, mut config: Config) -> anyhow::Result<()> {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    server::run(config).await
}
