use std::path::PathBuf;

use clap::Parser;

/// Werewolf API gateway
#[derive(Debug, Parser)]
#[command(name = "werewolf", about = "Backend API gateway for the werewolf game")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "werewolf.toml", env = "WEREWOLF_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "WEREWOLF_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
