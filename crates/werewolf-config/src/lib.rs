#![allow(clippy::must_use_candidate)]

pub mod health;
mod loader;
pub mod rooms;
pub mod server;

use serde::Deserialize;

pub use health::*;
pub use rooms::*;
pub use server::*;

/// Top-level werewolf gateway configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Room lifecycle configuration
    #[serde(default)]
    pub rooms: RoomsConfig,
}
