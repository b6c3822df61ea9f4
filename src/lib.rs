pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use config::{AppConfig, CliConfig};
pub use crate::core::{classifier::classify, pantry::Pantry, state::PantryState};
pub use server::Server;
pub use utils::error::{PantryError, Result};
