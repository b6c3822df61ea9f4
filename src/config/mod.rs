pub mod toml_config;

use crate::core::pantry::DEFAULT_REMOVAL_DELAY;
use crate::core::form::DEFAULT_QUANTITY;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;
use toml_config::TomlConfig;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "mypantry")]
#[command(about = "A small pantry tracker served as a single web page")]
pub struct CliConfig {
    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Address to listen on
    #[arg(long)]
    pub address: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Delay before a removed item disappears, in milliseconds
    #[arg(long)]
    pub removal_delay_ms: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

/// Fully resolved settings: defaults, then the TOML file, then `PORT`,
/// then command line flags.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub address: IpAddr,
    pub port: u16,
    pub removal_delay: Duration,
    pub default_quantity: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            removal_delay: DEFAULT_REMOVAL_DELAY,
            default_quantity: DEFAULT_QUANTITY,
        }
    }
}

impl AppConfig {
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                file
            }
            None => TomlConfig::default(),
        };

        Self::merge(cli, &file)
    }

    pub fn merge(cli: &CliConfig, file: &TomlConfig) -> Result<Self> {
        cli.validate()?;
        let defaults = Self::default();

        let address = match cli.address.as_deref().or(file.address()) {
            Some(address) => validation::validate_address("address", address)?,
            None => defaults.address,
        };
        let delay_ms = cli.removal_delay_ms.or(file.removal_delay_ms());

        Ok(Self {
            address,
            port: cli.port.or(file.port()).unwrap_or(defaults.port),
            removal_delay: delay_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.removal_delay),
            default_quantity: file.default_quantity().unwrap_or(defaults.default_quantity),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(ConfigProvider::address(self), ConfigProvider::port(self))
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(port) = self.port {
            validation::validate_positive_number("port", u64::from(port), 1)?;
        }
        if let Some(delay) = self.removal_delay_ms {
            validation::validate_range("removal_delay_ms", delay, 1, 60_000)?;
        }
        Ok(())
    }
}

impl ConfigProvider for AppConfig {
    fn address(&self) -> IpAddr {
        self.address
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn removal_delay(&self) -> Duration {
        self.removal_delay
    }

    fn default_quantity(&self) -> f64 {
        self.default_quantity
    }
}
