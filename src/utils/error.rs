use thiserror::Error;

#[derive(Error, Debug)]
pub enum PantryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to bind {address}: {source}")]
    BindError {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

impl PantryError {
    /// 給使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            PantryError::IoError(_) => "Could not read a required file".to_string(),
            PantryError::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            PantryError::ConfigError { message } => format!("Configuration problem: {}", message),
            PantryError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            PantryError::BindError { address, .. } => {
                format!("Could not listen on {}", address)
            }
            PantryError::ServerError { .. } => "The page server stopped unexpectedly".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PantryError::IoError(_) => "Check that the --config path exists and is readable",
            PantryError::TomlError(_) | PantryError::ConfigError { .. } => {
                "Only [server] address/port and [pantry] removal_delay_ms/default_quantity are read"
            }
            PantryError::InvalidConfigValueError { .. } => {
                "Fix the value or remove it to fall back to the default"
            }
            PantryError::BindError { .. } => "Pick another port with --port or the PORT variable",
            PantryError::ServerError { .. } => "Re-run with --verbose for details",
        }
    }
}

pub type Result<T> = std::result::Result<T, PantryError>;
