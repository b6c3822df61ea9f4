use crate::utils::error::{PantryError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: Option<ServerSection>,
    pub pantry: Option<PantrySection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub address: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PantrySection {
    pub removal_delay_ms: Option<u64>,
    pub default_quantity: Option<f64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PantryError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${PORT})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PantryError::ConfigError {
            message: format!("env placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn address(&self) -> Option<&str> {
        self.server.as_ref().and_then(|s| s.address.as_deref())
    }

    pub fn port(&self) -> Option<u16> {
        self.server.as_ref().and_then(|s| s.port)
    }

    pub fn removal_delay_ms(&self) -> Option<u64> {
        self.pantry.as_ref().and_then(|p| p.removal_delay_ms)
    }

    pub fn default_quantity(&self) -> Option<f64> {
        self.pantry.as_ref().and_then(|p| p.default_quantity)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(address) = self.address() {
            crate::utils::validation::validate_address("server.address", address)?;
        }
        if let Some(port) = self.port() {
            crate::utils::validation::validate_positive_number("server.port", u64::from(port), 1)?;
        }
        if let Some(delay) = self.removal_delay_ms() {
            crate::utils::validation::validate_range("pantry.removal_delay_ms", delay, 1, 60_000)?;
        }
        if let Some(quantity) = self.default_quantity() {
            crate::utils::validation::validate_positive_finite("pantry.default_quantity", quantity)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[server]
address = "127.0.0.1"
port = 3000

[pantry]
removal_delay_ms = 500
default_quantity = 2.0
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.address(), Some("127.0.0.1"));
        assert_eq!(config.port(), Some(3000));
        assert_eq!(config.removal_delay_ms(), Some(500));
        assert_eq!(config.default_quantity(), Some(2.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sections_are_optional() {
        let config = TomlConfig::from_toml_str("[server]\nport = 9000\n").unwrap();

        assert_eq!(config.port(), Some(9000));
        assert_eq!(config.address(), None);
        assert_eq!(config.removal_delay_ms(), None);
        assert!(TomlConfig::from_toml_str("").unwrap().validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("MYPANTRY_TEST_PORT", "4321");

        let config = TomlConfig::from_toml_str("[server]\nport = ${MYPANTRY_TEST_PORT}\n").unwrap();
        assert_eq!(config.port(), Some(4321));

        std::env::remove_var("MYPANTRY_TEST_PORT");
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let err = TomlConfig::from_toml_str("[server\nport = 1").unwrap_err();
        assert!(matches!(err, PantryError::TomlError(_)));
    }

    #[test]
    fn test_config_validation() {
        let zero_delay = TomlConfig::from_toml_str("[pantry]\nremoval_delay_ms = 0\n").unwrap();
        assert!(zero_delay.validate().is_err());

        let bad_address = TomlConfig::from_toml_str("[server]\naddress = \"nowhere\"\n").unwrap();
        assert!(bad_address.validate().is_err());

        let negative = TomlConfig::from_toml_str("[pantry]\ndefault_quantity = -1.0\n").unwrap();
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\nport = 8181\n[pantry]\nremoval_delay_ms = 250\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.port(), Some(8181));
        assert_eq!(config.removal_delay_ms(), Some(250));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TomlConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, PantryError::IoError(_)));
    }
}
