use super::AppConfig;
use crate::errors::Error;
use std::fs;
use std::path::Path;

use tracing::info;

/// Parses an application configuration from YAML text.
///
/// An empty document yields the default configuration.
pub fn parse_app_config(yaml_str: &str) -> Result<AppConfig, Error> {
    if yaml_str.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    Ok(serde_yaml::from_str(yaml_str)?)
}

/// Loads and parses an application configuration from a YAML file
///
/// # Arguments
///
/// * `file_path` - Path to the YAML configuration file
///
/// # Errors
///
/// Returns an error if:
/// * The file cannot be read
/// * The YAML content cannot be parsed into an AppConfig
pub fn load_app_config(file_path: impl AsRef<Path>) -> Result<AppConfig, Error> {
    let file_path = file_path.as_ref();
    let yaml_str = fs::read_to_string(file_path)?;
    let app_config = parse_app_config(&yaml_str)?;
    info!(
        path = %file_path.display(),
        address = %app_config.server.socket_addr(),
        "Loaded configuration"
    );
    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};

    #[test]
    fn parses_full_server_section() {
        let config = parse_app_config("server:\n  host: 127.0.0.1\n  port: 8080\n").unwrap();
        assert_eq!(config.server.host, IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = parse_app_config("server:\n  port: 7000\n").unwrap();
        assert_eq!(config.server.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(config.server.port, 7000);

        assert_eq!(parse_app_config("").unwrap(), AppConfig::default());
    }

    #[test]
    fn rejects_malformed_port() {
        let err = parse_app_config("server:\n  port: not-a-port\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_app_config("/nonexistent/bita-shop.yaml").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
