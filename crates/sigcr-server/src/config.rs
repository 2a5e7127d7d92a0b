//! Server configuration.

use std::net::{IpAddr, SocketAddr};

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_filter() -> String {
    "info,sigcr=debug".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_filter: default_log_filter(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> ServerResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    ///
    /// `host` must be an IP address literal.
    pub fn from_toml(content: &str) -> ServerResult<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| ServerError::Config(e.to_string()))?;
        config.socket_addr()?;
        Ok(config)
    }

    /// Address to bind to.
    pub fn socket_addr(&self) -> ServerResult<SocketAddr> {
        let ip: IpAddr = self.host.parse().map_err(|_| {
            ServerError::Config(format!(
                "invalid host '{}': expected an IP address",
                self.host
            ))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_filter, "info,sigcr=debug");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ServerConfig::from_toml("port = 9090\n").unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.log_filter, "info,sigcr=debug");
    }

    #[test]
    fn test_invalid_toml() {
        let err = ServerConfig::from_toml("port = \"eighty\"").unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }

    #[test]
    fn test_invalid_host_rejected() {
        let err = ServerConfig::from_toml("host = \"not-an-ip\"").unwrap_err();
        assert!(matches!(err, ServerError::Config(ref msg) if msg.contains("not-an-ip")));

        let err = ServerConfig::from_toml("host = \"localhost\"").unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig::from_toml("host = \"127.0.0.1\"\nport = 9090\n").unwrap();
        assert_eq!(config.socket_addr().unwrap(), "127.0.0.1:9090".parse::<SocketAddr>().unwrap());

        let config = ServerConfig {
            host: "::1".to_string(),
            ..ServerConfig::default()
        };
        assert_eq!(config.socket_addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_socket_addr_rejects_bad_host() {
        let config = ServerConfig {
            host: "0.0.0.300".to_string(),
            ..ServerConfig::default()
        };
        assert!(matches!(config.socket_addr(), Err(ServerError::Config(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = ServerConfig::from_file("does/not/exist.toml").unwrap_err();
        assert!(matches!(err, ServerError::Io(_)));
    }
}
