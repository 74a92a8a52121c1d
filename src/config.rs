use std::net::SocketAddr;

use anyhow::{Context, Result};

pub const ADDR_ENV: &str = "BALANCE_LEDGER_ADDR";
pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let raw = lookup(ADDR_ENV).unwrap_or_else(|| DEFAULT_ADDR.to_owned());
        let addr = raw
            .parse()
            .with_context(|| format!("Invalid `{ADDR_ENV}` value `{raw}`"))?;
        Ok(Self { addr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_address() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.addr, DEFAULT_ADDR.parse().unwrap());
    }

    #[test]
    fn address_from_lookup() {
        let config =
            ServerConfig::from_lookup(|key| (key == ADDR_ENV).then(|| "127.0.0.1:8080".to_owned()))
                .unwrap();
        assert_eq!(config.addr.port(), 8080);
    }

    #[test]
    fn invalid_address() {
        let err = ServerConfig::from_lookup(|_| Some("not-an-addr".to_owned())).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid `BALANCE_LEDGER_ADDR` value `not-an-addr`"
        );
    }
}
