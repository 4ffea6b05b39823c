// crates/blinkstake-common/src/config.rs

//! Service configuration, read from the process environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use crate::errors::{Error, Result};

/// Vote account delegated to on production deployments.
pub const VALIDATOR_VOTE_ACCOUNT: Pubkey =
    solana_sdk::pubkey!("9QU2QSxhb24FUX3Tu2FpczXjpK3VYrvRudywSZaM29mF");

/// Vote account delegated to on development (devnet) deployments.
pub const VALIDATOR_VOTE_ACCOUNT_DEVNET: Pubkey =
    solana_sdk::pubkey!("FwR3PbjS5iyqzLiLugrBqKSa5EKZ4vK9SKs7eQXtT59f");

/// Deployment environment.
///
/// Selects the validator vote account and nothing else; the RPC endpoint
/// stays on its own override (`RPC_URL`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    Development,
}

impl Environment {
    /// Reads the `ENVIRONMENT` variable; anything other than `development`
    /// is treated as production.
    pub fn from_env() -> Self {
        match std::env::var("ENVIRONMENT") {
            Ok(value) if value.eq_ignore_ascii_case("development") => Environment::Development,
            _ => Environment::Production,
        }
    }

    /// The validator vote account staked to in this environment.
    pub fn validator_vote_account(&self) -> Pubkey {
        match self {
            Environment::Production => VALIDATOR_VOTE_ACCOUNT,
            Environment::Development => VALIDATOR_VOTE_ACCOUNT_DEVNET,
        }
    }
}

/// Top-level service configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Server bind address
    pub bind_addr: SocketAddr,
    /// Deployment environment
    pub environment: Environment,
    /// RPC endpoint override; the public mainnet-beta endpoint when unset
    pub rpc_url: Option<String>,
    /// Directory static assets are served from
    pub static_dir: PathBuf,
    /// Prefix the stake action router is nested under
    pub path_prefix: String,
    /// Absolute base URL used for icon links; the request host when unset
    pub public_base_url: Option<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".parse().expect("Valid default bind address"),
            environment: Environment::Production,
            rpc_url: None,
            static_dir: PathBuf::from("./static"),
            path_prefix: "/api/everstake/stake".to_string(),
            public_base_url: None,
        }
    }
}

impl ServiceConfig {
    /// Loads the configuration from the process environment.
    ///
    /// `API_PORT` only applies when `BIND_ADDR` does not spell out the full
    /// address.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let port = std::env::var("API_PORT").unwrap_or_else(|_| "3000".to_string());
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| format!("0.0.0.0:{}", port));
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| Error::Config(format!("invalid bind address {}: {}", bind_addr, e)))?;

        Ok(Self {
            bind_addr,
            environment: Environment::from_env(),
            rpc_url: std::env::var("RPC_URL").ok().filter(|v| !v.is_empty()),
            static_dir: std::env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            path_prefix: std::env::var("ACTION_PATH_PREFIX").unwrap_or(defaults.path_prefix),
            public_base_url: std::env::var("PUBLIC_BASE_URL").ok().filter(|v| !v.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_selects_only_the_validator() {
        assert_eq!(
            Environment::Production.validator_vote_account(),
            VALIDATOR_VOTE_ACCOUNT
        );
        assert_eq!(
            Environment::Development.validator_vote_account(),
            VALIDATOR_VOTE_ACCOUNT_DEVNET
        );
        assert_ne!(VALIDATOR_VOTE_ACCOUNT, VALIDATOR_VOTE_ACCOUNT_DEVNET);
    }

    #[test]
    fn defaults_match_the_public_deployment() {
        let config = ServiceConfig::default();
        assert_eq!(config.bind_addr.port(), 3000);
        assert_eq!(config.environment, Environment::Production);
        assert!(config.rpc_url.is_none());
        assert_eq!(config.path_prefix, "/api/everstake/stake");
        assert!(config.public_base_url.is_none());
    }

    // Single test mutating ENVIRONMENT so parallel test threads never race
    // on the process environment.
    #[test]
    fn environment_flag_parsing() {
        std::env::remove_var("ENVIRONMENT");
        assert_eq!(Environment::from_env(), Environment::Production);

        std::env::set_var("ENVIRONMENT", "development");
        assert_eq!(Environment::from_env(), Environment::Development);

        std::env::set_var("ENVIRONMENT", "Development");
        assert_eq!(Environment::from_env(), Environment::Development);

        std::env::set_var("ENVIRONMENT", "staging");
        assert_eq!(Environment::from_env(), Environment::Production);

        std::env::remove_var("ENVIRONMENT");
    }
}
