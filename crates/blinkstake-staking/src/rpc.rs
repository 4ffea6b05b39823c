// crates/blinkstake-staking/src/rpc.rs

use std::time::Duration;

use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use solana_sdk::hash::Hash;
use tracing::debug;

use crate::{Result, StakeError};

/// Bound on any single RPC round-trip. Expiry surfaces as a hard
/// [`StakeError::Rpc`], never a retry.
const RPC_TIMEOUT: Duration = Duration::from_secs(10);

/// Supported Solana RPC clusters
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Cluster {
    /// Mainnet Beta
    MainnetBeta,
    /// Testnet
    Testnet,
    /// Devnet
    Devnet,
    /// Localnet
    Localnet,
}

impl Cluster {
    /// Public RPC URL for the cluster
    pub fn url(&self) -> &'static str {
        match self {
            Cluster::MainnetBeta => "https://api.mainnet-beta.solana.com",
            Cluster::Testnet => "https://api.testnet.solana.com",
            Cluster::Devnet => "https://api.devnet.solana.com",
            Cluster::Localnet => "http://localhost:8899",
        }
    }
}

#[derive(Debug, Deserialize)]
struct RpcEnvelope<T> {
    result: Option<T>,
    error: Option<RpcErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorDetail {
    code: i64,
    message: String,
}

/// JSON-RPC client for the Solana node.
///
/// Speaks exactly the methods transaction assembly needs. Safe to share
/// across concurrent requests; holds no mutable state.
#[derive(Debug, Clone)]
pub struct SolanaRpcClient {
    /// HTTP client
    client: Client,
    /// RPC URL
    rpc_url: String,
}

impl SolanaRpcClient {
    /// Create a new client against the given RPC endpoint
    pub fn new(rpc_url: impl Into<String>) -> Self {
        let rpc_url = rpc_url.into();

        debug!("Initializing Solana RPC client for {}", rpc_url);

        Self {
            client: Client::new(),
            rpc_url,
        }
    }

    /// Minimum lamport balance that keeps an account of `space` bytes
    /// rent-exempt.
    pub async fn minimum_balance_for_rent_exemption(&self, space: usize) -> Result<u64> {
        self.call("getMinimumBalanceForRentExemption", serde_json::json!([space]))
            .await
    }

    /// Latest blockhash to compile a transaction against.
    pub async fn latest_blockhash(&self) -> Result<Hash> {
        #[derive(Debug, Deserialize)]
        struct BlockhashValue {
            blockhash: String,
        }

        #[derive(Debug, Deserialize)]
        struct WithContext {
            value: BlockhashValue,
        }

        let response: WithContext = self
            .call("getLatestBlockhash", serde_json::json!([]))
            .await?;
        response.value.blockhash.parse::<Hash>().map_err(|e| {
            StakeError::Rpc(format!(
                "invalid blockhash {}: {}",
                response.value.blockhash, e
            ))
        })
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<T> {
        let response = self
            .client
            .post(&self.rpc_url)
            .timeout(RPC_TIMEOUT)
            .json(&serde_json::json!({
                "jsonrpc": "2.0",
                "id": 1,
                "method": method,
                "params": params,
            }))
            .send()
            .await
            .map_err(|e| StakeError::Rpc(format!("{} request failed: {}", method, e)))?;

        let envelope: RpcEnvelope<T> = response
            .json()
            .await
            .map_err(|e| StakeError::Rpc(format!("{} returned a malformed payload: {}", method, e)))?;

        if let Some(error) = envelope.error {
            return Err(StakeError::Rpc(format!(
                "{} failed with code {}: {}",
                method, error.code, error.message
            )));
        }

        envelope
            .result
            .ok_or_else(|| StakeError::Rpc(format!("{} returned no result", method)))
    }
}
