//! Stake transaction assembly for the blinkstake action service.
//!
//! Builds the partially signed create-and-delegate transaction that a
//! wallet countersigns client-side, talking to the Solana node over
//! plain JSON-RPC.

pub mod builder;
pub mod rpc;

use thiserror::Error;

/// Errors that can occur while preparing a stake transaction
#[derive(Error, Debug)]
pub enum StakeError {
    #[error("Invalid stake amount: {0}")]
    InvalidStakeAmount(String),

    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("Signing failed: {0}")]
    Signing(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, StakeError>;

pub use builder::{prepare_stake_transaction, serialize_transaction};
pub use rpc::{Cluster, SolanaRpcClient};
