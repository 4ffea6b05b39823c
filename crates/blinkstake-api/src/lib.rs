// src/lib.rs

//! blinkstake-api - HTTP surface for the stake action service
//!
//! Exposes the Solana Actions discovery and transaction endpoints plus
//! the static assets and OpenAPI documents describing them.

pub mod docs;
pub mod rest;
pub mod stake_endpoints;
pub mod static_endpoints;
pub mod types;

pub use rest::{create_router, ApiServer, AppState};
pub use types::{ActionGetResponse, ActionPostRequest, ActionPostResponse, ApiError};
