use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use blinkstake_staking::StakeError;

/// Action discovery document returned by the GET endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ActionGetResponse {
    /// Absolute URL of the icon the wallet renders
    pub icon: String,
    pub title: String,
    pub description: String,
    /// Button label, e.g. "1 SOL"
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<ActionLinks>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ActionLinks {
    pub actions: Vec<LinkedAction>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LinkedAction {
    pub label: String,
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ActionParameter>>,
}

/// Descriptor for a templated value in a link href.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ActionParameter {
    pub name: String,
    pub label: String,
}

/// POST body: the sender's wallet address.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ActionPostRequest {
    /// base58-encoded public key of the staking wallet
    pub account: String,
}

/// POST response: the base64-encoded serialized transaction, partially
/// signed, awaiting the sender's wallet signature.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ActionPostResponse {
    pub transaction: String,
}

/// Error envelope for every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ActionError {
    pub message: String,
}

/// API error types
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Upstream RPC failure: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ActionError {
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<StakeError> for ApiError {
    fn from(err: StakeError) -> Self {
        match err {
            StakeError::InvalidStakeAmount(msg) => ApiError::BadRequest(msg),
            StakeError::Rpc(msg) => ApiError::Upstream(msg),
            StakeError::Signing(msg) | StakeError::Serialization(msg) => ApiError::Internal(msg),
        }
    }
}

/// Status response format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Service name
    pub name: String,
    /// Service version
    pub version: String,
    /// Service uptime in seconds
    pub uptime: u64,
    /// Current time in ISO 8601 format
    pub timestamp: String,
}

/// Health check response format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub uptime: u64,
}

/// Health status enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}
