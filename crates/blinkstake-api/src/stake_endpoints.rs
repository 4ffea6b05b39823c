// crates/blinkstake-api/src/stake_endpoints.rs

//! Discovery and transaction endpoints for the stake action.

use std::str::FromStr;

use axum::{
    extract::{Host, Path, State},
    routing::get,
    Json, Router,
};
use solana_sdk::{native_token::sol_to_lamports, pubkey::Pubkey};

use crate::rest::AppState;
use crate::types::{
    ActionGetResponse, ActionLinks, ActionParameter, ActionPostRequest, ActionPostResponse,
    ApiError, LinkedAction,
};

/// Preset stake choices offered in the discovery document, in SOL.
/// Stable regardless of environment.
pub const STAKE_AMOUNT_SOL_OPTIONS: [f64; 3] = [1.0, 5.0, 10.0];

/// Amount staked when the POST path carries no amount, in SOL.
pub const DEFAULT_STAKE_AMOUNT_SOL: f64 = 1.0;

const AMOUNT_PARAMETER_NAME: &str = "amount";

struct StakeInfo {
    icon: String,
    title: String,
    description: String,
}

fn get_stake_info(base_url: &str) -> StakeInfo {
    StakeInfo {
        icon: format!("{}/static/Everstake.png", base_url.trim_end_matches('/')),
        title: "Stake SOL with Everstake, earn 7% APR".to_string(),
        description: "Everstake, the biggest staking provider in the blockchain industry, \
                      trusted by 735,000+ users!"
            .to_string(),
    }
}

/// Absolute base for icon links. The configured public URL wins; behind
/// nothing but a bare listener the request host is all there is.
fn base_url(state: &AppState, host: &str) -> String {
    state
        .config
        .public_base_url
        .clone()
        .unwrap_or_else(|| format!("http://{}", host))
}

pub fn create_stake_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(get_stake_action).post(post_stake_action_default),
        )
        .route(
            "/:amount",
            get(get_stake_action_with_amount).post(post_stake_action),
        )
}

/// Discovery document with the preset choices and the custom-amount input.
#[utoipa::path(
    get,
    path = "/api/everstake/stake",
    tag = "Stake",
    responses(
        (status = 200, description = "Stake action discovery document", body = ActionGetResponse)
    )
)]
pub async fn get_stake_action(
    State(state): State<AppState>,
    Host(host): Host,
) -> Json<ActionGetResponse> {
    let info = get_stake_info(&base_url(&state, &host));
    let prefix = &state.config.path_prefix;

    let mut actions: Vec<LinkedAction> = STAKE_AMOUNT_SOL_OPTIONS
        .iter()
        .map(|amount| LinkedAction {
            label: format!("{} SOL", amount),
            href: format!("{}/{}", prefix, amount),
            parameters: None,
        })
        .collect();
    actions.push(LinkedAction {
        label: "Stake".to_string(),
        href: format!("{}/{{{}}}", prefix, AMOUNT_PARAMETER_NAME),
        parameters: Some(vec![ActionParameter {
            name: AMOUNT_PARAMETER_NAME.to_string(),
            label: "Enter a custom SOL amount".to_string(),
        }]),
    });

    Json(ActionGetResponse {
        icon: info.icon,
        title: info.title,
        description: info.description,
        label: format!("{} SOL", DEFAULT_STAKE_AMOUNT_SOL),
        links: Some(ActionLinks { actions }),
    })
}

/// Discovery document labeled with the requested amount. The amount is
/// display-only here; nothing validates it until a POST.
#[utoipa::path(
    get,
    path = "/api/everstake/stake/{amount}",
    tag = "Stake",
    params(("amount" = String, Path, description = "Stake amount in SOL")),
    responses(
        (status = 200, description = "Stake action discovery document", body = ActionGetResponse)
    )
)]
pub async fn get_stake_action_with_amount(
    State(state): State<AppState>,
    Host(host): Host,
    Path(amount): Path<String>,
) -> Json<ActionGetResponse> {
    let info = get_stake_info(&base_url(&state, &host));

    Json(ActionGetResponse {
        icon: info.icon,
        title: info.title,
        description: info.description,
        label: format!("{} SOL", amount),
        links: None,
    })
}

/// Builds the partially signed stake transaction for the given amount.
#[utoipa::path(
    post,
    path = "/api/everstake/stake/{amount}",
    tag = "Stake",
    params(("amount" = String, Path, description = "Stake amount in SOL")),
    request_body = ActionPostRequest,
    responses(
        (status = 200, description = "base64-encoded partially signed transaction", body = ActionPostResponse),
        (status = 400, description = "Malformed account or amount", body = ActionError),
        (status = 502, description = "RPC node failure", body = ActionError),
    )
)]
pub async fn post_stake_action(
    State(state): State<AppState>,
    Path(amount): Path<String>,
    Json(request): Json<ActionPostRequest>,
) -> Result<Json<ActionPostResponse>, ApiError> {
    stake(&state, &amount, &request).await.map(Json)
}

/// Same as [`post_stake_action`] with the amount defaulted.
pub async fn post_stake_action_default(
    State(state): State<AppState>,
    Json(request): Json<ActionPostRequest>,
) -> Result<Json<ActionPostResponse>, ApiError> {
    let amount = DEFAULT_STAKE_AMOUNT_SOL.to_string();
    stake(&state, &amount, &request).await.map(Json)
}

async fn stake(
    state: &AppState,
    amount: &str,
    request: &ActionPostRequest,
) -> Result<ActionPostResponse, ApiError> {
    let sender = Pubkey::from_str(&request.account).map_err(|_| {
        ApiError::BadRequest(format!("invalid account public key: {}", request.account))
    })?;
    let lamports = parse_stake_lamports(amount)?;
    let vote_account = state.config.environment.validator_vote_account();

    let transaction =
        blinkstake_staking::prepare_stake_transaction(&state.rpc, &sender, &vote_account, lamports)
            .await?;
    let bytes = blinkstake_staking::serialize_transaction(&transaction)?;

    Ok(ActionPostResponse {
        transaction: base64::encode(bytes),
    })
}

/// Converts the path amount to lamports, rejecting anything that would
/// produce an invalid transaction.
fn parse_stake_lamports(amount: &str) -> Result<u64, ApiError> {
    let sol = amount
        .parse::<f64>()
        .map_err(|_| ApiError::BadRequest(format!("unparseable stake amount: {}", amount)))?;
    if !sol.is_finite() || sol < 0.0 {
        return Err(ApiError::BadRequest(format!(
            "stake amount must be a non-negative number: {}",
            amount
        )));
    }
    Ok(sol_to_lamports(sol))
}
