//! Swap extension: router setup, custom paths, and the swap-augmented
//! transfers.
//!
//! `SendWithSwap` only records what the recipient wants on the other side.
//! The swap itself happens on release, in `WithdrawWithSwap`, where the
//! router pays the recipient directly.

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, StdResult, Storage, Uint128};

use common::{swap_msg, AssetInfo};

use crate::error::ContractError;
use crate::nonce;
use crate::registry::{ensure_chain_supported, ensure_token_supported};
use crate::state::{SwapIntent, CONFIG, SWAP_PATHS, SWAP_ROUTER};
use crate::transfer::{ensure_nonzero, resolve_asset};

use super::outgoing::lock_deposit;

// ============================================================================
// Paths
// ============================================================================

/// Path used when no custom path is registered: direct when either side is
/// the native asset, otherwise routed through it.
pub fn default_path(native_token: &str, asset_in: &str, asset_out: &str) -> Vec<String> {
    if asset_in == native_token || asset_out == native_token {
        vec![asset_in.to_string(), asset_out.to_string()]
    } else {
        vec![
            asset_in.to_string(),
            native_token.to_string(),
            asset_out.to_string(),
        ]
    }
}

/// Path for a pair and whether it is a registered custom path.
pub fn resolve_path(
    storage: &dyn Storage,
    native_token: &str,
    asset_in: &str,
    asset_out: &str,
) -> StdResult<(Vec<String>, bool)> {
    Ok(match SWAP_PATHS.may_load(storage, (asset_in, asset_out))? {
        Some(path) => (path, true),
        None => (default_path(native_token, asset_in, asset_out), false),
    })
}

fn invalid_path(reason: &str) -> ContractError {
    ContractError::InvalidSwapPath {
        reason: reason.to_string(),
    }
}

fn validate_path(asset_in: &str, asset_out: &str, path: &[String]) -> Result<(), ContractError> {
    if path.len() < 2 {
        return Err(invalid_path("path needs at least two assets"));
    }
    if path.first().map(String::as_str) != Some(asset_in) {
        return Err(invalid_path("path must start with the input asset"));
    }
    if path.last().map(String::as_str) != Some(asset_out) {
        return Err(invalid_path("path must end with the output asset"));
    }
    if path.windows(2).any(|hop| hop[0] == hop[1]) {
        return Err(invalid_path("path repeats an asset in consecutive hops"));
    }
    Ok(())
}

// ============================================================================
// Configuration
// ============================================================================

/// Set the router once.
pub fn execute_initialize_swap_router(
    deps: DepsMut,
    router: String,
) -> Result<Response, ContractError> {
    if SWAP_ROUTER.may_load(deps.storage)?.is_some() {
        return Err(ContractError::AlreadyInitialized);
    }

    let router_addr = deps.api.addr_validate(&router)?;
    SWAP_ROUTER.save(deps.storage, &router_addr)?;

    Ok(Response::new()
        .add_attribute("method", "initialize_swap_router")
        .add_attribute("router", router_addr))
}

/// Register or (with an empty path) remove a custom path for a pair.
pub fn execute_set_path_for_token_to_token(
    deps: DepsMut,
    asset_in: String,
    asset_out: String,
    path: Vec<String>,
) -> Result<Response, ContractError> {
    if path.is_empty() {
        SWAP_PATHS.remove(deps.storage, (asset_in.as_str(), asset_out.as_str()));
        return Ok(Response::new()
            .add_attribute("method", "set_path_for_token_to_token")
            .add_attribute("asset_in", asset_in)
            .add_attribute("asset_out", asset_out)
            .add_attribute("path", ""));
    }

    validate_path(&asset_in, &asset_out, &path)?;
    let config = CONFIG.load(deps.storage)?;
    for hop in &path {
        AssetInfo::from_identifier(deps.api, hop, &config.native_token)?;
    }
    SWAP_PATHS.save(deps.storage, (asset_in.as_str(), asset_out.as_str()), &path)?;

    Ok(Response::new()
        .add_attribute("method", "set_path_for_token_to_token")
        .add_attribute("asset_in", asset_in)
        .add_attribute("asset_out", asset_out)
        .add_attribute("path", path.join(",")))
}

// ============================================================================
// Transfers
// ============================================================================

/// `Send` that also records the desired output asset, slippage floor and
/// deadline for the relayer.
#[allow(clippy::too_many_arguments)]
pub fn execute_send_with_swap(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    asset_in: String,
    asset_out: String,
    recipient: String,
    destination_chain_id: u64,
    amount_in: Uint128,
    min_amount_out: Uint128,
    deadline: u64,
) -> Result<Response, ContractError> {
    let intent = SwapIntent {
        asset_out: asset_out.clone(),
        min_amount_out,
        deadline,
    };
    let locked = lock_deposit(
        deps,
        &env,
        &info,
        &asset_in,
        &recipient,
        destination_chain_id,
        amount_in,
        Some(intent),
    )?;

    Ok(Response::new()
        .add_messages(locked.pull)
        .add_attribute("method", "send_with_swap")
        .add_attribute("asset_in", asset_in)
        .add_attribute("asset_out", asset_out)
        .add_attribute("recipient", recipient)
        .add_attribute("amount_in", amount_in.to_string())
        .add_attribute("min_amount_out", min_amount_out.to_string())
        .add_attribute("deadline", deadline.to_string())
        .add_attribute("nonce", locked.nonce.to_string())
        .add_attribute("destination_chain_id", destination_chain_id.to_string())
        .add_attribute("asset_on_chain", locked.asset_on_chain)
        .add_attribute("depositor", info.sender))
}

/// Swap `amount_in` of `asset_in` into `asset_out` through the router, with
/// the proceeds going straight to `recipient`.
///
/// The router enforces `min_amount_out` and `deadline`; its failure reverts
/// the whole call, including the nonce mark.
#[allow(clippy::too_many_arguments)]
pub fn execute_withdraw_with_swap(
    deps: DepsMut,
    asset_in: String,
    asset_out: String,
    recipient: String,
    amount_in: Uint128,
    min_amount_out: Uint128,
    source_chain_id: u64,
    nonce: u64,
    deadline: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    ensure_chain_supported(deps.storage, source_chain_id)?;
    ensure_token_supported(deps.storage, &asset_in)?;
    ensure_token_supported(deps.storage, &asset_out)?;
    let router = SWAP_ROUTER
        .may_load(deps.storage)?
        .ok_or(ContractError::SwapRouterNotInitialized)?;
    ensure_nonzero(amount_in)?;
    nonce::consume_incoming(deps.storage, nonce)?;

    if asset_in == asset_out {
        return Err(invalid_path("input and output assets are the same"));
    }

    let recipient_addr = deps.api.addr_validate(&recipient)?;
    let offer = resolve_asset(deps.api, &config, &asset_in, amount_in)?;
    let (path, _) = resolve_path(deps.storage, &config.native_token, &asset_in, &asset_out)?;

    let swap = swap_msg(
        &router,
        &offer,
        min_amount_out,
        path.clone(),
        &recipient_addr,
        deadline,
    )?;

    Ok(Response::new()
        .add_message(swap)
        .add_attribute("method", "withdraw_with_swap")
        .add_attribute("asset_in", asset_in)
        .add_attribute("asset_out", asset_out)
        .add_attribute("recipient", recipient)
        .add_attribute("amount_in", amount_in.to_string())
        .add_attribute("min_amount_out", min_amount_out.to_string())
        .add_attribute("source_chain_id", source_chain_id.to_string())
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("deadline", deadline.to_string())
        .add_attribute("path", path.join(",")))
}
