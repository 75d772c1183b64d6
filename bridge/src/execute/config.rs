//! Configuration handlers: token registry, supported chains and the refund
//! cooldown.

use cosmwasm_std::{Deps, DepsMut, Response, Uint128};

use common::AssetInfo;

use crate::error::ContractError;
use crate::registry::set_other_chain_token;
use crate::state::{TokenConfig, CONFIG, MAX_REFUND_DELAY, REFUND_DELAY, SUPPORTED_CHAINS, TOKENS};

/// Reject identifiers that are neither the native denom nor a valid address.
fn validate_asset(deps: Deps, asset: &str) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    AssetInfo::from_identifier(deps.api, asset, &config.native_token)?;
    Ok(())
}

// ============================================================================
// Token Registry
// ============================================================================

/// Support `asset`, set its minimum and its identifier on `chain_id`.
/// Re-adding overwrites all three.
pub fn execute_add_token(
    deps: DepsMut,
    asset: String,
    asset_on_chain: String,
    chain_id: u64,
    min_amount: Uint128,
) -> Result<Response, ContractError> {
    validate_asset(deps.as_ref(), &asset)?;

    TOKENS.save(
        deps.storage,
        &asset,
        &TokenConfig {
            supported: true,
            min_amount,
        },
    )?;
    set_other_chain_token(deps.storage, &asset, chain_id, &asset_on_chain)?;

    Ok(Response::new()
        .add_attribute("method", "add_token")
        .add_attribute("asset", asset)
        .add_attribute("asset_on_chain", asset_on_chain)
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("min_amount", min_amount.to_string()))
}

/// Update the minimum only. An asset that was never added stays unsupported.
pub fn execute_set_min_amount_for_token(
    deps: DepsMut,
    asset: String,
    min_amount: Uint128,
) -> Result<Response, ContractError> {
    validate_asset(deps.as_ref(), &asset)?;

    let mut token = TOKENS
        .may_load(deps.storage, &asset)?
        .unwrap_or(TokenConfig {
            supported: false,
            min_amount: Uint128::zero(),
        });
    token.min_amount = min_amount;
    TOKENS.save(deps.storage, &asset, &token)?;

    Ok(Response::new()
        .add_attribute("method", "set_min_amount_for_token")
        .add_attribute("asset", asset)
        .add_attribute("min_amount", min_amount.to_string()))
}

pub fn execute_set_other_chain_token(
    deps: DepsMut,
    asset: String,
    asset_on_chain: String,
    chain_id: u64,
) -> Result<Response, ContractError> {
    validate_asset(deps.as_ref(), &asset)?;
    set_other_chain_token(deps.storage, &asset, chain_id, &asset_on_chain)?;

    Ok(Response::new()
        .add_attribute("method", "set_other_chain_token")
        .add_attribute("asset", asset)
        .add_attribute("asset_on_chain", asset_on_chain)
        .add_attribute("chain_id", chain_id.to_string()))
}

// ============================================================================
// Supported Chains
// ============================================================================

pub fn execute_add_supported_chain(
    deps: DepsMut,
    chain_id: u64,
) -> Result<Response, ContractError> {
    SUPPORTED_CHAINS.save(deps.storage, chain_id, &true)?;

    Ok(Response::new()
        .add_attribute("method", "add_supported_chain")
        .add_attribute("chain_id", chain_id.to_string()))
}

/// Existing deposits to the chain stay refundable.
pub fn execute_remove_supported_chain(
    deps: DepsMut,
    chain_id: u64,
) -> Result<Response, ContractError> {
    SUPPORTED_CHAINS.remove(deps.storage, chain_id);

    Ok(Response::new()
        .add_attribute("method", "remove_supported_chain")
        .add_attribute("chain_id", chain_id.to_string()))
}

// ============================================================================
// Refund Cooldown
// ============================================================================

/// Applies to existing deposits as well as new ones.
pub fn execute_set_time_to_wait_before_refund(
    deps: DepsMut,
    seconds: u64,
) -> Result<Response, ContractError> {
    if seconds > MAX_REFUND_DELAY {
        return Err(ContractError::MinTimeToWaitBeforeRefundIsTooBig { value: seconds });
    }

    let old_delay = REFUND_DELAY.load(deps.storage)?;
    REFUND_DELAY.save(deps.storage, &seconds)?;

    Ok(Response::new()
        .add_attribute("method", "set_time_to_wait_before_refund")
        .add_attribute("old_delay", old_delay.to_string())
        .add_attribute("new_delay", seconds.to_string()))
}
