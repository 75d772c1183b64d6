//! Admin operations handlers.
//!
//! This module handles:
//! - Pause/unpause
//! - Emergency withdrawal (requires paused state)
//! - Role grants, revocations and renunciation

use cosmwasm_std::{DepsMut, Response, Uint128};

use crate::access::{self, AuthContext, Role};
use crate::error::ContractError;
use crate::state::CONFIG;
use crate::transfer::{ensure_nonzero, payout, resolve_asset};

// ============================================================================
// Pause/Unpause
// ============================================================================

/// Pause the contract (stops sends, withdrawals and refunds).
pub fn execute_pause(deps: DepsMut) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if config.paused {
        return Err(ContractError::Paused);
    }

    config.paused = true;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("method", "pause"))
}

/// Unpause the contract.
pub fn execute_unpause(deps: DepsMut) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if !config.paused {
        return Err(ContractError::NotPaused);
    }

    config.paused = false;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("method", "unpause"))
}

// ============================================================================
// Emergency Withdrawal
// ============================================================================

/// Move custody funds to `recipient`. Only reachable while paused.
///
/// Deposit records are not touched; refunds of drained deposits will fail at
/// the payout.
pub fn execute_emergency_withdraw(
    deps: DepsMut,
    asset: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_nonzero(amount)?;
    let config = CONFIG.load(deps.storage)?;
    let recipient_addr = deps.api.addr_validate(&recipient)?;
    let funds = resolve_asset(deps.api, &config, &asset, amount)?;

    Ok(Response::new()
        .add_submessage(payout(&funds, &recipient_addr)?)
        .add_attribute("method", "emergency_withdraw")
        .add_attribute("asset", asset)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount.to_string()))
}

// ============================================================================
// Roles
// ============================================================================

pub fn execute_grant_role(
    deps: DepsMut,
    role: Role,
    account: String,
) -> Result<Response, ContractError> {
    let account_addr = deps.api.addr_validate(&account)?;
    access::grant_role(deps.storage, role, &account_addr)?;

    Ok(Response::new()
        .add_attribute("method", "grant_role")
        .add_attribute("role", role.key())
        .add_attribute("account", account_addr))
}

pub fn execute_revoke_role(
    deps: DepsMut,
    role: Role,
    account: String,
) -> Result<Response, ContractError> {
    let account_addr = deps.api.addr_validate(&account)?;
    access::revoke_role(deps.storage, role, &account_addr)?;

    Ok(Response::new()
        .add_attribute("method", "revoke_role")
        .add_attribute("role", role.key())
        .add_attribute("account", account_addr))
}

/// Drop one of the caller's own roles.
pub fn execute_renounce_role(
    deps: DepsMut,
    auth: &AuthContext,
    role: Role,
) -> Result<Response, ContractError> {
    auth.require(role)?;
    access::revoke_role(deps.storage, role, &auth.sender)?;

    Ok(Response::new()
        .add_attribute("method", "renounce_role")
        .add_attribute("role", role.key())
        .add_attribute("account", auth.sender.as_str()))
}
