//! Refund of deposits the relayer never released, and the relayer's block
//! on such refunds.

use cosmwasm_std::{DepsMut, Env, Response, Storage};

use crate::access::AuthContext;
use crate::error::ContractError;
use crate::state::{Deposit, CONFIG, DEPOSITS, REFUND_DELAY};
use crate::transfer::{payout, resolve_asset};

fn load_open_deposit(storage: &dyn Storage, nonce: u64) -> Result<Deposit, ContractError> {
    let deposit = DEPOSITS
        .may_load(storage, nonce)?
        .ok_or(ContractError::DepositNotFound { nonce })?;
    if deposit.refunded {
        return Err(ContractError::AlreadyRefunded { nonce });
    }
    Ok(deposit)
}

/// Return deposit `nonce` to its depositor.
///
/// The deposit is loaded before the caller is checked: an unknown nonce is
/// `DepositNotFound` for every caller, a refunded one `AlreadyRefunded`.
/// Admins skip the block and the cooldown. Relayers and the depositor are
/// subject to both.
pub fn execute_refund(
    deps: DepsMut,
    env: Env,
    auth: &AuthContext,
    nonce: u64,
) -> Result<Response, ContractError> {
    let mut deposit = load_open_deposit(deps.storage, nonce)?;

    let is_depositor = auth.sender == deposit.depositor;
    if !(auth.is_admin || auth.is_relayer || is_depositor) {
        return Err(ContractError::OnlyRelayerOrCreatorCanRefund { nonce });
    }

    if !auth.is_admin {
        if deposit.refund_blocked {
            return Err(ContractError::RefundIsBlocked { nonce });
        }
        let delay = REFUND_DELAY.load(deps.storage)?;
        let refundable_at = deposit.deposited_at.plus_seconds(delay);
        if env.block.time < refundable_at {
            return Err(ContractError::MinTimeToRefundIsNotReached {
                remaining_seconds: refundable_at.seconds() - env.block.time.seconds(),
            });
        }
    }

    deposit.refunded = true;
    DEPOSITS.save(deps.storage, nonce, &deposit)?;

    let config = CONFIG.load(deps.storage)?;
    let refund = resolve_asset(deps.api, &config, &deposit.asset, deposit.amount)?;

    Ok(Response::new()
        .add_submessage(payout(&refund, &deposit.depositor)?)
        .add_attribute("method", "refund")
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("depositor", deposit.depositor)
        .add_attribute("asset", deposit.asset)
        .add_attribute("amount", deposit.amount.to_string())
        .add_attribute("caller", auth.sender.as_str()))
}

/// Mark deposit `nonce` as claimed for release so only an admin can refund it.
pub fn execute_block_refund(deps: DepsMut, nonce: u64) -> Result<Response, ContractError> {
    let mut deposit = load_open_deposit(deps.storage, nonce)?;
    if deposit.refund_blocked {
        return Err(ContractError::RefundIsBlocked { nonce });
    }

    deposit.refund_blocked = true;
    DEPOSITS.save(deps.storage, nonce, &deposit)?;

    Ok(Response::new()
        .add_attribute("method", "block_refund")
        .add_attribute("nonce", nonce.to_string()))
}
