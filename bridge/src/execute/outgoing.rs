//! Outgoing transfer handlers.
//!
//! Funds are taken into custody and a deposit record is written under the
//! next outgoing nonce. The relayer picks the deposit up from the event.

use cosmwasm_std::{CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::nonce;
use crate::registry::{ensure_chain_supported, ensure_token_supported, other_chain_token};
use crate::state::{Deposit, SwapIntent, CONFIG, DEPOSITS};
use crate::transfer::{check_attached_funds, ensure_nonzero, resolve_asset};

/// Result of taking a deposit into custody.
pub(crate) struct LockedDeposit {
    pub nonce: u64,
    /// Identifier of the deposited asset on the destination chain
    pub asset_on_chain: String,
    /// CW20 pull into custody; `None` for native deposits
    pub pull: Option<CosmosMsg>,
}

/// Validate and record a deposit. Shared by `Send` and `SendWithSwap`.
#[allow(clippy::too_many_arguments)]
pub(crate) fn lock_deposit(
    deps: DepsMut,
    env: &Env,
    info: &MessageInfo,
    asset: &str,
    recipient: &str,
    destination_chain_id: u64,
    amount: Uint128,
    swap: Option<SwapIntent>,
) -> Result<LockedDeposit, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    ensure_chain_supported(deps.storage, destination_chain_id)?;
    let token = ensure_token_supported(deps.storage, asset)?;
    let asset_on_chain = other_chain_token(deps.storage, asset, destination_chain_id)?.ok_or(
        ContractError::TokenIsNotSupportedOnChain {
            asset: asset.to_string(),
            chain_id: destination_chain_id,
        },
    )?;

    let custody = resolve_asset(deps.api, &config, asset, amount)?;
    check_attached_funds(info, &custody)?;

    ensure_nonzero(amount)?;
    if amount < token.min_amount {
        return Err(ContractError::AmountIsLessThanMinimum {
            amount,
            min: token.min_amount,
        });
    }

    let nonce = nonce::take_outgoing(deps.storage)?;
    DEPOSITS.save(
        deps.storage,
        nonce,
        &Deposit {
            depositor: info.sender.clone(),
            asset: asset.to_string(),
            amount,
            dest_chain_id: destination_chain_id,
            recipient: recipient.to_string(),
            deposited_at: env.block.time,
            refund_blocked: false,
            refunded: false,
            swap,
        },
    )?;

    let pull = custody.transfer_from_msg(&info.sender, &env.contract.address)?;

    Ok(LockedDeposit {
        nonce,
        asset_on_chain,
        pull,
    })
}

/// Lock `amount` of `asset` for `recipient` on `destination_chain_id`.
pub fn execute_send(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    asset: String,
    recipient: String,
    destination_chain_id: u64,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let locked = lock_deposit(
        deps,
        &env,
        &info,
        &asset,
        &recipient,
        destination_chain_id,
        amount,
        None,
    )?;

    Ok(Response::new()
        .add_messages(locked.pull)
        .add_attribute("method", "send")
        .add_attribute("asset", asset)
        .add_attribute("asset_on_chain", locked.asset_on_chain)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount.to_string())
        .add_attribute("nonce", locked.nonce.to_string())
        .add_attribute("destination_chain_id", destination_chain_id.to_string())
        .add_attribute("depositor", info.sender))
}
