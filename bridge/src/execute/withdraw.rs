//! Relayer release of funds bridged in from another chain.

use cosmwasm_std::{DepsMut, Response, Uint128};

use crate::error::ContractError;
use crate::nonce;
use crate::registry::{ensure_chain_supported, ensure_token_supported, other_chain_token};
use crate::state::CONFIG;
use crate::transfer::{ensure_nonzero, payout, resolve_asset};

/// Pay `amount` of `asset` to `recipient` for deposit `nonce` on
/// `source_chain_id`.
///
/// The nonce is marked before the payout is dispatched. A failed native
/// payout errors in `reply`, which rolls the mark back with everything else.
pub fn execute_withdraw(
    deps: DepsMut,
    asset: String,
    recipient: String,
    amount: Uint128,
    source_chain_id: u64,
    nonce: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    ensure_chain_supported(deps.storage, source_chain_id)?;
    ensure_token_supported(deps.storage, &asset)?;
    ensure_nonzero(amount)?;
    nonce::consume_incoming(deps.storage, nonce)?;

    let recipient_addr = deps.api.addr_validate(&recipient)?;
    let release = resolve_asset(deps.api, &config, &asset, amount)?;
    let asset_on_chain = other_chain_token(deps.storage, &asset, source_chain_id)?.unwrap_or_default();

    Ok(Response::new()
        .add_submessage(payout(&release, &recipient_addr)?)
        .add_attribute("method", "withdraw")
        .add_attribute("asset", asset)
        .add_attribute("asset_on_chain", asset_on_chain)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount.to_string())
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("source_chain_id", source_chain_id.to_string()))
}
