//! Nonce ledger.
//!
//! Two independent sequences: the outgoing counter assigned to deposits on
//! this deployment, and the set of relayer-supplied incoming nonces that have
//! already been paid out here.

use cosmwasm_std::{StdResult, Storage};

use crate::error::ContractError;
use crate::state::{OUTGOING_NONCE, USED_NONCES};

/// Next outgoing nonce without consuming it.
pub fn current_outgoing(storage: &dyn Storage) -> StdResult<u64> {
    Ok(OUTGOING_NONCE.may_load(storage)?.unwrap_or_default())
}

/// Take the next outgoing nonce and advance the counter.
pub fn take_outgoing(storage: &mut dyn Storage) -> StdResult<u64> {
    let nonce = current_outgoing(storage)?;
    OUTGOING_NONCE.save(storage, &(nonce + 1))?;
    Ok(nonce)
}

pub fn is_used(storage: &dyn Storage, nonce: u64) -> StdResult<bool> {
    Ok(USED_NONCES.may_load(storage, nonce)?.unwrap_or(false))
}

/// Mark an incoming nonce as consumed, failing if it already was.
pub fn consume_incoming(storage: &mut dyn Storage, nonce: u64) -> Result<(), ContractError> {
    if is_used(storage, nonce)? {
        return Err(ContractError::NonceIsUsed { nonce });
    }
    USED_NONCES.save(storage, nonce, &true)?;
    Ok(())
}
