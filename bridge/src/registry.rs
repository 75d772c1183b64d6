//! Token registry and supported-chain lookups shared by the handlers.

use cosmwasm_std::{StdResult, Storage, Uint128};

use crate::error::ContractError;
use crate::state::{TokenConfig, OTHER_CHAIN_TOKENS, SUPPORTED_CHAINS, TOKENS};

pub fn is_chain_supported(storage: &dyn Storage, chain_id: u64) -> StdResult<bool> {
    Ok(SUPPORTED_CHAINS
        .may_load(storage, chain_id)?
        .unwrap_or(false))
}

pub fn ensure_chain_supported(storage: &dyn Storage, chain_id: u64) -> Result<(), ContractError> {
    if !is_chain_supported(storage, chain_id)? {
        return Err(ContractError::ChainIsNotSupported { chain_id });
    }
    Ok(())
}

pub fn is_token_supported(storage: &dyn Storage, asset: &str) -> StdResult<bool> {
    Ok(TOKENS
        .may_load(storage, asset)?
        .map(|t| t.supported)
        .unwrap_or(false))
}

pub fn min_amount_for_token(storage: &dyn Storage, asset: &str) -> StdResult<Uint128> {
    Ok(TOKENS
        .may_load(storage, asset)?
        .map(|t| t.min_amount)
        .unwrap_or_default())
}

/// Load a token entry, failing unless it is supported.
pub fn ensure_token_supported(
    storage: &dyn Storage,
    asset: &str,
) -> Result<TokenConfig, ContractError> {
    match TOKENS.may_load(storage, asset)? {
        Some(token) if token.supported => Ok(token),
        _ => Err(ContractError::TokenIsNotSupported {
            asset: asset.to_string(),
        }),
    }
}

/// Identifier of `asset` on `chain_id`, if it is bridgeable there.
pub fn other_chain_token(
    storage: &dyn Storage,
    asset: &str,
    chain_id: u64,
) -> StdResult<Option<String>> {
    OTHER_CHAIN_TOKENS.may_load(storage, (asset, chain_id))
}

/// Store or clear a destination mapping; an empty value clears it.
pub fn set_other_chain_token(
    storage: &mut dyn Storage,
    asset: &str,
    chain_id: u64,
    asset_on_chain: &str,
) -> StdResult<()> {
    if asset_on_chain.is_empty() {
        OTHER_CHAIN_TOKENS.remove(storage, (asset, chain_id));
        Ok(())
    } else {
        OTHER_CHAIN_TOKENS.save(storage, (asset, chain_id), &asset_on_chain.to_string())
    }
}
