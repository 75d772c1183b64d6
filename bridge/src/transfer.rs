//! Custody primitives: checking attached funds on the way in and building
//! payout messages on the way out.

use cosmwasm_std::{Addr, Api, MessageInfo, StdResult, SubMsg, Uint128};

use common::{Asset, AssetInfo};

use crate::error::ContractError;
use crate::state::Config;

/// Reply id for native payouts; an error reply becomes `FailedToSendEther`.
pub const REPLY_NATIVE_PAYOUT: u64 = 1;

/// Resolve an asset identifier into an amount of a concrete asset.
pub fn resolve_asset(
    api: &dyn Api,
    config: &Config,
    identifier: &str,
    amount: Uint128,
) -> StdResult<Asset> {
    let info = AssetInfo::from_identifier(api, identifier, &config.native_token)?;
    Ok(Asset::new(info, amount))
}

/// Reject zero amounts before any nonce or custody state is touched.
pub fn ensure_nonzero(amount: Uint128) -> Result<(), ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "Amount must be greater than zero".to_string(),
        });
    }
    Ok(())
}

/// Check the funds attached to a deposit.
///
/// Native deposits must attach exactly `amount` of the native denom and
/// nothing else. CW20 deposits must attach nothing.
pub fn check_attached_funds(info: &MessageInfo, asset: &Asset) -> Result<(), ContractError> {
    match &asset.info {
        AssetInfo::Native { denom } => {
            let mut attached = Uint128::zero();
            for coin in &info.funds {
                if coin.denom != *denom {
                    return Err(ContractError::UnsupportedFunds {
                        denom: coin.denom.clone(),
                    });
                }
                attached += coin.amount;
            }
            if attached != asset.amount {
                return Err(ContractError::AmountIsNotEqualToMsgValue {
                    expected: asset.amount,
                    actual: attached,
                });
            }
        }
        AssetInfo::Cw20 { .. } => {
            if info.funds.iter().any(|c| !c.amount.is_zero()) {
                return Err(ContractError::MsgValueShouldBeZero);
            }
        }
    }
    Ok(())
}

/// Payout of `asset` from custody to `recipient`.
pub fn payout(asset: &Asset, recipient: &Addr) -> StdResult<SubMsg> {
    let msg = asset.transfer_msg(recipient)?;
    if asset.info.is_native() {
        Ok(SubMsg::reply_on_error(msg, REPLY_NATIVE_PAYOUT))
    } else {
        Ok(SubMsg::new(msg))
    }
}
