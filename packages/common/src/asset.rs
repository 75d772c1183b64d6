//! Asset identifiers and the messages that move them.
//!
//! The bridge keys everything by a plain string identifier. One identifier,
//! the deployment's native denom, stands for the bank coin; every other
//! identifier is a CW20 contract address.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Api, BankMsg, Coin, CosmosMsg, StdResult, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

/// Where an asset lives: the bank module or a CW20 contract.
#[cw_serde]
pub enum AssetInfo {
    Native { denom: String },
    Cw20 { contract_addr: Addr },
}

impl AssetInfo {
    /// Resolve a bridge asset identifier against the native denom.
    pub fn from_identifier(api: &dyn Api, identifier: &str, native_denom: &str) -> StdResult<Self> {
        if identifier == native_denom {
            Ok(AssetInfo::Native {
                denom: native_denom.to_string(),
            })
        } else {
            Ok(AssetInfo::Cw20 {
                contract_addr: api.addr_validate(identifier)?,
            })
        }
    }

    pub fn identifier(&self) -> String {
        match self {
            AssetInfo::Native { denom } => denom.clone(),
            AssetInfo::Cw20 { contract_addr } => contract_addr.to_string(),
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, AssetInfo::Native { .. })
    }
}

/// An amount of a specific asset.
#[cw_serde]
pub struct Asset {
    pub info: AssetInfo,
    pub amount: Uint128,
}

impl Asset {
    pub fn new(info: AssetInfo, amount: Uint128) -> Self {
        Self { info, amount }
    }

    /// Message paying this asset out of the executing contract to `recipient`.
    pub fn transfer_msg(&self, recipient: &Addr) -> StdResult<CosmosMsg> {
        let msg = match &self.info {
            AssetInfo::Native { denom } => CosmosMsg::Bank(BankMsg::Send {
                to_address: recipient.to_string(),
                amount: vec![Coin {
                    denom: denom.clone(),
                    amount: self.amount,
                }],
            }),
            AssetInfo::Cw20 { contract_addr } => CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: contract_addr.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                    recipient: recipient.to_string(),
                    amount: self.amount,
                })?,
                funds: vec![],
            }),
        };
        Ok(msg)
    }

    /// Allowance-based pull of a CW20 from `owner` into `recipient`.
    ///
    /// Native coins cannot be pulled; they arrive as attached funds, so this
    /// returns `None` for them.
    pub fn transfer_from_msg(&self, owner: &Addr, recipient: &Addr) -> StdResult<Option<CosmosMsg>> {
        match &self.info {
            AssetInfo::Native { .. } => Ok(None),
            AssetInfo::Cw20 { contract_addr } => Ok(Some(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: contract_addr.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
                    owner: owner.to_string(),
                    recipient: recipient.to_string(),
                    amount: self.amount,
                })?,
                funds: vec![],
            }))),
        }
    }

    /// Coins to attach when forwarding this asset into another contract call.
    pub fn to_coins(&self) -> Vec<Coin> {
        match &self.info {
            AssetInfo::Native { denom } => vec![Coin {
                denom: denom.clone(),
                amount: self.amount,
            }],
            AssetInfo::Cw20 { .. } => vec![],
        }
    }
}
