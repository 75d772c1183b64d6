//! Message surface of the AMM router used by the swap leg.
//!
//! The router follows the "swap exact tokens for tokens" shape: the input
//! amount is fixed, the output must be at least `amount_out_min`, and the
//! swap must land before `deadline` (unix seconds). Native input is attached
//! as funds; CW20 input arrives through a CW20 `Send` hook.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, StdResult, Uint128, WasmMsg};
use cw20::Cw20ExecuteMsg;

use crate::asset::{Asset, AssetInfo};

#[cw_serde]
pub enum RouterExecuteMsg {
    /// Swap the attached native coins along `path`, paying the output to `to`.
    SwapExactTokensForTokens {
        amount_out_min: Uint128,
        path: Vec<String>,
        to: String,
        deadline: u64,
    },
}

/// Hook carried by a CW20 `Send` into the router.
#[cw_serde]
pub enum RouterCw20HookMsg {
    SwapExactTokensForTokens {
        amount_out_min: Uint128,
        path: Vec<String>,
        to: String,
        deadline: u64,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum RouterQueryMsg {
    /// Quote every hop of a swap along `path`.
    #[returns(AmountsOutResponse)]
    GetAmountsOut { amount_in: Uint128, path: Vec<String> },
}

#[cw_serde]
pub struct AmountsOutResponse {
    /// `amounts[0]` is the input, the last entry is the final output.
    pub amounts: Vec<Uint128>,
}

/// Build the message that hands `offer` to `router` and swaps it along `path`.
pub fn swap_msg(
    router: &Addr,
    offer: &Asset,
    amount_out_min: Uint128,
    path: Vec<String>,
    to: &Addr,
    deadline: u64,
) -> StdResult<CosmosMsg> {
    let msg = match &offer.info {
        AssetInfo::Native { .. } => CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: router.to_string(),
            msg: to_json_binary(&RouterExecuteMsg::SwapExactTokensForTokens {
                amount_out_min,
                path,
                to: to.to_string(),
                deadline,
            })?,
            funds: offer.to_coins(),
        }),
        AssetInfo::Cw20 { contract_addr } => CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: contract_addr.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::Send {
                contract: router.to_string(),
                amount: offer.amount,
                msg: to_json_binary(&RouterCw20HookMsg::SwapExactTokensForTokens {
                    amount_out_min,
                    path,
                    to: to.to_string(),
                    deadline,
                })?,
            })?,
            funds: vec![],
        }),
    };
    Ok(msg)
}
