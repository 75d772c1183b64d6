use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;
use cw20::Cw20ReceiveMsg;

pub use common::AmountsOutResponse;

#[cw_serde]
pub struct InstantiateMsg {
    /// Bank denom that stands for the native asset in paths
    pub native_denom: String,
}

/// Execute surface. `SwapExactTokensForTokens` matches
/// `common::RouterExecuteMsg` on the wire.
#[cw_serde]
pub enum ExecuteMsg {
    /// Deposit both sides of a pair. Native sides are attached as funds,
    /// CW20 sides are pulled with `TransferFrom`.
    AddLiquidity {
        asset_a: String,
        amount_a: Uint128,
        asset_b: String,
        amount_b: Uint128,
    },
    /// Swap the attached native coins along `path`.
    SwapExactTokensForTokens {
        amount_out_min: Uint128,
        path: Vec<String>,
        to: String,
        deadline: u64,
    },
    /// CW20 input, carrying a `common::RouterCw20HookMsg`.
    Receive(Cw20ReceiveMsg),
}

/// Query surface. `GetAmountsOut` matches `common::RouterQueryMsg`.
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(AmountsOutResponse)]
    GetAmountsOut { amount_in: Uint128, path: Vec<String> },
    #[returns(ReservesResponse)]
    Reserves { asset_a: String, asset_b: String },
}

#[cw_serde]
pub struct ReservesResponse {
    pub reserve_a: Uint128,
    pub reserve_b: Uint128,
}
