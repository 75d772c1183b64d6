use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Router: expired (deadline {deadline}, now {now})")]
    Expired { deadline: u64, now: u64 },

    #[error("Router: insufficient output amount ({amount_out} < {amount_out_min})")]
    InsufficientOutputAmount {
        amount_out: Uint128,
        amount_out_min: Uint128,
    },

    #[error("Router: insufficient liquidity")]
    InsufficientLiquidity,

    #[error("Router: no pool for {asset_a}/{asset_b}")]
    PoolNotFound { asset_a: String, asset_b: String },

    #[error("Router: invalid path: {reason}")]
    InvalidPath { reason: String },

    #[error("Router: invalid funds: {reason}")]
    InvalidFunds { reason: String },
}
