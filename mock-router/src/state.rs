use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;
use cw_storage_plus::{Item, Map};

pub const CONTRACT_NAME: &str = "crates.io:mock-router";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Swap fee, in thousandths, kept by the pool
pub const FEE_PER_MILLE: u128 = 3;

/// Bank denom treated as the native asset in paths
pub const NATIVE_DENOM: Item<String> = Item::new("native_denom");

/// Reserves of a pair, ordered like its key
#[cw_serde]
pub struct Pool {
    pub reserve_a: Uint128,
    pub reserve_b: Uint128,
}

/// (lower asset, higher asset) => reserves
pub const POOLS: Map<(&str, &str), Pool> = Map::new("pools");
