//! Constant-product AMM router for exercising the bridge's swap leg.
//!
//! Pools are x·y=k with a 0.3% fee. Swaps follow the "swap exact tokens for
//! tokens" shape in `common::router`, so the bridge talks to this contract
//! exactly as it would to a production router.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
