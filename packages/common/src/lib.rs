//! Common - Shared Types for the Swap Bridge Contracts
//!
//! Asset handling shared by the bridge and the router, and the message
//! surface the bridge uses to drive an AMM router.

pub mod asset;
pub mod router;

pub use asset::{Asset, AssetInfo};
pub use router::{
    swap_msg, AmountsOutResponse, RouterCw20HookMsg, RouterExecuteMsg, RouterQueryMsg,
};
