//! Swap Bridge Contract - Cross-Chain Asset Bridging with an Optional Swap Leg
//!
//! # Outgoing Flow (Send)
//! 1. A user sends native coins or CW20 tokens into custody with `Send`
//!    (or `SendWithSwap`, which also records the asset wanted on arrival)
//! 2. The deposit is stored under the next outgoing nonce and emitted
//! 3. The relayer releases the matching amount on the destination chain
//!
//! # Incoming Flow (Withdraw)
//! 1. The relayer calls `Withdraw` (or `WithdrawWithSwap`) with the source
//!    chain's nonce
//! 2. The nonce is consumed; a replay fails
//! 3. Funds (or the swap proceeds) go to the recipient
//!
//! # Refunds
//! Deposits the relayer never released can be refunded by the depositor or a
//! relayer after the cooldown, unless a relayer blocked the refund. Admins can
//! refund at any time.
//!
//! # Security
//! - Per-operation access policy (role + pause state)
//! - Incoming nonce tracking to prevent replay
//! - Failed native payouts revert the whole transaction
//! - Emergency withdrawal only while paused

pub mod access;
pub mod contract;
pub mod error;
mod execute;
pub mod msg;
pub mod nonce;
mod query;
pub mod registry;
pub mod state;
pub mod transfer;

pub use crate::access::Role;
pub use crate::error::ContractError;
