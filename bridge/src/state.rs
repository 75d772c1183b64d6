//! State definitions for the swap bridge contract
//!
//! Storage layout for the token registry, the nonce ledger, deposit records,
//! role assignments and the swap extension.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Identifier of the native asset (bank denom); the native sentinel
    pub native_token: String,
    /// Whether value-moving entry points are disabled
    pub paused: bool,
}

/// Registry entry for a bridgeable asset
#[cw_serde]
pub struct TokenConfig {
    /// Whether the asset may be sent/withdrawn
    pub supported: bool,
    /// Smallest accepted deposit (inclusive)
    pub min_amount: Uint128,
}

/// Output the depositor asked for when using the swap variant
#[cw_serde]
pub struct SwapIntent {
    pub asset_out: String,
    pub min_amount_out: Uint128,
    pub deadline: u64,
}

/// Outgoing deposit record, keyed by nonce
#[cw_serde]
pub struct Deposit {
    /// Address that funded the deposit (and receives any refund)
    pub depositor: Addr,
    /// Asset identifier held in custody
    pub asset: String,
    /// Amount held in custody
    pub amount: Uint128,
    /// Chain the funds are bridged to
    pub dest_chain_id: u64,
    /// Recipient on the destination chain (foreign address, not validated)
    pub recipient: String,
    /// Block time of the deposit
    pub deposited_at: Timestamp,
    /// Set by a relayer once a release for this nonce is in flight
    pub refund_blocked: bool,
    /// Consumed marker; a deposit is refunded at most once
    pub refunded: bool,
    /// Present for `SendWithSwap` deposits
    pub swap: Option<SwapIntent>,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:swap-bridge";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default refund cooldown in seconds (5 minutes)
pub const DEFAULT_REFUND_DELAY: u64 = 300;

/// Hard ceiling on the refund cooldown (24 hours)
pub const MAX_REFUND_DELAY: u64 = 86_400;

// ============================================================================
// Core State Storage
// ============================================================================

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Refund cooldown in seconds
pub const REFUND_DELAY: Item<u64> = Item::new("refund_delay");

/// Supported destination/source chains
/// Key: chain id, Value: whether supported
pub const SUPPORTED_CHAINS: Map<u64, bool> = Map::new("supported_chains");

/// Token registry
/// Key: asset identifier, Value: TokenConfig
pub const TOKENS: Map<&str, TokenConfig> = Map::new("tokens");

/// Destination mapping
/// Key: (asset identifier, chain id), Value: asset identifier on that chain
pub const OTHER_CHAIN_TOKENS: Map<(&str, u64), String> = Map::new("other_chain_tokens");

// ============================================================================
// Nonce Ledger
// ============================================================================

/// Next outgoing nonce (starts at 0)
pub const OUTGOING_NONCE: Item<u64> = Item::new("outgoing_nonce");

/// Incoming nonces already consumed by a withdraw
/// Key: nonce, Value: whether used
pub const USED_NONCES: Map<u64, bool> = Map::new("used_nonces");

/// Outgoing deposits
/// Key: nonce, Value: Deposit
pub const DEPOSITS: Map<u64, Deposit> = Map::new("deposits");

// ============================================================================
// Access Control
// ============================================================================

/// Role assignments
/// Key: (role key, address), Value: whether granted
pub const ROLES: Map<(&str, &Addr), bool> = Map::new("roles");

// ============================================================================
// Swap Extension
// ============================================================================

/// AMM router, set once
pub const SWAP_ROUTER: Item<Addr> = Item::new("swap_router");

/// Custom swap paths
/// Key: (asset in, asset out), Value: full path including both ends
pub const SWAP_PATHS: Map<(&str, &str), Vec<String>> = Map::new("swap_paths");
