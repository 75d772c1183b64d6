//! Message types for the swap bridge contract
//!
//! Execute messages keep the argument order of the bridge's public interface
//! so relayers on either side of the bridge see the same fields in the same
//! order.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Timestamp, Uint128};

use crate::access::Role;
use crate::state::SwapIntent;

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
///
/// `supported_chains` and `native_token_on_chains` are parallel lists: the
/// native asset's identifier on `supported_chains[i]` is
/// `native_token_on_chains[i]`. An empty entry leaves the chain supported but
/// the native asset not bridgeable to it.
#[cw_serde]
pub struct InstantiateMsg {
    pub supported_chains: Vec<u64>,
    /// Bank denom of this deployment's native asset
    pub native_token: String,
    /// Minimum native deposit
    pub native_min_amount: Uint128,
    pub native_token_on_chains: Vec<String>,
    /// Initial relayer
    pub relayer: String,
    /// Refund cooldown in seconds
    pub min_time_to_wait_before_refund: u64,
    /// Initial admin (defaults to the instantiator)
    pub admin: Option<String>,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Transfers
    // ========================================================================
    /// Lock `amount` of `asset` for release to `recipient` on another chain.
    ///
    /// Native deposits attach exactly `amount` as funds. CW20 deposits attach
    /// nothing and require an allowance for the bridge.
    Send {
        asset: String,
        /// Recipient on the destination chain
        recipient: String,
        destination_chain_id: u64,
        amount: Uint128,
    },

    /// Release funds for a deposit made on `source_chain_id`.
    ///
    /// Authorization: Relayer
    Withdraw {
        asset: String,
        recipient: String,
        amount: Uint128,
        source_chain_id: u64,
        /// Nonce of the deposit on the source chain
        nonce: u64,
    },

    /// Return a deposit to its depositor.
    ///
    /// An unknown or already refunded nonce fails before the caller is
    /// checked, so any caller sees `DepositNotFound` / `AlreadyRefunded`.
    ///
    /// Authorization: depositor or Relayer (after cooldown, unless blocked),
    /// Admin (always)
    Refund { nonce: u64 },

    /// Prevent non-admin refunds of a deposit.
    ///
    /// Authorization: Relayer
    BlockRefund { nonce: u64 },

    /// Move funds out of custody while paused.
    ///
    /// Authorization: Admin
    EmergencyWithdraw {
        asset: String,
        recipient: String,
        amount: Uint128,
    },

    /// Authorization: Admin
    Pause {},

    /// Authorization: Admin
    Unpause {},

    // ========================================================================
    // Registry
    // ========================================================================
    /// Support `asset`, set its minimum and its identifier on `chain_id`.
    ///
    /// Authorization: Admin
    AddToken {
        asset: String,
        asset_on_chain: String,
        chain_id: u64,
        min_amount: Uint128,
    },

    /// Authorization: Admin
    SetMinAmountForToken { asset: String, min_amount: Uint128 },

    /// Set or clear (empty `asset_on_chain`) one destination mapping.
    ///
    /// Authorization: Admin
    SetOtherChainToken {
        asset: String,
        asset_on_chain: String,
        chain_id: u64,
    },

    /// Authorization: Admin
    AddSupportedChain { chain_id: u64 },

    /// Authorization: Admin
    RemoveSupportedChain { chain_id: u64 },

    /// Authorization: Admin
    SetTimeToWaitBeforeRefund { seconds: u64 },

    // ========================================================================
    // Roles
    // ========================================================================
    /// Authorization: Admin
    GrantRole { role: Role, account: String },

    /// Authorization: Admin
    RevokeRole { role: Role, account: String },

    /// Drop one of the caller's own roles.
    RenounceRole { role: Role },

    // ========================================================================
    // Swap Extension
    // ========================================================================
    /// `Send` that also records the asset the recipient wants on arrival.
    SendWithSwap {
        asset_in: String,
        asset_out: String,
        recipient: String,
        destination_chain_id: u64,
        amount_in: Uint128,
        min_amount_out: Uint128,
        /// Unix seconds
        deadline: u64,
    },

    /// Swap `amount_in` of `asset_in` through the router and deliver the
    /// proceeds to `recipient`.
    ///
    /// Authorization: Relayer
    WithdrawWithSwap {
        asset_in: String,
        asset_out: String,
        recipient: String,
        amount_in: Uint128,
        min_amount_out: Uint128,
        source_chain_id: u64,
        nonce: u64,
        /// Unix seconds
        deadline: u64,
    },

    /// Set the AMM router. Can only be done once.
    ///
    /// Authorization: Admin
    InitializeSwapRouter { router: String },

    /// Register a custom path for a pair; an empty path removes it.
    ///
    /// Authorization: Admin
    SetPathForTokenToToken {
        asset_in: String,
        asset_out: String,
        path: Vec<String>,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    // ========================================================================
    // Core
    // ========================================================================
    #[returns(ConfigResponse)]
    Config {},

    #[returns(MinTimeToWaitBeforeRefundResponse)]
    MinTimeToWaitBeforeRefund {},

    // ========================================================================
    // Registry
    // ========================================================================
    #[returns(bool)]
    TokenIsSupported { asset: String },

    #[returns(Uint128)]
    MinAmountForToken { asset: String },

    /// Identifier of `asset` on `chain_id`; `None` when not bridgeable there
    #[returns(Option<String>)]
    OtherChainToken { asset: String, chain_id: u64 },

    #[returns(Option<TokenResponse>)]
    Token { asset: String },

    #[returns(TokensResponse)]
    Tokens {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(SupportedChainsResponse)]
    SupportedChains {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    // ========================================================================
    // Nonces & Deposits
    // ========================================================================
    /// Next outgoing nonce
    #[returns(NonceResponse)]
    Nonce {},

    #[returns(bool)]
    NonceIsUsed { nonce: u64 },

    #[returns(Option<DepositResponse>)]
    Deposit { nonce: u64 },

    #[returns(DepositsResponse)]
    Deposits {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    // ========================================================================
    // Roles
    // ========================================================================
    #[returns(bool)]
    HasRole { role: Role, account: String },

    #[returns(RoleMembersResponse)]
    RoleMembers { role: Role },

    // ========================================================================
    // Swap Extension
    // ========================================================================
    #[returns(Option<Addr>)]
    SwapRouter {},

    /// Path `WithdrawWithSwap` would use for the pair
    #[returns(SwapPathResponse)]
    SwapPath { asset_in: String, asset_out: String },
}

// ============================================================================
// Response Types
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub native_token: String,
    pub paused: bool,
    pub min_time_to_wait_before_refund: u64,
    pub outgoing_nonce: u64,
    pub swap_router: Option<Addr>,
}

#[cw_serde]
pub struct MinTimeToWaitBeforeRefundResponse {
    pub seconds: u64,
}

#[cw_serde]
pub struct TokenResponse {
    pub asset: String,
    pub is_native: bool,
    pub supported: bool,
    pub min_amount: Uint128,
}

#[cw_serde]
pub struct TokensResponse {
    pub tokens: Vec<TokenResponse>,
}

#[cw_serde]
pub struct SupportedChainsResponse {
    pub chain_ids: Vec<u64>,
}

#[cw_serde]
pub struct NonceResponse {
    pub nonce: u64,
}

#[cw_serde]
pub struct DepositResponse {
    pub nonce: u64,
    pub depositor: Addr,
    pub asset: String,
    pub amount: Uint128,
    pub dest_chain_id: u64,
    pub recipient: String,
    pub deposited_at: Timestamp,
    pub refund_blocked: bool,
    pub refunded: bool,
    pub swap: Option<SwapIntent>,
    /// Earliest time a non-admin refund is accepted
    pub refundable_at: Timestamp,
}

#[cw_serde]
pub struct DepositsResponse {
    pub deposits: Vec<DepositResponse>,
}

#[cw_serde]
pub struct RoleMembersResponse {
    pub role: Role,
    pub members: Vec<Addr>,
}

#[cw_serde]
pub struct SwapPathResponse {
    pub path: Vec<String>,
    /// Whether the path was registered with `SetPathForTokenToToken`
    pub custom: bool,
}
