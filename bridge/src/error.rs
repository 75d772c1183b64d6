//! Error types for the swap bridge contract

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

use crate::access::Role;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("AccessControl: account {account} is missing role {role}")]
    MissingRole { account: String, role: Role },

    #[error("Cannot remove the last admin")]
    CannotRemoveLastAdmin,

    #[error("Only a relayer, an admin or the depositor can refund nonce {nonce}")]
    OnlyRelayerOrCreatorCanRefund { nonce: u64 },

    // ========================================================================
    // Lifecycle Errors
    // ========================================================================

    #[error("Pausable: paused")]
    Paused,

    #[error("Pausable: not paused")]
    NotPaused,

    #[error("Already initialized")]
    AlreadyInitialized,

    #[error("Array length mismatch: expected {expected}, got {actual}")]
    ArrayLengthMissmatch { expected: u64, actual: u64 },

    #[error("Cannot migrate from {contract} {version}")]
    InvalidMigration { contract: String, version: String },

    // ========================================================================
    // Registry Errors
    // ========================================================================

    #[error("Chain is not supported: {chain_id}")]
    ChainIsNotSupported { chain_id: u64 },

    #[error("Token is not supported: {asset}")]
    TokenIsNotSupported { asset: String },

    #[error("Token {asset} is not supported on chain {chain_id}")]
    TokenIsNotSupportedOnChain { asset: String, chain_id: u64 },

    // ========================================================================
    // Amount & Funds Errors
    // ========================================================================

    #[error("Amount {expected} is not equal to attached value {actual}")]
    AmountIsNotEqualToMsgValue { expected: Uint128, actual: Uint128 },

    #[error("Attached value should be zero")]
    MsgValueShouldBeZero,

    #[error("Unsupported funds denom: {denom}")]
    UnsupportedFunds { denom: String },

    #[error("Amount {amount} is less than minimum {min}")]
    AmountIsLessThanMinimum { amount: Uint128, min: Uint128 },

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Failed to send native funds")]
    FailedToSendEther,

    // ========================================================================
    // Nonce & Refund Errors
    // ========================================================================

    #[error("Nonce is used: {nonce}")]
    NonceIsUsed { nonce: u64 },

    #[error("Deposit not found: {nonce}")]
    DepositNotFound { nonce: u64 },

    #[error("Deposit already refunded: {nonce}")]
    AlreadyRefunded { nonce: u64 },

    #[error("Refund is blocked: {nonce}")]
    RefundIsBlocked { nonce: u64 },

    #[error("Min time to refund is not reached: {remaining_seconds} seconds remaining")]
    MinTimeToRefundIsNotReached { remaining_seconds: u64 },

    #[error("Min time to wait before refund is too big: {value}")]
    MinTimeToWaitBeforeRefundIsTooBig { value: u64 },

    // ========================================================================
    // Swap Errors
    // ========================================================================

    #[error("Swap router is not initialized")]
    SwapRouterNotInitialized,

    #[error("Invalid swap path: {reason}")]
    InvalidSwapPath { reason: String },
}
