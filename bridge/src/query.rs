//! Query handlers for the swap bridge contract.

use cosmwasm_std::{Addr, Deps, Order, StdResult, Uint128};
use cw_storage_plus::Bound;

use crate::access::{has_role, role_members, Role};
use crate::execute::resolve_path;
use crate::msg::{
    ConfigResponse, DepositResponse, DepositsResponse, MinTimeToWaitBeforeRefundResponse,
    NonceResponse, RoleMembersResponse, SupportedChainsResponse, SwapPathResponse, TokenResponse,
    TokensResponse,
};
use crate::nonce;
use crate::registry;
use crate::state::{
    Deposit, TokenConfig, CONFIG, DEPOSITS, REFUND_DELAY, SUPPORTED_CHAINS, SWAP_ROUTER, TOKENS,
};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 50;

fn page_size(limit: Option<u32>) -> usize {
    limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize
}

// ============================================================================
// Core Queries
// ============================================================================

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        native_token: config.native_token,
        paused: config.paused,
        min_time_to_wait_before_refund: REFUND_DELAY.load(deps.storage)?,
        outgoing_nonce: nonce::current_outgoing(deps.storage)?,
        swap_router: SWAP_ROUTER.may_load(deps.storage)?,
    })
}

pub fn query_min_time_to_wait_before_refund(
    deps: Deps,
) -> StdResult<MinTimeToWaitBeforeRefundResponse> {
    Ok(MinTimeToWaitBeforeRefundResponse {
        seconds: REFUND_DELAY.load(deps.storage)?,
    })
}

// ============================================================================
// Registry Queries
// ============================================================================

pub fn query_token_is_supported(deps: Deps, asset: String) -> StdResult<bool> {
    registry::is_token_supported(deps.storage, &asset)
}

pub fn query_min_amount_for_token(deps: Deps, asset: String) -> StdResult<Uint128> {
    registry::min_amount_for_token(deps.storage, &asset)
}

pub fn query_other_chain_token(
    deps: Deps,
    asset: String,
    chain_id: u64,
) -> StdResult<Option<String>> {
    registry::other_chain_token(deps.storage, &asset, chain_id)
}

fn token_response(native_token: &str, asset: String, token: TokenConfig) -> TokenResponse {
    TokenResponse {
        is_native: asset == native_token,
        asset,
        supported: token.supported,
        min_amount: token.min_amount,
    }
}

pub fn query_token(deps: Deps, asset: String) -> StdResult<Option<TokenResponse>> {
    let config = CONFIG.load(deps.storage)?;
    Ok(TOKENS
        .may_load(deps.storage, &asset)?
        .map(|token| token_response(&config.native_token, asset, token)))
}

pub fn query_tokens(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<TokensResponse> {
    let config = CONFIG.load(deps.storage)?;
    let start = start_after.as_deref().map(Bound::exclusive);

    let tokens = TOKENS
        .range(deps.storage, start, None, Order::Ascending)
        .take(page_size(limit))
        .map(|item| {
            let (asset, token) = item?;
            Ok(token_response(&config.native_token, asset, token))
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(TokensResponse { tokens })
}

pub fn query_supported_chains(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<SupportedChainsResponse> {
    let start = start_after.map(Bound::exclusive);

    let chain_ids = SUPPORTED_CHAINS
        .range(deps.storage, start, None, Order::Ascending)
        .filter_map(|item| match item {
            Ok((chain_id, true)) => Some(Ok(chain_id)),
            Ok((_, false)) => None,
            Err(e) => Some(Err(e)),
        })
        .take(page_size(limit))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(SupportedChainsResponse { chain_ids })
}

// ============================================================================
// Nonce & Deposit Queries
// ============================================================================

pub fn query_nonce(deps: Deps) -> StdResult<NonceResponse> {
    Ok(NonceResponse {
        nonce: nonce::current_outgoing(deps.storage)?,
    })
}

pub fn query_nonce_is_used(deps: Deps, nonce: u64) -> StdResult<bool> {
    nonce::is_used(deps.storage, nonce)
}

fn deposit_response(nonce: u64, deposit: Deposit, refund_delay: u64) -> DepositResponse {
    DepositResponse {
        nonce,
        refundable_at: deposit.deposited_at.plus_seconds(refund_delay),
        depositor: deposit.depositor,
        asset: deposit.asset,
        amount: deposit.amount,
        dest_chain_id: deposit.dest_chain_id,
        recipient: deposit.recipient,
        deposited_at: deposit.deposited_at,
        refund_blocked: deposit.refund_blocked,
        refunded: deposit.refunded,
        swap: deposit.swap,
    }
}

pub fn query_deposit(deps: Deps, nonce: u64) -> StdResult<Option<DepositResponse>> {
    let refund_delay = REFUND_DELAY.load(deps.storage)?;
    Ok(DEPOSITS
        .may_load(deps.storage, nonce)?
        .map(|deposit| deposit_response(nonce, deposit, refund_delay)))
}

pub fn query_deposits(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<DepositsResponse> {
    let refund_delay = REFUND_DELAY.load(deps.storage)?;
    let start = start_after.map(Bound::exclusive);

    let deposits = DEPOSITS
        .range(deps.storage, start, None, Order::Ascending)
        .take(page_size(limit))
        .map(|item| {
            let (nonce, deposit) = item?;
            Ok(deposit_response(nonce, deposit, refund_delay))
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(DepositsResponse { deposits })
}

// ============================================================================
// Role Queries
// ============================================================================

pub fn query_has_role(deps: Deps, role: Role, account: String) -> StdResult<bool> {
    let account = deps.api.addr_validate(&account)?;
    has_role(deps.storage, role, &account)
}

pub fn query_role_members(deps: Deps, role: Role) -> StdResult<RoleMembersResponse> {
    Ok(RoleMembersResponse {
        role,
        members: role_members(deps.storage, role)?,
    })
}

// ============================================================================
// Swap Queries
// ============================================================================

pub fn query_swap_router(deps: Deps) -> StdResult<Option<Addr>> {
    SWAP_ROUTER.may_load(deps.storage)
}

pub fn query_swap_path(
    deps: Deps,
    asset_in: String,
    asset_out: String,
) -> StdResult<SwapPathResponse> {
    let config = CONFIG.load(deps.storage)?;
    let (path, custom) = resolve_path(deps.storage, &config.native_token, &asset_in, &asset_out)?;
    Ok(SwapPathResponse { path, custom })
}
