//! Swap Bridge Contract - Entry Points
//!
//! Handlers are split into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers
//!
//! Every execute message is checked against its access policy here, before
//! dispatch.

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdError, StdResult,
};
use cw2::{get_contract_version, set_contract_version};

use crate::access::{grant_role, AuthContext, Operation, Role};
use crate::error::ContractError;
use crate::execute::{
    execute_add_supported_chain, execute_add_token, execute_block_refund,
    execute_emergency_withdraw, execute_grant_role, execute_initialize_swap_router,
    execute_pause, execute_refund, execute_remove_supported_chain, execute_renounce_role,
    execute_revoke_role, execute_send, execute_send_with_swap, execute_set_min_amount_for_token,
    execute_set_other_chain_token, execute_set_path_for_token_to_token,
    execute_set_time_to_wait_before_refund, execute_unpause, execute_withdraw,
    execute_withdraw_with_swap,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_deposit, query_deposits, query_has_role,
    query_min_amount_for_token, query_min_time_to_wait_before_refund, query_nonce,
    query_nonce_is_used, query_other_chain_token, query_role_members, query_supported_chains,
    query_swap_path, query_swap_router, query_token, query_token_is_supported, query_tokens,
};
use crate::registry::set_other_chain_token;
use crate::state::{
    Config, TokenConfig, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, DEFAULT_REFUND_DELAY,
    MAX_REFUND_DELAY, OUTGOING_NONCE, REFUND_DELAY, SUPPORTED_CHAINS, TOKENS,
};
use crate::transfer::REPLY_NATIVE_PAYOUT;

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    // The runtime instantiates an address once, so this only fires if state
    // was written by something other than this entry point.
    if CONFIG.may_load(deps.storage)?.is_some() {
        return Err(ContractError::AlreadyInitialized);
    }

    if msg.supported_chains.len() != msg.native_token_on_chains.len() {
        return Err(ContractError::ArrayLengthMissmatch {
            expected: msg.supported_chains.len() as u64,
            actual: msg.native_token_on_chains.len() as u64,
        });
    }

    if msg.min_time_to_wait_before_refund > MAX_REFUND_DELAY {
        return Err(ContractError::MinTimeToWaitBeforeRefundIsTooBig {
            value: msg.min_time_to_wait_before_refund,
        });
    }

    if msg.native_token.is_empty() {
        return Err(StdError::generic_err("native_token must not be empty").into());
    }

    let admin = match msg.admin {
        Some(admin) => deps.api.addr_validate(&admin)?,
        None => info.sender,
    };
    let relayer = deps.api.addr_validate(&msg.relayer)?;

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    CONFIG.save(
        deps.storage,
        &Config {
            native_token: msg.native_token.clone(),
            paused: false,
        },
    )?;
    REFUND_DELAY.save(deps.storage, &msg.min_time_to_wait_before_refund)?;
    OUTGOING_NONCE.save(deps.storage, &0u64)?;

    // Native asset is supported from the start; empty mappings leave the
    // chain supported but the native asset not bridgeable to it.
    TOKENS.save(
        deps.storage,
        &msg.native_token,
        &TokenConfig {
            supported: true,
            min_amount: msg.native_min_amount,
        },
    )?;
    for (chain_id, native_on_chain) in msg
        .supported_chains
        .iter()
        .zip(msg.native_token_on_chains.iter())
    {
        SUPPORTED_CHAINS.save(deps.storage, *chain_id, &true)?;
        set_other_chain_token(deps.storage, &msg.native_token, *chain_id, native_on_chain)?;
    }

    grant_role(deps.storage, Role::Admin, &admin)?;
    grant_role(deps.storage, Role::Relayer, &relayer)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("relayer", relayer)
        .add_attribute("native_token", msg.native_token)
        .add_attribute("supported_chains", msg.supported_chains.len().to_string())
        .add_attribute(
            "min_time_to_wait_before_refund",
            msg.min_time_to_wait_before_refund.to_string(),
        ))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let auth = AuthContext::load(deps.storage, &info.sender)?;
    Operation::from(&msg).policy().check(&config, &auth)?;

    match msg {
        // Transfers
        ExecuteMsg::Send {
            asset,
            recipient,
            destination_chain_id,
            amount,
        } => execute_send(
            deps,
            env,
            info,
            asset,
            recipient,
            destination_chain_id,
            amount,
        ),
        ExecuteMsg::Withdraw {
            asset,
            recipient,
            amount,
            source_chain_id,
            nonce,
        } => execute_withdraw(deps, asset, recipient, amount, source_chain_id, nonce),
        ExecuteMsg::Refund { nonce } => execute_refund(deps, env, &auth, nonce),
        ExecuteMsg::BlockRefund { nonce } => execute_block_refund(deps, nonce),
        ExecuteMsg::EmergencyWithdraw {
            asset,
            recipient,
            amount,
        } => execute_emergency_withdraw(deps, asset, recipient, amount),
        ExecuteMsg::Pause {} => execute_pause(deps),
        ExecuteMsg::Unpause {} => execute_unpause(deps),

        // Registry
        ExecuteMsg::AddToken {
            asset,
            asset_on_chain,
            chain_id,
            min_amount,
        } => execute_add_token(deps, asset, asset_on_chain, chain_id, min_amount),
        ExecuteMsg::SetMinAmountForToken { asset, min_amount } => {
            execute_set_min_amount_for_token(deps, asset, min_amount)
        }
        ExecuteMsg::SetOtherChainToken {
            asset,
            asset_on_chain,
            chain_id,
        } => execute_set_other_chain_token(deps, asset, asset_on_chain, chain_id),
        ExecuteMsg::AddSupportedChain { chain_id } => execute_add_supported_chain(deps, chain_id),
        ExecuteMsg::RemoveSupportedChain { chain_id } => {
            execute_remove_supported_chain(deps, chain_id)
        }
        ExecuteMsg::SetTimeToWaitBeforeRefund { seconds } => {
            execute_set_time_to_wait_before_refund(deps, seconds)
        }

        // Roles
        ExecuteMsg::GrantRole { role, account } => execute_grant_role(deps, role, account),
        ExecuteMsg::RevokeRole { role, account } => execute_revoke_role(deps, role, account),
        ExecuteMsg::RenounceRole { role } => execute_renounce_role(deps, &auth, role),

        // Swap extension
        ExecuteMsg::SendWithSwap {
            asset_in,
            asset_out,
            recipient,
            destination_chain_id,
            amount_in,
            min_amount_out,
            deadline,
        } => execute_send_with_swap(
            deps,
            env,
            info,
            asset_in,
            asset_out,
            recipient,
            destination_chain_id,
            amount_in,
            min_amount_out,
            deadline,
        ),
        ExecuteMsg::WithdrawWithSwap {
            asset_in,
            asset_out,
            recipient,
            amount_in,
            min_amount_out,
            source_chain_id,
            nonce,
            deadline,
        } => execute_withdraw_with_swap(
            deps,
            asset_in,
            asset_out,
            recipient,
            amount_in,
            min_amount_out,
            source_chain_id,
            nonce,
            deadline,
        ),
        ExecuteMsg::InitializeSwapRouter { router } => {
            execute_initialize_swap_router(deps, router)
        }
        ExecuteMsg::SetPathForTokenToToken {
            asset_in,
            asset_out,
            path,
        } => execute_set_path_for_token_to_token(deps, asset_in, asset_out, path),
    }
}

// ============================================================================
// Reply
// ============================================================================

/// Only native payouts request a reply, and only on error. Returning the
/// error here aborts the whole transaction.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(_deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        REPLY_NATIVE_PAYOUT => Err(ContractError::FailedToSendEther),
        id => Err(StdError::generic_err(format!("Unknown reply id: {id}")).into()),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        // Core
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::MinTimeToWaitBeforeRefund {} => {
            to_json_binary(&query_min_time_to_wait_before_refund(deps)?)
        }

        // Registry
        QueryMsg::TokenIsSupported { asset } => {
            to_json_binary(&query_token_is_supported(deps, asset)?)
        }
        QueryMsg::MinAmountForToken { asset } => {
            to_json_binary(&query_min_amount_for_token(deps, asset)?)
        }
        QueryMsg::OtherChainToken { asset, chain_id } => {
            to_json_binary(&query_other_chain_token(deps, asset, chain_id)?)
        }
        QueryMsg::Token { asset } => to_json_binary(&query_token(deps, asset)?),
        QueryMsg::Tokens { start_after, limit } => {
            to_json_binary(&query_tokens(deps, start_after, limit)?)
        }
        QueryMsg::SupportedChains { start_after, limit } => {
            to_json_binary(&query_supported_chains(deps, start_after, limit)?)
        }

        // Nonces & deposits
        QueryMsg::Nonce {} => to_json_binary(&query_nonce(deps)?),
        QueryMsg::NonceIsUsed { nonce } => to_json_binary(&query_nonce_is_used(deps, nonce)?),
        QueryMsg::Deposit { nonce } => to_json_binary(&query_deposit(deps, nonce)?),
        QueryMsg::Deposits { start_after, limit } => {
            to_json_binary(&query_deposits(deps, start_after, limit)?)
        }

        // Roles
        QueryMsg::HasRole { role, account } => {
            to_json_binary(&query_has_role(deps, role, account)?)
        }
        QueryMsg::RoleMembers { role } => to_json_binary(&query_role_members(deps, role)?),

        // Swap
        QueryMsg::SwapRouter {} => to_json_binary(&query_swap_router(deps)?),
        QueryMsg::SwapPath {
            asset_in,
            asset_out,
        } => to_json_binary(&query_swap_path(deps, asset_in, asset_out)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

/// Swap in new logic behind the same address. Only the chain-level contract
/// admin can send this.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::InvalidMigration {
            contract: stored.contract,
            version: stored.version,
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if REFUND_DELAY.may_load(deps.storage)?.is_none() {
        REFUND_DELAY.save(deps.storage, &DEFAULT_REFUND_DELAY)?;
    }

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}
