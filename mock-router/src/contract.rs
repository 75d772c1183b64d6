use cosmwasm_std::{
    entry_point, from_json, to_json_binary, Binary, Coin, Deps, DepsMut, Env, MessageInfo,
    Response, StdError, StdResult, Storage, Uint128, Uint256,
};
use cw2::set_contract_version;
use cw20::Cw20ReceiveMsg;

use common::{AmountsOutResponse, Asset, AssetInfo, RouterCw20HookMsg};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg, ReservesResponse};
use crate::state::{Pool, CONTRACT_NAME, CONTRACT_VERSION, FEE_PER_MILLE, NATIVE_DENOM, POOLS};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    NATIVE_DENOM.save(deps.storage, &msg.native_denom)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("native_denom", msg.native_denom))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::AddLiquidity {
            asset_a,
            amount_a,
            asset_b,
            amount_b,
        } => execute_add_liquidity(deps, env, info, asset_a, amount_a, asset_b, amount_b),
        ExecuteMsg::SwapExactTokensForTokens {
            amount_out_min,
            path,
            to,
            deadline,
        } => {
            let native_denom = NATIVE_DENOM.load(deps.storage)?;
            let amount_in = match (path.first(), info.funds.as_slice()) {
                (Some(first), [coin]) if *first == native_denom && coin.denom == native_denom => {
                    coin.amount
                }
                _ => {
                    return Err(ContractError::InvalidFunds {
                        reason: "attach exactly the native input of the path".to_string(),
                    })
                }
            };
            execute_swap(deps, env, amount_in, amount_out_min, path, to, deadline)
        }
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, env, info, cw20_msg),
    }
}

fn execute_receive(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let RouterCw20HookMsg::SwapExactTokensForTokens {
        amount_out_min,
        path,
        to,
        deadline,
    } = from_json(&cw20_msg.msg)?;

    if path.first() != Some(&info.sender.to_string()) {
        return Err(ContractError::InvalidPath {
            reason: "path must start with the sent token".to_string(),
        });
    }

    execute_swap(deps, env, cw20_msg.amount, amount_out_min, path, to, deadline)
}

fn execute_add_liquidity(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    asset_a: String,
    amount_a: Uint128,
    asset_b: String,
    amount_b: Uint128,
) -> Result<Response, ContractError> {
    if asset_a == asset_b {
        return Err(ContractError::InvalidPath {
            reason: "pair needs two different assets".to_string(),
        });
    }

    let native_denom = NATIVE_DENOM.load(deps.storage)?;
    let side_a = Asset::new(
        AssetInfo::from_identifier(deps.api, &asset_a, &native_denom)?,
        amount_a,
    );
    let side_b = Asset::new(
        AssetInfo::from_identifier(deps.api, &asset_b, &native_denom)?,
        amount_b,
    );

    let expected_funds: Vec<Coin> = [&side_a, &side_b]
        .iter()
        .flat_map(|side| side.to_coins())
        .collect();
    if info.funds != expected_funds {
        return Err(ContractError::InvalidFunds {
            reason: "attach exactly the native side of the pair".to_string(),
        });
    }

    let mut pool = load_pool(deps.storage, &asset_a, &asset_b)?.unwrap_or_default();
    pool.reserve_in += amount_a;
    pool.reserve_out += amount_b;
    save_pool(deps.storage, &asset_a, &asset_b, &pool)?;

    let pulls = [&side_a, &side_b]
        .iter()
        .map(|side| side.transfer_from_msg(&info.sender, &env.contract.address))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(Response::new()
        .add_messages(pulls.into_iter().flatten())
        .add_attribute("action", "add_liquidity")
        .add_attribute("asset_a", asset_a)
        .add_attribute("amount_a", amount_a)
        .add_attribute("asset_b", asset_b)
        .add_attribute("amount_b", amount_b))
}

fn execute_swap(
    deps: DepsMut,
    env: Env,
    amount_in: Uint128,
    amount_out_min: Uint128,
    path: Vec<String>,
    to: String,
    deadline: u64,
) -> Result<Response, ContractError> {
    let now = env.block.time.seconds();
    if now > deadline {
        return Err(ContractError::Expired { deadline, now });
    }

    let to_addr = deps.api.addr_validate(&to)?;
    let amounts = amounts_out(deps.storage, amount_in, &path)?;
    let amount_out = amounts[amounts.len() - 1];
    if amount_out < amount_out_min {
        return Err(ContractError::InsufficientOutputAmount {
            amount_out,
            amount_out_min,
        });
    }

    for (hop, pair) in path.windows(2).enumerate() {
        let mut pool = load_pool(deps.storage, &pair[0], &pair[1])?.ok_or_else(|| {
            ContractError::PoolNotFound {
                asset_a: pair[0].clone(),
                asset_b: pair[1].clone(),
            }
        })?;
        pool.reserve_in += amounts[hop];
        pool.reserve_out = pool
            .reserve_out
            .checked_sub(amounts[hop + 1])
            .map_err(|_| ContractError::InsufficientLiquidity)?;
        save_pool(deps.storage, &pair[0], &pair[1], &pool)?;
    }

    let native_denom = NATIVE_DENOM.load(deps.storage)?;
    let asset_out = &path[path.len() - 1];
    let payout = Asset::new(
        AssetInfo::from_identifier(deps.api, asset_out, &native_denom)?,
        amount_out,
    );

    Ok(Response::new()
        .add_message(payout.transfer_msg(&to_addr)?)
        .add_attribute("action", "swap")
        .add_attribute("path", path.join(","))
        .add_attribute("amount_in", amount_in)
        .add_attribute("amount_out", amount_out)
        .add_attribute("to", to_addr))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::GetAmountsOut { amount_in, path } => {
            let amounts = amounts_out(deps.storage, amount_in, &path)
                .map_err(|e| StdError::generic_err(e.to_string()))?;
            to_json_binary(&AmountsOutResponse { amounts })
        }
        QueryMsg::Reserves { asset_a, asset_b } => {
            let pool = load_pool(deps.storage, &asset_a, &asset_b)?.unwrap_or_default();
            to_json_binary(&ReservesResponse {
                reserve_a: pool.reserve_in,
                reserve_b: pool.reserve_out,
            })
        }
    }
}

// ============================================================================
// Pool math
// ============================================================================

/// Reserves viewed from `asset_in`'s side of the pair.
#[derive(Default)]
struct DirectedPool {
    reserve_in: Uint128,
    reserve_out: Uint128,
}

fn load_pool(
    storage: &dyn Storage,
    asset_in: &str,
    asset_out: &str,
) -> StdResult<Option<DirectedPool>> {
    let flipped = asset_in > asset_out;
    let key = if flipped {
        (asset_out, asset_in)
    } else {
        (asset_in, asset_out)
    };
    Ok(POOLS.may_load(storage, key)?.map(|pool| {
        if flipped {
            DirectedPool {
                reserve_in: pool.reserve_b,
                reserve_out: pool.reserve_a,
            }
        } else {
            DirectedPool {
                reserve_in: pool.reserve_a,
                reserve_out: pool.reserve_b,
            }
        }
    }))
}

fn save_pool(
    storage: &mut dyn Storage,
    asset_in: &str,
    asset_out: &str,
    pool: &DirectedPool,
) -> StdResult<()> {
    if asset_in > asset_out {
        POOLS.save(
            storage,
            (asset_out, asset_in),
            &Pool {
                reserve_a: pool.reserve_out,
                reserve_b: pool.reserve_in,
            },
        )
    } else {
        POOLS.save(
            storage,
            (asset_in, asset_out),
            &Pool {
                reserve_a: pool.reserve_in,
                reserve_b: pool.reserve_out,
            },
        )
    }
}

/// x·y=k output for one hop, after the fee.
pub fn get_amount_out(
    amount_in: Uint128,
    reserve_in: Uint128,
    reserve_out: Uint128,
) -> Result<Uint128, ContractError> {
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(ContractError::InsufficientLiquidity);
    }
    let amount_in_with_fee = Uint256::from(amount_in) * Uint256::from(1000 - FEE_PER_MILLE);
    let numerator = amount_in_with_fee * Uint256::from(reserve_out);
    let denominator = Uint256::from(reserve_in) * Uint256::from(1000u128) + amount_in_with_fee;
    Uint128::try_from(numerator / denominator)
        .map_err(|e| StdError::generic_err(e.to_string()).into())
}

fn amounts_out(
    storage: &dyn Storage,
    amount_in: Uint128,
    path: &[String],
) -> Result<Vec<Uint128>, ContractError> {
    if path.len() < 2 {
        return Err(ContractError::InvalidPath {
            reason: "path needs at least two assets".to_string(),
        });
    }

    let mut amounts = vec![amount_in];
    for pair in path.windows(2) {
        let pool = load_pool(storage, &pair[0], &pair[1])?.ok_or_else(|| {
            ContractError::PoolNotFound {
                asset_a: pair[0].clone(),
                asset_b: pair[1].clone(),
            }
        })?;
        let last = amounts[amounts.len() - 1];
        amounts.push(get_amount_out(last, pool.reserve_in, pool.reserve_out)?);
    }
    Ok(amounts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_out_applies_fee_and_curve() {
        // 10 in against 50:100 → 10*997*100 / (50*1000 + 10*997) = 16.63…
        let out = get_amount_out(Uint128::new(10), Uint128::new(50), Uint128::new(100)).unwrap();
        assert_eq!(out, Uint128::new(16));
    }

    #[test]
    fn empty_pool_has_no_liquidity() {
        assert_eq!(
            get_amount_out(Uint128::new(1), Uint128::zero(), Uint128::new(100)),
            Err(ContractError::InsufficientLiquidity)
        );
    }
}
