//! Initialization, pause control, emergency withdrawal, configuration,
//! roles and migration.

mod helpers;

use cosmwasm_std::{Addr, Uint128};
use cw_multi_test::Executor;

use helpers::*;
use swap_bridge::msg::{
    ConfigResponse, DepositsResponse, ExecuteMsg, MigrateMsg, MinTimeToWaitBeforeRefundResponse,
    QueryMsg, RoleMembersResponse, SupportedChainsResponse, TokenResponse, TokensResponse,
};
use swap_bridge::Role;

// ============================================================================
// Instantiate
// ============================================================================

#[test]
fn instantiate_registers_native_asset_and_roles() {
    let suite = setup();

    let config: ConfigResponse = suite.query(&QueryMsg::Config {});
    assert_eq!(config.native_token, NATIVE);
    assert!(!config.paused);
    assert_eq!(config.min_time_to_wait_before_refund, REFUND_DELAY);
    assert_eq!(config.outgoing_nonce, 0);
    assert_eq!(config.swap_router, None);

    let supported: bool = suite.query(&QueryMsg::TokenIsSupported {
        asset: NATIVE.to_string(),
    });
    assert!(supported);
    let min: Uint128 = suite.query(&QueryMsg::MinAmountForToken {
        asset: NATIVE.to_string(),
    });
    assert_eq!(min, Uint128::new(NATIVE_MIN));

    let on_a: Option<String> = suite.query(&QueryMsg::OtherChainToken {
        asset: NATIVE.to_string(),
        chain_id: CHAIN_A,
    });
    assert_eq!(on_a.as_deref(), Some(NATIVE_ON_CHAIN_A));
    // empty entries leave the chain supported but unmapped
    let on_b: Option<String> = suite.query(&QueryMsg::OtherChainToken {
        asset: NATIVE.to_string(),
        chain_id: CHAIN_B,
    });
    assert_eq!(on_b, None);

    let chains: SupportedChainsResponse = suite.query(&QueryMsg::SupportedChains {
        start_after: None,
        limit: None,
    });
    assert_eq!(chains.chain_ids, vec![CHAIN_A, CHAIN_B]);

    let is_admin: bool = suite.query(&QueryMsg::HasRole {
        role: Role::Admin,
        account: suite.admin.to_string(),
    });
    assert!(is_admin);
    let is_relayer: bool = suite.query(&QueryMsg::HasRole {
        role: Role::Relayer,
        account: suite.relayer.to_string(),
    });
    assert!(is_relayer);
}

#[test]
fn instantiate_rejects_mismatched_lists() {
    let mut suite = setup();
    let relayer = suite.relayer.clone();
    let admin = suite.admin.clone();

    let mut msg = default_instantiate_msg(&relayer, &admin);
    msg.native_token_on_chains = vec![NATIVE_ON_CHAIN_A.to_string()];

    let err = suite
        .app
        .instantiate_contract(suite.bridge_code_id, admin, &msg, &[], "bad", None)
        .unwrap_err();
    assert_eq!(
        err.root_cause().to_string(),
        "Array length mismatch: expected 2, got 1"
    );
}

#[test]
fn instantiate_rejects_cooldown_above_ceiling() {
    let mut suite = setup();
    let relayer = suite.relayer.clone();
    let admin = suite.admin.clone();

    let mut msg = default_instantiate_msg(&relayer, &admin);
    msg.min_time_to_wait_before_refund = 10_000_000;

    let err = suite
        .app
        .instantiate_contract(suite.bridge_code_id, admin, &msg, &[], "bad", None)
        .unwrap_err();
    assert_eq!(
        err.root_cause().to_string(),
        "Min time to wait before refund is too big: 10000000"
    );
}

#[test]
fn admin_defaults_to_instantiator() {
    let mut suite = setup();
    let relayer = suite.relayer.clone();
    let deployer = Addr::unchecked("deployer");

    let mut msg = default_instantiate_msg(&relayer, &deployer);
    msg.admin = None;
    let bridge = suite
        .app
        .instantiate_contract(suite.bridge_code_id, deployer.clone(), &msg, &[], "b2", None)
        .unwrap();

    let members: RoleMembersResponse = suite
        .app
        .wrap()
        .query_wasm_smart(bridge, &QueryMsg::RoleMembers { role: Role::Admin })
        .unwrap();
    assert_eq!(members.members, vec![deployer]);
}

// ============================================================================
// Pause
// ============================================================================

#[test]
fn pause_and_unpause_are_admin_only() {
    let mut suite = setup();
    let user = suite.user.clone();
    let admin = suite.admin.clone();

    let err = root_err(suite.execute(&user, &ExecuteMsg::Pause {}, &[]));
    assert_eq!(err, "AccessControl: account user is missing role admin");

    // role is checked even when the state change would be a no-op
    let err = root_err(suite.execute(&user, &ExecuteMsg::Unpause {}, &[]));
    assert_eq!(err, "AccessControl: account user is missing role admin");

    let res = suite.execute(&admin, &ExecuteMsg::Pause {}, &[]).unwrap();
    assert_eq!(bridge_attr(&res, "method"), "pause");
    let config: ConfigResponse = suite.query(&QueryMsg::Config {});
    assert!(config.paused);
}

#[test]
fn redundant_pause_transitions_fail() {
    let mut suite = setup();
    let admin = suite.admin.clone();

    let err = root_err(suite.execute(&admin, &ExecuteMsg::Unpause {}, &[]));
    assert_eq!(err, "Pausable: not paused");

    suite.pause();
    let err = root_err(suite.execute(&admin, &ExecuteMsg::Pause {}, &[]));
    assert_eq!(err, "Pausable: paused");
}

// ============================================================================
// Emergency Withdraw
// ============================================================================

fn emergency_withdraw(asset: &str, recipient: &Addr, amount: u128) -> ExecuteMsg {
    ExecuteMsg::EmergencyWithdraw {
        asset: asset.to_string(),
        recipient: recipient.to_string(),
        amount: Uint128::new(amount),
    }
}

#[test]
fn emergency_withdraw_requires_pause() {
    let mut suite = setup();
    let user = suite.user.clone();
    let admin = suite.admin.clone();
    let vault = Addr::unchecked("vault");
    suite.send_native(&user, 1_000).unwrap();

    let err = root_err(suite.execute(&admin, &emergency_withdraw(NATIVE, &vault, 1_000), &[]));
    assert_eq!(err, "Pausable: not paused");

    suite.pause();
    let res = suite
        .execute(&admin, &emergency_withdraw(NATIVE, &vault, 1_000), &[])
        .unwrap();
    assert_eq!(bridge_attr(&res, "method"), "emergency_withdraw");
    assert_eq!(suite.native_balance(&vault), 1_000);
    assert_eq!(suite.native_balance(&suite.bridge), 0);
}

#[test]
fn emergency_withdraw_is_admin_only() {
    let mut suite = setup();
    let relayer = suite.relayer.clone();
    suite.pause();

    let err = root_err(suite.execute(&relayer, &emergency_withdraw(NATIVE, &relayer, 1), &[]));
    assert_eq!(err, "AccessControl: account relayer is missing role admin");
}

#[test]
fn emergency_withdraw_moves_cw20() {
    let mut suite = setup();
    let user = suite.user.clone();
    let admin = suite.admin.clone();
    let token = suite.token.clone();
    let vault = Addr::unchecked("vault");
    suite.send_cw20(&user, 700).unwrap();
    suite.pause();

    suite
        .execute(&admin, &emergency_withdraw(token.as_str(), &vault, 700), &[])
        .unwrap();
    assert_eq!(suite.cw20_balance(&token, &vault), 700);
}

#[test]
fn emergency_withdraw_rejects_zero_amount() {
    let mut suite = setup();
    let user = suite.user.clone();
    let admin = suite.admin.clone();
    let token = suite.token.clone();
    let vault = Addr::unchecked("vault");
    suite.send_cw20(&user, 700).unwrap();
    suite.pause();

    for asset in [NATIVE, token.as_str()] {
        let err = root_err(suite.execute(&admin, &emergency_withdraw(asset, &vault, 0), &[]));
        assert_eq!(err, "Invalid amount: Amount must be greater than zero");
    }
    assert_eq!(suite.cw20_balance(&token, &suite.bridge), 700);
}

#[test]
fn failed_native_emergency_withdraw_reverts() {
    let mut suite = setup();
    let admin = suite.admin.clone();
    let vault = Addr::unchecked("vault");
    suite.pause();

    let err = root_err(suite.execute(&admin, &emergency_withdraw(NATIVE, &vault, 1), &[]));
    assert_eq!(err, "Failed to send native funds");
}

// ============================================================================
// Registry & Cooldown Configuration
// ============================================================================

#[test]
fn add_token_event_carries_all_fields_and_readd_updates() {
    let mut suite = setup();
    let token = suite.token.clone();

    let res = suite.add_token(token.as_str(), "0xother", CHAIN_B, 25).unwrap();
    assert_eq!(bridge_attr(&res, "method"), "add_token");
    assert_eq!(bridge_attr(&res, "asset"), token.as_str());
    assert_eq!(bridge_attr(&res, "asset_on_chain"), "0xother");
    assert_eq!(bridge_attr(&res, "chain_id"), CHAIN_B.to_string());
    assert_eq!(bridge_attr(&res, "min_amount"), "25");

    let info: Option<TokenResponse> = suite.query(&QueryMsg::Token {
        asset: token.to_string(),
    });
    let info = info.unwrap();
    assert!(info.supported);
    assert!(!info.is_native);
    assert_eq!(info.min_amount, Uint128::new(25));

    // the earlier chain mapping is untouched
    let on_a: Option<String> = suite.query(&QueryMsg::OtherChainToken {
        asset: token.to_string(),
        chain_id: CHAIN_A,
    });
    assert_eq!(on_a.as_deref(), Some(TOKEN_ON_CHAIN_A));
}

#[test]
fn add_token_is_admin_only() {
    let mut suite = setup();
    let user = suite.user.clone();
    let token = suite.token.clone();

    let err = root_err(suite.execute(
        &user,
        &ExecuteMsg::AddToken {
            asset: token.to_string(),
            asset_on_chain: "0x1".to_string(),
            chain_id: CHAIN_A,
            min_amount: Uint128::zero(),
        },
        &[],
    ));
    assert_eq!(err, "AccessControl: account user is missing role admin");
}

#[test]
fn min_amount_for_unknown_token_does_not_enable_it() {
    let mut suite = setup();
    let admin = suite.admin.clone();
    let other = instantiate_cw20(&mut suite.app, &admin, "Other Token", "OTH", &[&admin]);

    suite
        .execute(
            &admin,
            &ExecuteMsg::SetMinAmountForToken {
                asset: other.to_string(),
                min_amount: Uint128::new(9),
            },
            &[],
        )
        .unwrap();

    let supported: bool = suite.query(&QueryMsg::TokenIsSupported {
        asset: other.to_string(),
    });
    assert!(!supported);
    let min: Uint128 = suite.query(&QueryMsg::MinAmountForToken {
        asset: other.to_string(),
    });
    assert_eq!(min, Uint128::new(9));
}

#[test]
fn tokens_are_listed_in_pages() {
    let mut suite = setup();
    let token = suite.token.clone();

    let page: TokensResponse = suite.query(&QueryMsg::Tokens {
        start_after: None,
        limit: Some(1),
    });
    assert_eq!(page.tokens.len(), 1);

    let rest: TokensResponse = suite.query(&QueryMsg::Tokens {
        start_after: Some(page.tokens[0].asset.clone()),
        limit: None,
    });
    assert_eq!(rest.tokens.len(), 1);

    let mut all: Vec<String> = page
        .tokens
        .into_iter()
        .chain(rest.tokens)
        .map(|t| t.asset)
        .collect();
    all.sort();
    let mut expected = vec![token.to_string(), NATIVE.to_string()];
    expected.sort();
    assert_eq!(all, expected);
}

#[test]
fn refund_cooldown_has_a_ceiling() {
    let mut suite = setup();
    let admin = suite.admin.clone();
    let user = suite.user.clone();

    let err = root_err(suite.execute(
        &admin,
        &ExecuteMsg::SetTimeToWaitBeforeRefund {
            seconds: 10_000_000,
        },
        &[],
    ));
    assert_eq!(err, "Min time to wait before refund is too big: 10000000");

    suite
        .execute(&admin, &ExecuteMsg::SetTimeToWaitBeforeRefund { seconds: 100 }, &[])
        .unwrap();
    let res: MinTimeToWaitBeforeRefundResponse =
        suite.query(&QueryMsg::MinTimeToWaitBeforeRefund {});
    assert_eq!(res.seconds, 100);

    let err = root_err(suite.execute(
        &user,
        &ExecuteMsg::SetTimeToWaitBeforeRefund { seconds: 1 },
        &[],
    ));
    assert_eq!(err, "AccessControl: account user is missing role admin");
}

#[test]
fn supported_chains_can_be_added_and_removed() {
    let mut suite = setup();
    let admin = suite.admin.clone();
    let user = suite.user.clone();

    suite
        .execute(&admin, &ExecuteMsg::AddSupportedChain { chain_id: 7 }, &[])
        .unwrap();
    suite
        .execute(
            &admin,
            &ExecuteMsg::RemoveSupportedChain { chain_id: CHAIN_A },
            &[],
        )
        .unwrap();

    let chains: SupportedChainsResponse = suite.query(&QueryMsg::SupportedChains {
        start_after: None,
        limit: None,
    });
    assert_eq!(chains.chain_ids, vec![CHAIN_B, 7]);

    let err = root_err(suite.send_native(&user, 1_000));
    assert_eq!(err, "Chain is not supported: 2");
}

#[test]
fn deposits_are_listed_in_nonce_order() {
    let mut suite = setup();
    let user = suite.user.clone();
    for _ in 0..3 {
        suite.send_native(&user, 1_000).unwrap();
    }

    let page: DepositsResponse = suite.query(&QueryMsg::Deposits {
        start_after: Some(0),
        limit: Some(5),
    });
    let nonces: Vec<u64> = page.deposits.iter().map(|d| d.nonce).collect();
    assert_eq!(nonces, vec![1, 2]);
    assert_eq!(
        page.deposits[0].refundable_at,
        page.deposits[0].deposited_at.plus_seconds(REFUND_DELAY)
    );
}

// ============================================================================
// Roles
// ============================================================================

#[test]
fn roles_can_be_granted_and_revoked() {
    let mut suite = setup();
    let admin = suite.admin.clone();
    let stranger = suite.stranger.clone();

    let res = suite
        .execute(
            &admin,
            &ExecuteMsg::GrantRole {
                role: Role::Admin,
                account: stranger.to_string(),
            },
            &[],
        )
        .unwrap();
    assert_eq!(bridge_attr(&res, "role"), "admin");

    // the new admin can now remove the original one
    suite
        .execute(
            &stranger,
            &ExecuteMsg::RevokeRole {
                role: Role::Admin,
                account: admin.to_string(),
            },
            &[],
        )
        .unwrap();

    let members: RoleMembersResponse = suite.query(&QueryMsg::RoleMembers { role: Role::Admin });
    assert_eq!(members.members, vec![stranger]);

    let err = root_err(suite.execute(&admin, &ExecuteMsg::Pause {}, &[]));
    assert_eq!(err, "AccessControl: account admin is missing role admin");
}

#[test]
fn last_admin_cannot_leave() {
    let mut suite = setup();
    let admin = suite.admin.clone();

    let err = root_err(suite.execute(
        &admin,
        &ExecuteMsg::RevokeRole {
            role: Role::Admin,
            account: admin.to_string(),
        },
        &[],
    ));
    assert_eq!(err, "Cannot remove the last admin");

    let err = root_err(suite.execute(
        &admin,
        &ExecuteMsg::RenounceRole { role: Role::Admin },
        &[],
    ));
    assert_eq!(err, "Cannot remove the last admin");
}

#[test]
fn relayer_can_renounce_its_role() {
    let mut suite = setup();
    let relayer = suite.relayer.clone();
    let user = suite.user.clone();

    suite
        .execute(
            &relayer,
            &ExecuteMsg::RenounceRole {
                role: Role::Relayer,
            },
            &[],
        )
        .unwrap();

    let still: bool = suite.query(&QueryMsg::HasRole {
        role: Role::Relayer,
        account: relayer.to_string(),
    });
    assert!(!still);

    let err = root_err(suite.withdraw(&relayer, NATIVE, &user, 1, 1));
    assert_eq!(err, "AccessControl: account relayer is missing role relayer");

    // nothing left to renounce
    let err = root_err(suite.execute(
        &relayer,
        &ExecuteMsg::RenounceRole {
            role: Role::Relayer,
        },
        &[],
    ));
    assert_eq!(err, "AccessControl: account relayer is missing role relayer");
}

#[test]
fn only_admin_grants_roles() {
    let mut suite = setup();
    let relayer = suite.relayer.clone();
    let user = suite.user.clone();

    let err = root_err(suite.execute(
        &relayer,
        &ExecuteMsg::GrantRole {
            role: Role::Relayer,
            account: user.to_string(),
        },
        &[],
    ));
    assert_eq!(err, "AccessControl: account relayer is missing role admin");
}

// ============================================================================
// Migrate
// ============================================================================

#[test]
fn wasm_admin_can_migrate_to_new_code() {
    let mut suite = setup();
    let admin = suite.admin.clone();
    let stranger = suite.stranger.clone();
    let bridge = suite.bridge.clone();
    let new_code_id = suite.app.store_code(contract_bridge());

    suite
        .app
        .migrate_contract(stranger, bridge.clone(), &MigrateMsg {}, new_code_id)
        .unwrap_err();

    let res = suite
        .app
        .migrate_contract(admin, bridge, &MigrateMsg {}, new_code_id)
        .unwrap();
    assert_eq!(bridge_attr(&res, "method"), "migrate");
    assert_eq!(bridge_attr(&res, "to_version"), env!("CARGO_PKG_VERSION"));

    // state survives the code swap
    let config: ConfigResponse = suite.query(&QueryMsg::Config {});
    assert_eq!(config.native_token, NATIVE);
}

#[test]
fn migrate_refuses_foreign_contract() {
    let mut suite = setup();
    let admin = suite.admin.clone();
    let token = suite.token.clone();

    let err = suite
        .app
        .migrate_contract(admin, token, &MigrateMsg {}, suite.bridge_code_id)
        .unwrap_err();
    assert!(err
        .root_cause()
        .to_string()
        .starts_with("Cannot migrate from crates.io:cw20-base"));
}
