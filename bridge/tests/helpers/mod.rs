//! Shared cw-multi-test setup for the bridge integration tests.

#![allow(dead_code)]

use cosmwasm_std::{coins, Addr, Coin, Empty, Uint128};
use cw20::{BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};
use serde::de::DeserializeOwned;

use swap_bridge::msg::{ExecuteMsg, InstantiateMsg, NonceResponse, QueryMsg};

pub const NATIVE: &str = "uluna";
/// Supported, native asset mapped to `NATIVE_ON_CHAIN_A`
pub const CHAIN_A: u64 = 2;
/// Supported, native asset not bridgeable
pub const CHAIN_B: u64 = 3;
pub const UNSUPPORTED_CHAIN: u64 = 99;
pub const NATIVE_ON_CHAIN_A: &str = "0xnative";
pub const TOKEN_ON_CHAIN_A: &str = "0xtoken";
pub const NATIVE_MIN: u128 = 100;
pub const TOKEN_MIN: u128 = 10;
pub const REFUND_DELAY: u64 = 300;
pub const FOREIGN_RECIPIENT: &str = "0x00000000000000000000000000000000000000aa";
pub const INITIAL_BALANCE: u128 = 1_000_000_000;

pub fn contract_bridge() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        swap_bridge::contract::execute,
        swap_bridge::contract::instantiate,
        swap_bridge::contract::query,
    )
    .with_reply(swap_bridge::contract::reply)
    .with_migrate(swap_bridge::contract::migrate);
    Box::new(contract)
}

pub fn contract_cw20() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

pub fn contract_router() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        mock_router::contract::execute,
        mock_router::contract::instantiate,
        mock_router::contract::query,
    );
    Box::new(contract)
}

pub fn default_instantiate_msg(relayer: &Addr, admin: &Addr) -> InstantiateMsg {
    InstantiateMsg {
        supported_chains: vec![CHAIN_A, CHAIN_B],
        native_token: NATIVE.to_string(),
        native_min_amount: Uint128::new(NATIVE_MIN),
        native_token_on_chains: vec![NATIVE_ON_CHAIN_A.to_string(), String::new()],
        relayer: relayer.to_string(),
        min_time_to_wait_before_refund: REFUND_DELAY,
        admin: Some(admin.to_string()),
    }
}

pub struct Suite {
    pub app: App,
    pub bridge: Addr,
    pub bridge_code_id: u64,
    /// CW20 registered for `CHAIN_A` by `setup`
    pub token: Addr,
    pub admin: Addr,
    pub relayer: Addr,
    pub user: Addr,
    pub stranger: Addr,
}

/// Bridge with the native asset and one CW20 registered, and funded accounts.
pub fn setup() -> Suite {
    let mut app = App::default();

    let admin = Addr::unchecked("admin");
    let relayer = Addr::unchecked("relayer");
    let user = Addr::unchecked("user");
    let stranger = Addr::unchecked("stranger");

    app.init_modules(|router, _, storage| {
        for account in [&admin, &relayer, &user, &stranger] {
            router
                .bank
                .init_balance(
                    storage,
                    account,
                    vec![
                        Coin::new(INITIAL_BALANCE, NATIVE),
                        Coin::new(INITIAL_BALANCE, "uusd"),
                    ],
                )
                .unwrap();
        }
    });

    let bridge_code_id = app.store_code(contract_bridge());
    let bridge = app
        .instantiate_contract(
            bridge_code_id,
            admin.clone(),
            &default_instantiate_msg(&relayer, &admin),
            &[],
            "swap-bridge",
            Some(admin.to_string()),
        )
        .unwrap();

    let token = instantiate_cw20(&mut app, &admin, "Bridge Token", "BRG", &[&user, &admin]);

    let mut suite = Suite {
        app,
        bridge,
        bridge_code_id,
        token,
        admin,
        relayer,
        user,
        stranger,
    };

    let token = suite.token.to_string();
    suite.add_token(&token, TOKEN_ON_CHAIN_A, CHAIN_A, TOKEN_MIN).unwrap();
    suite
}

pub fn instantiate_cw20(
    app: &mut App,
    admin: &Addr,
    name: &str,
    symbol: &str,
    holders: &[&Addr],
) -> Addr {
    let code_id = app.store_code(contract_cw20());
    app.instantiate_contract(
        code_id,
        admin.clone(),
        &cw20_base::msg::InstantiateMsg {
            name: name.to_string(),
            symbol: symbol.to_string(),
            decimals: 6,
            initial_balances: holders
                .iter()
                .map(|holder| Cw20Coin {
                    address: holder.to_string(),
                    amount: Uint128::new(INITIAL_BALANCE),
                })
                .collect(),
            mint: None,
            marketing: None,
        },
        &[],
        symbol,
        Some(admin.to_string()),
    )
    .unwrap()
}

/// Attribute of the bridge's own event (the one carrying `method`).
pub fn bridge_attr(res: &AppResponse, key: &str) -> String {
    res.events
        .iter()
        .filter(|e| e.ty == "wasm" && e.attributes.iter().any(|a| a.key == "method"))
        .flat_map(|e| e.attributes.iter())
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
        .unwrap_or_else(|| panic!("attribute {key} not found"))
}

/// Keys of the bridge's event in emission order, without the contract address.
pub fn bridge_attr_keys(res: &AppResponse) -> Vec<String> {
    res.events
        .iter()
        .filter(|e| e.ty == "wasm" && e.attributes.iter().any(|a| a.key == "method"))
        .flat_map(|e| e.attributes.iter())
        .filter(|a| a.key != "_contract_address" && a.key != "method")
        .map(|a| a.key.clone())
        .collect()
}

pub fn root_err(res: anyhow::Result<AppResponse>) -> String {
    res.unwrap_err().root_cause().to_string()
}

impl Suite {
    pub fn execute(
        &mut self,
        sender: &Addr,
        msg: &ExecuteMsg,
        funds: &[Coin],
    ) -> anyhow::Result<AppResponse> {
        self.app
            .execute_contract(sender.clone(), self.bridge.clone(), msg, funds)
    }

    pub fn query<T: DeserializeOwned>(&self, msg: &QueryMsg) -> T {
        self.app
            .wrap()
            .query_wasm_smart(self.bridge.clone(), msg)
            .unwrap()
    }

    pub fn advance(&mut self, seconds: u64) {
        self.app
            .update_block(|block| block.time = block.time.plus_seconds(seconds));
    }

    pub fn now(&self) -> u64 {
        self.app.block_info().time.seconds()
    }

    pub fn native_balance(&self, account: &Addr) -> u128 {
        self.app
            .wrap()
            .query_balance(account, NATIVE)
            .unwrap()
            .amount
            .u128()
    }

    pub fn cw20_balance(&self, token: &Addr, account: &Addr) -> u128 {
        let res: BalanceResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                token.clone(),
                &Cw20QueryMsg::Balance {
                    address: account.to_string(),
                },
            )
            .unwrap();
        res.balance.u128()
    }

    pub fn next_nonce(&self) -> u64 {
        let res: NonceResponse = self.query(&QueryMsg::Nonce {});
        res.nonce
    }

    pub fn nonce_is_used(&self, nonce: u64) -> bool {
        self.query(&QueryMsg::NonceIsUsed { nonce })
    }

    pub fn add_token(
        &mut self,
        asset: &str,
        asset_on_chain: &str,
        chain_id: u64,
        min_amount: u128,
    ) -> anyhow::Result<AppResponse> {
        let admin = self.admin.clone();
        self.execute(
            &admin,
            &ExecuteMsg::AddToken {
                asset: asset.to_string(),
                asset_on_chain: asset_on_chain.to_string(),
                chain_id,
                min_amount: Uint128::new(min_amount),
            },
            &[],
        )
    }

    pub fn approve(&mut self, token: &Addr, owner: &Addr, spender: &Addr, amount: u128) {
        self.app
            .execute_contract(
                owner.clone(),
                token.clone(),
                &Cw20ExecuteMsg::IncreaseAllowance {
                    spender: spender.to_string(),
                    amount: Uint128::new(amount),
                    expires: None,
                },
                &[],
            )
            .unwrap();
    }

    pub fn send_native(&mut self, sender: &Addr, amount: u128) -> anyhow::Result<AppResponse> {
        self.execute(
            sender,
            &ExecuteMsg::Send {
                asset: NATIVE.to_string(),
                recipient: FOREIGN_RECIPIENT.to_string(),
                destination_chain_id: CHAIN_A,
                amount: Uint128::new(amount),
            },
            &coins(amount, NATIVE),
        )
    }

    pub fn send_cw20(&mut self, sender: &Addr, amount: u128) -> anyhow::Result<AppResponse> {
        let token = self.token.clone();
        let bridge = self.bridge.clone();
        self.approve(&token, sender, &bridge, amount);
        self.execute(
            sender,
            &ExecuteMsg::Send {
                asset: token.to_string(),
                recipient: FOREIGN_RECIPIENT.to_string(),
                destination_chain_id: CHAIN_A,
                amount: Uint128::new(amount),
            },
            &[],
        )
    }

    pub fn withdraw(
        &mut self,
        sender: &Addr,
        asset: &str,
        recipient: &Addr,
        amount: u128,
        nonce: u64,
    ) -> anyhow::Result<AppResponse> {
        self.execute(
            sender,
            &ExecuteMsg::Withdraw {
                asset: asset.to_string(),
                recipient: recipient.to_string(),
                amount: Uint128::new(amount),
                source_chain_id: CHAIN_A,
                nonce,
            },
            &[],
        )
    }

    pub fn pause(&mut self) {
        let admin = self.admin.clone();
        self.execute(&admin, &ExecuteMsg::Pause {}, &[]).unwrap();
    }

    pub fn unpause(&mut self) {
        let admin = self.admin.clone();
        self.execute(&admin, &ExecuteMsg::Unpause {}, &[]).unwrap();
    }
}
