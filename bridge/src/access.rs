//! Role-based access control.
//!
//! Every execute message maps to an [`Operation`], and every operation has a
//! [`Policy`]: the role it needs and the pause state it may run in. The entry
//! point resolves the caller's roles once into an [`AuthContext`] and checks
//! the policy before dispatching, so handlers never repeat the check.

use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Order, StdResult, Storage};

use crate::error::ContractError;
use crate::msg::ExecuteMsg;
use crate::state::{Config, ROLES};

#[cw_serde]
#[derive(Copy, Eq)]
pub enum Role {
    /// Configuration, pause, emergency recovery and swap setup
    Admin,
    /// Releases funds and blocks refunds
    Relayer,
}

impl Role {
    pub const fn key(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Relayer => "relayer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Pause state an operation is allowed to run in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PauseGate {
    Any,
    WhenNotPaused,
    WhenPaused,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Policy {
    pub role: Option<Role>,
    pub pause: PauseGate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Send,
    SendWithSwap,
    Withdraw,
    WithdrawWithSwap,
    Refund,
    BlockRefund,
    EmergencyWithdraw,
    Pause,
    Unpause,
    AddToken,
    SetMinAmountForToken,
    SetOtherChainToken,
    AddSupportedChain,
    RemoveSupportedChain,
    SetTimeToWaitBeforeRefund,
    GrantRole,
    RevokeRole,
    RenounceRole,
    InitializeSwapRouter,
    SetPathForTokenToToken,
}

impl Operation {
    /// Operation → (required role, pause gate).
    ///
    /// `Refund` carries no role here: admins, relayers and the depositor may
    /// all call it, and the handler decides which rules apply to whom.
    pub const fn policy(self) -> Policy {
        use Operation::*;
        let (role, pause) = match self {
            Send | SendWithSwap | Refund => (None, PauseGate::WhenNotPaused),
            Withdraw | WithdrawWithSwap => (Some(Role::Relayer), PauseGate::WhenNotPaused),
            BlockRefund => (Some(Role::Relayer), PauseGate::Any),
            EmergencyWithdraw => (Some(Role::Admin), PauseGate::WhenPaused),
            RenounceRole => (None, PauseGate::Any),
            Pause
            | Unpause
            | AddToken
            | SetMinAmountForToken
            | SetOtherChainToken
            | AddSupportedChain
            | RemoveSupportedChain
            | SetTimeToWaitBeforeRefund
            | GrantRole
            | RevokeRole
            | InitializeSwapRouter
            | SetPathForTokenToToken => (Some(Role::Admin), PauseGate::Any),
        };
        Policy { role, pause }
    }
}

impl From<&ExecuteMsg> for Operation {
    fn from(msg: &ExecuteMsg) -> Self {
        match msg {
            ExecuteMsg::Send { .. } => Operation::Send,
            ExecuteMsg::Withdraw { .. } => Operation::Withdraw,
            ExecuteMsg::Refund { .. } => Operation::Refund,
            ExecuteMsg::BlockRefund { .. } => Operation::BlockRefund,
            ExecuteMsg::EmergencyWithdraw { .. } => Operation::EmergencyWithdraw,
            ExecuteMsg::Pause {} => Operation::Pause,
            ExecuteMsg::Unpause {} => Operation::Unpause,
            ExecuteMsg::AddToken { .. } => Operation::AddToken,
            ExecuteMsg::SetMinAmountForToken { .. } => Operation::SetMinAmountForToken,
            ExecuteMsg::SetOtherChainToken { .. } => Operation::SetOtherChainToken,
            ExecuteMsg::AddSupportedChain { .. } => Operation::AddSupportedChain,
            ExecuteMsg::RemoveSupportedChain { .. } => Operation::RemoveSupportedChain,
            ExecuteMsg::SetTimeToWaitBeforeRefund { .. } => Operation::SetTimeToWaitBeforeRefund,
            ExecuteMsg::GrantRole { .. } => Operation::GrantRole,
            ExecuteMsg::RevokeRole { .. } => Operation::RevokeRole,
            ExecuteMsg::RenounceRole { .. } => Operation::RenounceRole,
            ExecuteMsg::SendWithSwap { .. } => Operation::SendWithSwap,
            ExecuteMsg::WithdrawWithSwap { .. } => Operation::WithdrawWithSwap,
            ExecuteMsg::InitializeSwapRouter { .. } => Operation::InitializeSwapRouter,
            ExecuteMsg::SetPathForTokenToToken { .. } => Operation::SetPathForTokenToToken,
        }
    }
}

/// Caller identity and roles, resolved once per message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthContext {
    pub sender: Addr,
    pub is_admin: bool,
    pub is_relayer: bool,
}

impl AuthContext {
    pub fn load(storage: &dyn Storage, sender: &Addr) -> StdResult<Self> {
        Ok(Self {
            sender: sender.clone(),
            is_admin: has_role(storage, Role::Admin, sender)?,
            is_relayer: has_role(storage, Role::Relayer, sender)?,
        })
    }

    pub fn has_role(&self, role: Role) -> bool {
        match role {
            Role::Admin => self.is_admin,
            Role::Relayer => self.is_relayer,
        }
    }

    pub fn require(&self, role: Role) -> Result<(), ContractError> {
        if self.has_role(role) {
            Ok(())
        } else {
            Err(ContractError::MissingRole {
                account: self.sender.to_string(),
                role,
            })
        }
    }
}

impl Policy {
    /// Pause gate first, then role.
    pub fn check(&self, config: &Config, auth: &AuthContext) -> Result<(), ContractError> {
        match self.pause {
            PauseGate::WhenNotPaused if config.paused => return Err(ContractError::Paused),
            PauseGate::WhenPaused if !config.paused => return Err(ContractError::NotPaused),
            _ => {}
        }
        if let Some(role) = self.role {
            auth.require(role)?;
        }
        Ok(())
    }
}

// ============================================================================
// Role Storage
// ============================================================================

pub fn has_role(storage: &dyn Storage, role: Role, account: &Addr) -> StdResult<bool> {
    Ok(ROLES
        .may_load(storage, (role.key(), account))?
        .unwrap_or(false))
}

pub fn grant_role(storage: &mut dyn Storage, role: Role, account: &Addr) -> StdResult<()> {
    ROLES.save(storage, (role.key(), account), &true)
}

/// Revoke a role. The last admin cannot be removed.
pub fn revoke_role(
    storage: &mut dyn Storage,
    role: Role,
    account: &Addr,
) -> Result<(), ContractError> {
    if role == Role::Admin && has_role(storage, role, account)? {
        let admins = role_members(storage, Role::Admin)?;
        if admins.len() <= 1 {
            return Err(ContractError::CannotRemoveLastAdmin);
        }
    }
    ROLES.remove(storage, (role.key(), account));
    Ok(())
}

pub fn role_members(storage: &dyn Storage, role: Role) -> StdResult<Vec<Addr>> {
    ROLES
        .prefix(role.key())
        .range(storage, None, None, Order::Ascending)
        .filter_map(|item| match item {
            Ok((addr, true)) => Some(Ok(addr)),
            Ok((_, false)) => None,
            Err(e) => Some(Err(e)),
        })
        .collect()
}
