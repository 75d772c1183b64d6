//! Execute handlers for the swap bridge contract.
//!
//! Authorization and pause gating happen once in `contract::execute`; the
//! handlers here only validate their own arguments and state.
//! - `outgoing` - Send (and the deposit lock shared with SendWithSwap)
//! - `withdraw` - Relayer releases
//! - `refund` - Refund and BlockRefund
//! - `admin` - Pause, emergency withdraw and role management
//! - `config` - Token, chain and cooldown configuration
//! - `swap` - Swap router setup and the swap-augmented transfers

mod admin;
mod config;
mod outgoing;
mod refund;
mod swap;
mod withdraw;

pub use admin::*;
pub use config::*;
pub use outgoing::*;
pub use refund::*;
pub use swap::*;
pub use withdraw::*;
