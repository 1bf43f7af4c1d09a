//! Common - Shared Types and Interfaces for the Interop Bridge Contracts
//!
//! This package provides the wire types exchanged between domains and the
//! interfaces of the external collaborators (transport, ledger, recipient
//! hooks) used across the bridge, hooked bridge and swap router contracts.

pub mod domain;
pub mod hash;
pub mod hooks;
pub mod ledger;
pub mod message;
pub mod swap;
pub mod transport;

pub use domain::{resolve_peers, DomainId, DomainPeer};
pub use hooks::{HookConfigError, HookKind, HookSet, HooksConfig};
pub use message::BridgeMessage;
pub use swap::{PoolKey, SwapIntent};
pub use transport::{CrossDomainMsg, Envelope};
