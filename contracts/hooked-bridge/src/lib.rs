//! Hooked Interop Bridge Contract
//!
//! Same send/relay pipeline as the plain bridge, with the relay callback
//! replaced by two optional recipient hooks selected by a bitmask:
//!
//! - `PreMint` - `BeforeRelay` on the recipient before the mint
//! - `PostMint` - `AfterRelay` on the recipient after the mint and the
//!   `relay_erc20` event
//!
//! Hooks are best-effort. A failing hook is reported and skipped; it never
//! blocks the mint.

pub mod contract;
pub mod error;
pub mod msg;

pub use crate::error::ContractError;
