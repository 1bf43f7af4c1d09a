//! Execute handlers for the swap router contract.
//!
//! - `proxy` - swap initiation on non-canonical domains
//! - `canonical` - swap resolution on the canonical domain

mod canonical;
mod proxy;

pub use canonical::*;
pub use proxy::*;
