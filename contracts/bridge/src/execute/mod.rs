//! Execute handlers for the bridge contract.
//!
//! - `send` - burn-and-dispatch for outgoing transfers
//! - `relay` - authenticated relay, mint sequencing and recipient hooks
//!
//! Both modules are public so bridge flavours built on top of this crate
//! can reuse the same send and relay pipeline.

pub mod relay;
pub mod send;

pub use relay::{
    authenticate, begin_relay, decode_message, execute_receive_message, handle_relay_reply,
    RelayTransfer,
};
pub use send::{dispatch_send, execute_send, SendRequest};
