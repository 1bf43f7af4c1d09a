//! Multi-domain test harness for the interop bridge contracts.
//!
//! Each domain is its own cw-multi-test `App`. Every domain stores the same
//! codes and instantiates the same contracts in the same order, so each
//! contract ends up at the same address on every domain. A [`Network`]
//! plays the relayer, moving envelopes from a source messenger's outbox to
//! the destination messenger.

pub mod contracts;
pub mod events;
pub mod network;
pub mod recipient;

pub use network::{Deployment, Domain, Network, RELAYER};
