//! Domain identifiers and the explicit same-address peer table.
//!
//! Cross-domain authentication relies on every protocol instance knowing the
//! address its counterpart occupies on each other domain. Instead of comparing
//! against the executing contract's own address at relay time, each contract
//! receives the table at instantiation and resolves it once.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Api, StdError, StdResult};

/// Identifier of an execution domain (chain).
pub type DomainId = u64;

/// Peer entry supplied at instantiation.
#[cw_serde]
pub struct DomainPeer {
    /// Domain the peer lives on
    pub domain: DomainId,
    /// Peer address on that domain. `None` means the peer is deployed at the
    /// same address as the contract being instantiated.
    pub address: Option<String>,
}

impl DomainPeer {
    /// Peer deployed at the same address as the local contract.
    pub fn same_address(domain: DomainId) -> Self {
        Self {
            domain,
            address: None,
        }
    }

    pub fn at(domain: DomainId, address: impl Into<String>) -> Self {
        Self {
            domain,
            address: Some(address.into()),
        }
    }
}

/// Resolve peer entries against the local contract address.
///
/// Duplicate domains are rejected so a lookup can never be ambiguous.
pub fn resolve_peers(
    api: &dyn Api,
    self_address: &Addr,
    peers: Vec<DomainPeer>,
) -> StdResult<Vec<(DomainId, Addr)>> {
    let mut resolved: Vec<(DomainId, Addr)> = Vec::with_capacity(peers.len());
    for peer in peers {
        if resolved.iter().any(|(domain, _)| *domain == peer.domain) {
            return Err(StdError::generic_err(format!(
                "duplicate peer for domain {}",
                peer.domain
            )));
        }
        let address = match peer.address {
            Some(address) => api.addr_validate(&address)?,
            None => self_address.clone(),
        };
        resolved.push((peer.domain, address));
    }
    Ok(resolved)
}

/// Look up the peer registered for `domain`.
pub fn peer_for(peers: &[(DomainId, Addr)], domain: DomainId) -> Option<&Addr> {
    peers
        .iter()
        .find(|(peer_domain, _)| *peer_domain == domain)
        .map(|(_, address)| address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::MockApi;

    #[test]
    fn test_same_address_peer_resolves_to_self() {
        let api = MockApi::default();
        let me = Addr::unchecked("bridge");
        let peers = resolve_peers(
            &api,
            &me,
            vec![DomainPeer::same_address(1), DomainPeer::at(2, "other")],
        )
        .unwrap();

        assert_eq!(peer_for(&peers, 1), Some(&me));
        assert_eq!(peer_for(&peers, 2), Some(&Addr::unchecked("other")));
        assert_eq!(peer_for(&peers, 3), None);
    }

    #[test]
    fn test_duplicate_domain_rejected() {
        let api = MockApi::default();
        let err = resolve_peers(
            &api,
            &Addr::unchecked("bridge"),
            vec![DomainPeer::same_address(7), DomainPeer::at(7, "other")],
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate peer for domain 7"));
    }
}
