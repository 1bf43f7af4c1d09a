//! Hash computation for cross-domain message identifiers
//!
//! The message identifier correlates a dispatch on the source domain with
//! its delivery on the destination domain. Both the transport and the
//! contracts that need to report the identifier up front compute it with
//! the same function.
//!
//! # Byte Layout (192 bytes total)
//! - Bytes 0-31:    source domain (uint256, big-endian, left-padded)
//! - Bytes 32-63:   destination domain (uint256, big-endian, left-padded)
//! - Bytes 64-95:   nonce (uint256, big-endian, left-padded)
//! - Bytes 96-127:  keccak256(sender)
//! - Bytes 128-159: keccak256(target)
//! - Bytes 160-191: keccak256(message)

use tiny_keccak::{Hasher, Keccak};

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Compute the identifier of a cross-domain message.
///
/// # Arguments
/// * `source` - Domain the message is dispatched from
/// * `destination` - Domain the message is delivered to
/// * `nonce` - Transport nonce on the source domain
/// * `sender` - Address that dispatched the message
/// * `target` - Address the message is delivered to
/// * `message` - Opaque payload bytes
pub fn compute_message_hash(
    source: u64,
    destination: u64,
    nonce: u64,
    sender: &str,
    target: &str,
    message: &[u8],
) -> [u8; 32] {
    let mut data = [0u8; 192];

    data[24..32].copy_from_slice(&source.to_be_bytes());
    data[32 + 24..64].copy_from_slice(&destination.to_be_bytes());
    data[64 + 24..96].copy_from_slice(&nonce.to_be_bytes());

    data[96..128].copy_from_slice(&keccak256(sender.as_bytes()));
    data[128..160].copy_from_slice(&keccak256(target.as_bytes()));
    data[160..192].copy_from_slice(&keccak256(message));

    keccak256(&data)
}

/// Convert bytes32 to hex string with 0x prefix
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keccak256_empty() {
        assert_eq!(
            bytes32_to_hex(&keccak256(b"")),
            "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_message_hash_binds_every_field() {
        let base = compute_message_hash(10, 20, 0, "bridge", "bridge", b"payload");

        assert_ne!(base, compute_message_hash(11, 20, 0, "bridge", "bridge", b"payload"));
        assert_ne!(base, compute_message_hash(10, 21, 0, "bridge", "bridge", b"payload"));
        assert_ne!(base, compute_message_hash(10, 20, 1, "bridge", "bridge", b"payload"));
        assert_ne!(base, compute_message_hash(10, 20, 0, "router", "bridge", b"payload"));
        assert_ne!(base, compute_message_hash(10, 20, 0, "bridge", "router", b"payload"));
        assert_ne!(base, compute_message_hash(10, 20, 0, "bridge", "bridge", b"payloaD"));
    }

    #[test]
    fn test_message_hash_preimage_is_six_words() {
        let mut preimage = Vec::with_capacity(192);
        for value in [1u64, 2, 3] {
            preimage.extend_from_slice(&[0u8; 24]);
            preimage.extend_from_slice(&value.to_be_bytes());
        }
        preimage.extend_from_slice(&keccak256(b"a"));
        preimage.extend_from_slice(&keccak256(b"b"));
        preimage.extend_from_slice(&keccak256(b"c"));
        assert_eq!(preimage.len(), 192);

        assert_eq!(
            compute_message_hash(1, 2, 3, "a", "b", b"c"),
            keccak256(&preimage)
        );
    }

    #[test]
    fn test_message_hash_is_deterministic() {
        let a = compute_message_hash(1, 2, 3, "a", "b", b"c");
        let b = compute_message_hash(1, 2, 3, "a", "b", b"c");
        assert_eq!(a, b);
    }

    #[test]
    fn test_hash_hex_format() {
        let hash = compute_message_hash(1, 2, 3, "a", "b", b"c");
        let hex = bytes32_to_hex(&hash);
        assert!(hex.starts_with("0x"));
        assert_eq!(hex.len(), 66);
        assert_eq!(hex::decode(&hex[2..]).unwrap(), hash.to_vec());
    }
}
