//! Expansion of an ACL (address, wildcard) pair into CIDR networks.

use super::wildcard::WildcardBits;
use crate::error::WildcardError;
use crate::models::{IpBits, NetworkBlock};

/// Largest number of scattered wildcard bits that will be expanded (2^8 = 256 networks).
pub const MAX_EXPAND_BITS: usize = 8;

/// Translate an ACL address and wildcard, given as text, into the networks it matches.
///
/// # Examples
/// ```
/// use acl_wildcard_calc::acl_with_wildcard_to_networks;
/// let nets = acl_with_wildcard_to_networks("172.18.161.2", "0.1.2.7").unwrap();
/// let nets: Vec<String> = nets.iter().map(|n| n.to_string()).collect();
/// assert_eq!(
///     nets,
///     ["172.18.161.0/29", "172.18.163.0/29", "172.19.161.0/29", "172.19.163.0/29"]
/// );
/// ```
pub fn acl_with_wildcard_to_networks(
    address_str: &str,
    wildcard_str: &str,
) -> Result<Vec<NetworkBlock>, WildcardError> {
    let address: IpBits = address_str.parse()?;
    let wildcard: IpBits = wildcard_str.parse()?;
    expand(address, wildcard)
}

/// Expand a parsed address and wildcard into networks.
///
/// The contiguous don't-care run from bit 0 becomes the prefix length. Every
/// other don't-care bit is enumerated, highest bit varying slowest, so the
/// result comes out in ascending address order.
pub fn expand(address: IpBits, wildcard: IpBits) -> Result<Vec<NetworkBlock>, WildcardError> {
    if address.version != wildcard.version {
        return Err(WildcardError::VersionMismatch {
            address: address.to_string(),
            address_version: address.version,
            wildcard: wildcard.to_string(),
            wildcard_version: wildcard.version,
        });
    }

    let split = WildcardBits::classify(wildcard);
    let to_expand = &split.expand_positions;
    if to_expand.len() > MAX_EXPAND_BITS {
        return Err(WildcardError::OversizedExpansion {
            wildcard: wildcard.to_string(),
            bits: to_expand.len(),
            max: MAX_EXPAND_BITS,
        });
    }

    let prefix_len = split.prefix_len();
    let mut networks = Vec::with_capacity(1 << to_expand.len());
    // Odometer: bit j of `counter` is the value forced into to_expand[j].
    for counter in 0u32..(1 << to_expand.len()) {
        let mut bits = address.bits;
        for (j, &index) in to_expand.iter().enumerate() {
            let sb_mask = 1u128 << index;
            if (counter >> j) & 1 == 1 {
                bits |= sb_mask;
            } else {
                bits &= !sb_mask;
            }
        }
        let ip = IpBits {
            bits,
            version: address.version,
        };
        networks.push(NetworkBlock::new(ip, prefix_len)?);
    }

    Ok(networks)
}
