//! Error taxonomy for wildcard expansion.

use crate::models::IpVersion;

/// Errors returned while turning an (address, wildcard) pair into networks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WildcardError {
    #[error("Invalid address '{input}': {reason}")]
    Parse { input: String, reason: String },

    #[error("IP version mismatch: address {address} is {address_version}, wildcard {wildcard} is {wildcard_version}")]
    VersionMismatch {
        address: String,
        address_version: IpVersion,
        wildcard: String,
        wildcard_version: IpVersion,
    },

    #[error("Wildcard {wildcard} contains {bits} non-contiguous wildcard bits, at most {max} are supported")]
    OversizedExpansion { wildcard: String, bits: usize, max: usize },

    #[error("Prefix length /{prefix} is too long for {version}")]
    Prefix { prefix: u8, version: IpVersion },
}
