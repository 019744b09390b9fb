//! Wildcard mask classification.
//!
//! Splits the don't-care bits of a wildcard into the contiguous low-order run
//! that a prefix length can express and the scattered bits that must be
//! enumerated.

use crate::models::IpBits;

/// How the don't-care bits of a wildcard divide up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildcardBits {
    /// Width `L` of the wildcard's address family.
    pub max_length: u8,
    /// Length of the don't-care run anchored at bit 0.
    pub hostmask_length: u8,
    /// LSB-relative indices of the remaining don't-care bits, ascending.
    pub expand_positions: Vec<u8>,
}

impl WildcardBits {
    pub fn classify(wildcard: IpBits) -> WildcardBits {
        let max_length = wildcard.max_length();
        let dont_care: Vec<u8> = (0..max_length).filter(|&i| wildcard.bit(i)).collect();

        // The k-th don't-care bit sits at index k only while the run from bit 0 is unbroken.
        let hostmask_length = dont_care
            .iter()
            .enumerate()
            .take_while(|&(pos, &bit)| pos == bit as usize)
            .count();

        WildcardBits {
            max_length,
            hostmask_length: hostmask_length as u8,
            expand_positions: dont_care[hostmask_length..].to_vec(),
        }
    }

    /// Prefix length shared by every expanded network.
    pub fn prefix_len(&self) -> u8 {
        self.max_length - self.hostmask_length
    }

    /// Number of networks the expansion yields, `2^k`.
    pub fn expansion_size(&self) -> u128 {
        1u128 << self.expand_positions.len()
    }

    /// True when the wildcard is an ordinary inverted netmask.
    pub fn is_contiguous(&self) -> bool {
        self.expand_positions.is_empty()
    }
}
