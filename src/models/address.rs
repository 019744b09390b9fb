//! Version-tagged address integers.
//!
//! Both IPv4 and IPv6 values are carried in a `u128` so the wildcard
//! arithmetic is written once. IPv4 values only ever occupy the low 32 bits.

use crate::error::WildcardError;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const IPV4_LENGTH: u8 = 32;
/// Maximum length for an IPv6 prefix (128 bits).
pub const IPV6_LENGTH: u8 = 128;

/// IP protocol version of an address, wildcard or network.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IpVersion {
    V4,
    V6,
}

impl IpVersion {
    /// Bit width `L` of addresses of this version.
    pub fn max_length(self) -> u8 {
        match self {
            IpVersion::V4 => IPV4_LENGTH,
            IpVersion::V6 => IPV6_LENGTH,
        }
    }

    /// Mask with all `max_length()` low bits set.
    pub fn all_ones(self) -> u128 {
        match self {
            IpVersion::V4 => u32::MAX as u128,
            IpVersion::V6 => u128::MAX,
        }
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IpVersion::V4 => write!(f, "IPv4"),
            IpVersion::V6 => write!(f, "IPv6"),
        }
    }
}

/// A parsed address (or wildcard) as a fixed-width integer plus its version.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IpBits {
    pub bits: u128,
    pub version: IpVersion,
}

impl IpBits {
    /// Build from an integer, rejecting IPv4 values wider than 32 bits.
    pub fn new(bits: u128, version: IpVersion) -> Result<IpBits, WildcardError> {
        if bits & !version.all_ones() != 0 {
            return Err(WildcardError::Parse {
                input: format!("{bits:#x}"),
                reason: format!("value does not fit in {version}"),
            });
        }
        Ok(IpBits { bits, version })
    }

    pub fn max_length(&self) -> u8 {
        self.version.max_length()
    }

    /// Whether the bit at LSB-relative `index` is set.
    pub fn bit(&self, index: u8) -> bool {
        (self.bits >> index) & 1 == 1
    }

    /// Convert back to a `std::net` address.
    pub fn to_ip_addr(&self) -> IpAddr {
        match self.version {
            IpVersion::V4 => IpAddr::V4(Ipv4Addr::from(self.bits as u32)),
            IpVersion::V6 => IpAddr::V6(Ipv6Addr::from(self.bits)),
        }
    }
}

impl From<IpAddr> for IpBits {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => IpBits {
                bits: u32::from(v4) as u128,
                version: IpVersion::V4,
            },
            IpAddr::V6(v6) => IpBits {
                bits: u128::from(v6),
                version: IpVersion::V6,
            },
        }
    }
}

impl FromStr for IpBits {
    type Err = WildcardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let addr = IpAddr::from_str(s).map_err(|e| WildcardError::Parse {
            input: s.to_string(),
            reason: e.to_string(),
        })?;
        Ok(IpBits::from(addr))
    }
}

impl fmt::Display for IpBits {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_ip_addr())
    }
}
