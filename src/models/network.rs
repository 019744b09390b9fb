//! CIDR network blocks and prefix mask utilities.
//!
//! Provides [`NetworkBlock`] for representing an IPv4 or IPv6 network with a
//! prefix length, along with helper functions for mask calculations.

use super::address::{IpBits, IpVersion};
use crate::error::WildcardError;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Convert a prefix length to a netmask for the given version.
///
/// # Examples
/// ```
/// use acl_wildcard_calc::models::{get_cidr_mask, IpVersion};
/// assert_eq!(get_cidr_mask(24, IpVersion::V4).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8, version: IpVersion) -> Result<u128, WildcardError> {
    Ok(version.all_ones() & !get_host_mask(len, version)?)
}

/// Convert a prefix length to a hostmask (the inverse of the netmask).
pub fn get_host_mask(len: u8, version: IpVersion) -> Result<u128, WildcardError> {
    if len > version.max_length() {
        return Err(WildcardError::Prefix {
            prefix: len,
            version,
        });
    }
    let all_bits = version.all_ones();
    // Shifting a u128 by 128 overflows, a full-length prefix has no host bits.
    Ok(all_bits.checked_shr(len as u32).unwrap_or(0))
}

/// Get the network address for a given address and prefix length.
pub fn cut_addr(addr: IpBits, len: u8) -> Result<IpBits, WildcardError> {
    let mask = get_cidr_mask(len, addr.version)?;
    Ok(IpBits {
        bits: addr.bits & mask,
        version: addr.version,
    })
}

/// Calculate the broadcast (highest) address for a given address and prefix length.
pub fn broadcast_addr(addr: IpBits, len: u8) -> Result<IpBits, WildcardError> {
    let host_mask = get_host_mask(len, addr.version)?;
    Ok(IpBits {
        bits: (addr.bits & !host_mask) | host_mask,
        version: addr.version,
    })
}

/// An IPv4 or IPv6 network in CIDR form.
///
/// Host bits below the prefix are always zero.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct NetworkBlock {
    addr: IpBits,
    mask: u8,
}

impl NetworkBlock {
    /// Non-strict constructor: host bits of `addr` below `prefix_len` are cleared
    /// instead of being rejected.
    pub fn new(addr: IpBits, prefix_len: u8) -> Result<NetworkBlock, WildcardError> {
        let addr = cut_addr(addr, prefix_len)?;
        Ok(NetworkBlock {
            addr,
            mask: prefix_len,
        })
    }

    /// The (canonical) network address.
    pub fn network_address(&self) -> IpBits {
        self.addr
    }

    pub fn prefix_len(&self) -> u8 {
        self.mask
    }

    pub fn version(&self) -> IpVersion {
        self.addr.version
    }

    pub fn netmask(&self) -> IpBits {
        IpBits {
            bits: get_cidr_mask(self.mask, self.version()).unwrap_or_default(),
            version: self.version(),
        }
    }

    pub fn hostmask(&self) -> IpBits {
        IpBits {
            bits: get_host_mask(self.mask, self.version()).unwrap_or_default(),
            version: self.version(),
        }
    }

    /// Get the highest address in the network.
    pub fn broadcast_address(&self) -> IpBits {
        IpBits {
            bits: self.addr.bits | self.hostmask().bits,
            version: self.version(),
        }
    }

    /// Number of addresses in the block, `None` for the whole IPv6 space (2^128).
    pub fn num_addresses(&self) -> Option<u128> {
        1u128.checked_shl((self.version().max_length() - self.mask) as u32)
    }

    /// Whether `addr` falls inside this network. Addresses of another version never do.
    pub fn contains(&self, addr: IpBits) -> bool {
        addr.version == self.version() && addr.bits & self.netmask().bits == self.addr.bits
    }

    /// CIDR form, e.g. `10.0.0.0/24`.
    pub fn with_prefixlen(&self) -> String {
        format!("{}/{}", self.addr, self.mask)
    }

    /// Network and netmask, e.g. `10.0.0.0/255.255.255.0`.
    pub fn with_netmask(&self) -> String {
        format!("{}/{}", self.addr, self.netmask())
    }

    /// Network and hostmask, e.g. `10.0.0.0/0.0.0.255`.
    pub fn with_hostmask(&self) -> String {
        format!("{}/{}", self.addr, self.hostmask())
    }
}

impl FromStr for NetworkBlock {
    type Err = WildcardError;

    /// Parse CIDR text (e.g. "10.0.0.1/24"), clearing host bits.
    fn from_str(addr_cidr: &str) -> Result<Self, Self::Err> {
        let addr_cidr = addr_cidr.trim();
        let (addr, mask) = addr_cidr
            .split_once('/')
            .ok_or_else(|| WildcardError::Parse {
                input: addr_cidr.to_string(),
                reason: "invalid address/prefix".to_string(),
            })?;
        let addr: IpBits = addr.parse()?;
        let mask: u8 = mask.parse().map_err(|_| WildcardError::Parse {
            input: addr_cidr.to_string(),
            reason: format!("invalid prefix length {mask}"),
        })?;
        NetworkBlock::new(addr, mask)
    }
}

impl Serialize for NetworkBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.with_prefixlen())
    }
}

impl<'de> Deserialize<'de> for NetworkBlock {
    fn deserialize<D>(deserializer: D) -> Result<NetworkBlock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NetworkBlock::from_str(&s).map_err(de::Error::custom)
    }
}

impl std::fmt::Display for NetworkBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

impl Ord for NetworkBlock {
    fn cmp(&self, other: &NetworkBlock) -> Ordering {
        (self.addr, self.mask).cmp(&(other.addr, other.mask))
    }
}

impl PartialOrd for NetworkBlock {
    fn partial_cmp(&self, other: &NetworkBlock) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(s: &str) -> IpBits {
        s.parse().unwrap()
    }

    #[test]
    fn test_get_cidr_mask() {
        let v4 = IpVersion::V4;
        assert_eq!(get_cidr_mask(0, v4).unwrap(), 0x00000000);
        assert_eq!(get_cidr_mask(8, v4).unwrap(), 0xFF000000);
        assert_eq!(get_cidr_mask(16, v4).unwrap(), 0xFFFF0000);
        assert_eq!(get_cidr_mask(24, v4).unwrap(), 0xFFFFFF00);
        assert_eq!(get_cidr_mask(32, v4).unwrap(), 0xFFFFFFFF);
        assert!(get_cidr_mask(33, v4).is_err());
    }

    #[test]
    fn test_get_cidr_mask_v6() {
        let v6 = IpVersion::V6;
        assert_eq!(get_cidr_mask(0, v6).unwrap(), 0);
        assert_eq!(get_cidr_mask(64, v6).unwrap(), (u64::MAX as u128) << 64);
        assert_eq!(get_cidr_mask(128, v6).unwrap(), u128::MAX);
        assert_eq!(get_host_mask(128, v6).unwrap(), 0);
        assert_eq!(get_host_mask(0, v6).unwrap(), u128::MAX);
        assert!(get_cidr_mask(129, v6).is_err());
    }

    #[test]
    fn test_cut_addr() {
        let addr = ip("192.168.1.42");
        assert_eq!(cut_addr(addr, 24).unwrap(), ip("192.168.1.0"));
        assert_eq!(cut_addr(addr, 16).unwrap(), ip("192.168.0.0"));
        assert_eq!(cut_addr(addr, 8).unwrap(), ip("192.0.0.0"));
        assert_eq!(cut_addr(addr, 32).unwrap(), ip("192.168.1.42"));
        assert!(cut_addr(addr, 33).is_err());
    }

    #[test]
    fn test_broadcast_addr() {
        let addr = ip("192.168.1.0");
        assert_eq!(broadcast_addr(addr, 24).unwrap(), ip("192.168.1.255"));
        assert_eq!(broadcast_addr(addr, 16).unwrap(), ip("192.168.255.255"));
        assert_eq!(broadcast_addr(addr, 32).unwrap(), ip("192.168.1.0"));
        assert_eq!(
            broadcast_addr(ip("2001:db8::"), 32).unwrap(),
            ip("2001:db8:ffff:ffff:ffff:ffff:ffff:ffff")
        );
    }

    #[test]
    fn test_new_is_non_strict() {
        let net = NetworkBlock::new(ip("172.18.161.2"), 29).unwrap();
        assert_eq!(net.network_address(), ip("172.18.161.0"));
        assert_eq!(net.prefix_len(), 29);
        assert_eq!(net.to_string(), "172.18.161.0/29");
        assert!(NetworkBlock::new(ip("10.0.0.0"), 33).is_err());
    }

    #[test]
    fn test_display_forms() {
        let net: NetworkBlock = "10.1.2.3/24".parse().unwrap();
        assert_eq!(net.with_prefixlen(), "10.1.2.0/24");
        assert_eq!(net.with_netmask(), "10.1.2.0/255.255.255.0");
        assert_eq!(net.with_hostmask(), "10.1.2.0/0.0.0.255");
        assert_eq!(net.broadcast_address(), ip("10.1.2.255"));

        let net6: NetworkBlock = "2001:db8::1/64".parse().unwrap();
        assert_eq!(net6.with_prefixlen(), "2001:db8::/64");
        assert_eq!(net6.with_netmask(), "2001:db8::/ffff:ffff:ffff:ffff::");
        assert_eq!(net6.with_hostmask(), "2001:db8::/::ffff:ffff:ffff:ffff");
    }

    #[test]
    fn test_num_addresses() {
        assert_eq!("10.0.0.0/24".parse::<NetworkBlock>().unwrap().num_addresses(), Some(256));
        assert_eq!("10.0.0.0/32".parse::<NetworkBlock>().unwrap().num_addresses(), Some(1));
        assert_eq!("0.0.0.0/0".parse::<NetworkBlock>().unwrap().num_addresses(), Some(1 << 32));
        assert_eq!("::/0".parse::<NetworkBlock>().unwrap().num_addresses(), None);
    }

    #[test]
    fn test_contains() {
        let net: NetworkBlock = "10.0.10.0/24".parse().unwrap();
        assert!(net.contains(ip("10.0.10.0")));
        assert!(net.contains(ip("10.0.10.255")));
        assert!(!net.contains(ip("10.0.11.0")));
        assert!(!net.contains(ip("::a00:a00")));
    }

    #[test]
    fn test_parse_errors() {
        assert!("10.0.0.0".parse::<NetworkBlock>().is_err());
        assert!("10.0.0.0/abc".parse::<NetworkBlock>().is_err());
        assert!("10.0.0.0/40".parse::<NetworkBlock>().is_err());
    }

    #[test]
    fn test_cmp() {
        let n1: NetworkBlock = "10.0.0.0/8".parse().unwrap();
        let n2: NetworkBlock = "10.0.10.0/24".parse().unwrap();
        let n3: NetworkBlock = "10.0.10.64/26".parse().unwrap();
        assert!(n1 < n2);
        assert!(n2 < n3);
        assert_eq!(n2, "10.0.10.9/24".parse::<NetworkBlock>().unwrap());
    }

    #[test]
    fn test_serde() {
        let net: NetworkBlock = "192.168.0.0/16".parse().unwrap();
        let json = serde_json::to_string(&net).unwrap();
        assert_eq!(json, "\"192.168.0.0/16\"");
        let back: NetworkBlock = serde_json::from_str(&json).unwrap();
        assert_eq!(back, net);
        assert!(serde_json::from_str::<NetworkBlock>("\"192.168.0.0\"").is_err());
    }
}
