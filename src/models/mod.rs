//! Domain models for the ACL wildcard calculator.
//!
//! This module contains the core data structures used throughout the application:
//! - [`IpBits`] - Parsed address or wildcard as a version-tagged integer
//! - [`NetworkBlock`] - IPv4/IPv6 network with CIDR notation support

mod address;
mod network;

// Re-export public types
pub use address::{IpBits, IpVersion, IPV4_LENGTH, IPV6_LENGTH};
pub use network::{broadcast_addr, cut_addr, get_cidr_mask, get_host_mask, NetworkBlock};
