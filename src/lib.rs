//! ACL wildcard calculator.
//!
//! Turns an access-list (address, wildcard mask) pair into the CIDR networks it matches.
//!
//! # Module Structure
//! - [`models`] - Version-tagged addresses and CIDR network blocks
//! - [`processing`] - Wildcard classification and expansion
//! - [`output`] - Prefix, netmask and JSON rendering
//! - [`cli`] - Command line arguments and logging setup

pub mod cli;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::WildcardError;
pub use models::{IpBits, IpVersion, NetworkBlock};
pub use processing::{acl_with_wildcard_to_networks, expand, WildcardBits, MAX_EXPAND_BITS};
