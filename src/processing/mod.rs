//! Wildcard processing logic.
//!
//! This module contains the ACL wildcard algorithm:
//! - [`wildcard`] - Splitting a wildcard into hostmask run and scattered bits
//! - [`expand`] - Enumerating the networks a rule matches

mod expand;
mod wildcard;

// Re-export public functions
pub use expand::{acl_with_wildcard_to_networks, expand, MAX_EXPAND_BITS};
pub use wildcard::WildcardBits;
