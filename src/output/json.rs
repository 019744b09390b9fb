//! JSON output formatting.

use crate::models::NetworkBlock;
use serde::Serialize;
use std::error::Error;

/// Networks matched by one ACL rule, as written in JSON mode.
#[derive(Serialize, Debug)]
pub struct AclExpansion<'a> {
    pub address: &'a str,
    pub wildcard: &'a str,
    pub networks: &'a [NetworkBlock],
}

/// Pretty-printed JSON document for an expansion.
pub fn to_json(address: &str, wildcard: &str, networks: &[NetworkBlock]) -> Result<String, Box<dyn Error>> {
    let doc = AclExpansion {
        address,
        wildcard,
        networks,
    };
    serde_json::to_string_pretty(&doc).map_err(|e| format!("Error serializing JSON: {e}").into())
}
