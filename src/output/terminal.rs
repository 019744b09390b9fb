//! Terminal output utilities.
//!
//! Renders networks one per line in prefix-length or netmask form.

use crate::models::NetworkBlock;
use colored::Colorize;
use itertools::Itertools;

/// How each network is written out.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `10.0.0.0/24`
    #[default]
    Prefixlen,
    /// `10.0.0.0/255.255.255.0`
    Netmask,
    /// JSON array of CIDR strings
    Json,
}

/// Format a single network for line output.
pub fn format_network(network: &NetworkBlock, format: OutputFormat) -> String {
    match format {
        OutputFormat::Netmask => network.with_netmask(),
        OutputFormat::Prefixlen | OutputFormat::Json => network.with_prefixlen(),
    }
}

/// Format networks one per line.
pub fn format_lines(networks: &[NetworkBlock], format: OutputFormat) -> String {
    networks
        .iter()
        .map(|n| format_network(n, format))
        .join("\n")
}

/// Header line echoing the rule being expanded.
pub fn format_header(address: &str, wildcard: &str) -> String {
    format!(
        "Address: '{address}' Wildcard: '{wildcard}'",
        address = address.bold(),
        wildcard = wildcard.bold()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nets(list: &[&str]) -> Vec<NetworkBlock> {
        list.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_format_lines_prefixlen() {
        let networks = nets(&["192.168.0.0/32", "192.168.1.0/32"]);
        assert_eq!(
            format_lines(&networks, OutputFormat::Prefixlen),
            "192.168.0.0/32\n192.168.1.0/32"
        );
    }

    #[test]
    fn test_format_lines_netmask() {
        let networks = nets(&["172.18.161.0/29", "172.18.163.0/29"]);
        assert_eq!(
            format_lines(&networks, OutputFormat::Netmask),
            "172.18.161.0/255.255.255.248\n172.18.163.0/255.255.255.248"
        );
    }

    #[test]
    fn test_format_lines_empty() {
        assert_eq!(format_lines(&[], OutputFormat::Prefixlen), "");
    }

    #[test]
    fn test_format_header() {
        colored::control::set_override(false);
        assert_eq!(
            format_header("192.168.1.0", "0.0.1.0"),
            "Address: '192.168.1.0' Wildcard: '0.0.1.0'"
        );
    }
}
