//! Output formatting for expanded networks.
//!
//! This module handles formatting and outputting networks:
//! - [`terminal`] - Line output with a coloured header
//! - [`json`] - JSON document output

mod json;
mod terminal;

pub use json::{to_json, AclExpansion};
pub use terminal::{format_header, format_lines, format_network, OutputFormat};

use crate::models::NetworkBlock;

/// Render the complete output for one rule: header plus lines, or a JSON document.
pub fn render(
    address: &str,
    wildcard: &str,
    networks: &[NetworkBlock],
    format: OutputFormat,
) -> Result<String, Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => to_json(address, wildcard, networks),
        _ => Ok(format!(
            "\n{}\n{}",
            format_header(address, wildcard),
            format_lines(networks, format)
        )),
    }
}
