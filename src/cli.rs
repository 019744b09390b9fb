//! Command line interface.
//!
//! Argument parsing, logging setup and the top-level run for the binary.

use crate::output::{render, OutputFormat};
use crate::processing::{expand, WildcardBits};
use crate::models::IpBits;
use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use std::path::Path;

/// Default log4rs config file, overridable with `LOG4RS_CONFIG`.
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// Translate an ACL address and wildcard mask into CIDR networks.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address part of the statement, eg. 192.168.1.0
    #[arg(short, long)]
    pub address: String,

    /// Wildcard mask, eg. 0.0.0.255
    #[arg(short, long)]
    pub wildcard: String,

    /// Show networks as address/netmask instead of address/prefix
    #[arg(short, long, conflicts_with = "json")]
    pub netmask: bool,

    /// Print the result as a JSON document
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.netmask {
            OutputFormat::Netmask
        } else {
            OutputFormat::Prefixlen
        }
    }
}

/// Set up log4rs. Results go to stdout, so every log line goes to stderr.
///
/// `--verbose` always uses the built-in debug config. Otherwise the yaml file
/// named by `LOG4RS_CONFIG` (or `log4rs.yml`) is used when present.
pub fn init_logging(verbose: bool) -> Result<(), Box<dyn Error>> {
    let config_file =
        std::env::var("LOG4RS_CONFIG").unwrap_or_else(|_| DEFAULT_LOG_CONFIG.to_string());

    if !verbose && Path::new(&config_file).exists() {
        log4rs::init_file(&config_file, Default::default())?;
        log::debug!("Logging configured from {config_file}");
        return Ok(());
    }

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    log4rs::init_config(default_log_config(level)?)?;
    Ok(())
}

fn default_log_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} {h({l})} {t} - {m}{n}",
        )))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}

/// Expand the rule given on the command line and return the text to print.
pub fn run(args: &Args) -> Result<String, Box<dyn Error>> {
    log::info!("#Start run() address={} wildcard={}", args.address, args.wildcard);

    let address: IpBits = args.address.parse()?;
    let wildcard: IpBits = args.wildcard.parse()?;

    let split = WildcardBits::classify(wildcard);
    log::debug!(
        "hostmask_length={} prefix=/{} expand_positions={:?}",
        split.hostmask_length,
        split.prefix_len(),
        split.expand_positions
    );

    let networks = expand(address, wildcard)?;
    log::info!("# Got network count = {}", networks.len());

    render(&args.address, &args.wildcard, &networks, args.output_format())
}
