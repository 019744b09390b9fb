use acl_wildcard_calc::cli::{init_logging, run, Args};
use clap::Parser;
use colored::Colorize;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let args = Args::parse();
    init_logging(args.verbose)?;
    log::info!("#Start main()");

    match run(&args) {
        Ok(out) => {
            println!("{out}");
            Ok(())
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("{} {e}", "ERROR".on_red());
            std::process::exit(1);
        }
    }
}
