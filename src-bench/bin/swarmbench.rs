//! swarmbench: benchmark PSO, DE and BB-BC on single objective test functions
//!
//! Logging defaults to `info`; set `RUST_LOG` to change it.

use clap::Parser;
use log::error;
use swarmbench::cli::Cli;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = swarmbench::execute(&cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}
