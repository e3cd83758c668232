use clap::Parser;
use pdfdl_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Initialize logging before any config or network work.
    if !cli.log_file || logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = cli.run() {
        eprintln!("pdfdl error: {:#}", err);
        std::process::exit(1);
    }
}
