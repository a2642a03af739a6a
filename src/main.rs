mod cli;
mod convert;
mod logging;
mod pipeline;

use std::process;

use clap::Parser;

use crate::cli::Cli;

fn main() {
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        // Usage errors exit 1 like every other failure; help and version exit 0.
        let code = if e.use_stderr() { 1 } else { 0 };
        let _ = e.print();
        process::exit(code);
    });
    logging::init(cli.verbose);

    if let Err(e) = pipeline::run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
