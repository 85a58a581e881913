//! library-catalog binary entry point.
//!
//! Parses arguments and hands over to [`Cli::run`]. Every failure, at startup
//! or inside the menu loop, is reported as one readable line on stderr.
//!
use clap::Parser;

use library_catalog::cli::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = cli.run() {
        eprintln!("application error: {err:#}");
        std::process::exit(1);
    }
}
