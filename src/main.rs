use clap::Parser;

use tinter::cli::Cli;
use tinter::commands;
use tinter::logging::Logger;

fn main() {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();
    let log = Logger::new(args.verbose);

    // Errors go to stderr; the exit status stays 0 on the documented error
    // path.
    if let Err(e) = commands::run(&args, &log) {
        log.error(&format!("{e:#}"));
    }
}
