//! Command-line entry point for `dotfiles-link`.
use std::process::ExitCode;

use clap::Parser;
use dotfiles_link::{cli, commands, logging};

fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();
    logging::init_subscriber(args.debug, "link");
    let log = logging::Logger::new("link");

    match commands::link::run(&args, &log) {
        Ok(code) => code,
        Err(e) => {
            log.error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
