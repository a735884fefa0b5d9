// src/bin/open-in-mpv.rs

use clap::Parser;
use colored::*;
use open_in_mpv::{
    cli::{Cli, dispatcher},
    t,
};

/// The main entry point of `open-in-mpv`.
/// It sets up logging, parses arguments, dispatches to the correct handler,
/// and performs centralized error handling.
fn main() {
    env_logger::init();

    if let Err(e) = dispatcher::dispatch(&Cli::parse()) {
        // The alternate format prints the whole `source` chain on one line.
        eprintln!("\n{}: {:#}", t!("main.error.label").red().bold(), e);
        std::process::exit(1);
    }
}
