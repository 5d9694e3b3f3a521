//! Binary entry point for the taskbook CLI.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use mockable::DefaultClock;

use taskbook::cli::{self, Cli};
use taskbook::task::adapters::memory::InMemoryTaskRegistry;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut registry = InMemoryTaskRegistry::new(DefaultClock);
    let stdout = io::stdout();
    match cli::run(cli, &mut registry, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
