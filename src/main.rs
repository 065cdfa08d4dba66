mod cli;
mod environment;
mod error;
mod manager;
mod profile;
mod prompt;
mod storage;
mod validation;

use std::{io, process};

use clap::Parser;
use colored::Colorize;

use crate::{
    cli::Cli, environment::ClientEnvironment, error::AppError, manager::ProfileManager,
    prompt::TerminalPrompter,
};

// Main
fn main() {
    Cli::parse();

    if let Err(err) = run() {
        eprintln!("{}", err.to_string().red());
        process::exit(1);
    }
}

/// Resolves the client environment and runs the setup flow against the terminal
fn run() -> Result<(), AppError> {
    let env: ClientEnvironment = ClientEnvironment::resolve()?;
    let mut manager = ProfileManager::new(env, TerminalPrompter, io::stdout());
    manager.execute()?;
    Ok(())
}
