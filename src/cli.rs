use clap::Parser;

/// CLI arguments parser using `clap`
///
/// The setup flow is fully interactive, so only `--help` and `--version` are exposed.
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Sets up a per-user directory and confirms the stored contact profile",
    long_about = "Creates <home>/<user>/ if needed, then either collects a new name, phone \
                  and email or shows the stored profile and asks whether it is up to date."
)]
pub struct Cli {}
