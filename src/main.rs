//! Appshell - hybrid app shell configuration manager
//!
//! A command line tool for managing appshell.config.json, the manifest that
//! tells mobile packaging tooling which application id the app carries,
//! what name it shows on device home screens, and where the pre-built web
//! assets live.

use clap::Parser;

mod cli;
mod commands;
mod common;
mod config;
mod error;
mod project;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init(args) => commands::init::run(cli.project, args),
        Commands::Show(args) => commands::show::run(cli.project, args),
        Commands::Validate(args) => commands::validate::run(cli.project, args),
        Commands::Doctor => commands::doctor::run(cli.project),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
