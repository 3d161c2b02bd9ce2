//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - init: Init command arguments
//! - show: Show command arguments
//! - validate: Validate command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod init;
pub mod show;
pub mod validate;

pub use completions::CompletionsArgs;
pub use init::InitArgs;
pub use show::ShowArgs;
pub use validate::ValidateArgs;

/// Appshell - hybrid app shell configuration manager
///
/// Manage the native-shell configuration manifest of hybrid mobile app projects.
#[derive(Parser, Debug)]
#[command(
    name = "appshell",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Manage the native-shell configuration of hybrid mobile app projects",
    long_about = "Appshell manages appshell.config.json, the manifest that tells mobile \
                  packaging tooling which application id the app carries, what name it \
                  shows on device home screens, and where the pre-built web assets live.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  appshell init \"My App\" com.example.app \x1b[90m# Create a manifest\x1b[0m\n   \
                  appshell show                           \x1b[90m# Show the configuration\x1b[0m\n   \
                  appshell show --json                    \x1b[90m# Print canonical JSON\x1b[0m\n   \
                  appshell validate                       \x1b[90m# Check the manifest and web assets\x1b[0m\n   \
                  appshell doctor                         \x1b[90m# Full project health report\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project directory (defaults to current directory)
    #[arg(long, short = 'p', global = true, env = "APPSHELL_PROJECT")]
    pub project: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a manifest in the current directory
    Init(InitArgs),

    /// Show the project configuration
    Show(ShowArgs),

    /// Validate the manifest and web asset directory
    Validate(ValidateArgs),

    /// Run all project health checks
    Doctor,

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
