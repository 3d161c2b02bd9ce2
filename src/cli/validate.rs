use clap::Parser;

/// Arguments for the validate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Validate the manifest and web assets:\n    appshell validate\n\n\
                  Use in scripts (exit code only):\n    appshell validate --quiet")]
pub struct ValidateArgs {
    /// Suppress output on success
    #[arg(long, short = 'q')]
    pub quiet: bool,
}
