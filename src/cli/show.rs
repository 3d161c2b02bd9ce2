use clap::Parser;

/// Arguments for the show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show the project configuration:\n    appshell show\n\n\
                  Print the manifest as canonical JSON:\n    appshell show --json\n\n\
                  Show a project elsewhere:\n    appshell show --project ../mobile-app")]
pub struct ShowArgs {
    /// Print the manifest as canonical JSON instead of the styled view
    #[arg(long)]
    pub json: bool,
}
