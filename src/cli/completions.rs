use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    appshell completions bash > ~/.bash_completion.d/appshell\n\n\
                  Generate zsh completions:\n    appshell completions zsh > ~/.zfunc/_appshell\n\n\
                  Generate fish completions:\n    appshell completions fish > ~/.config/fish/completions/appshell.fish\n\n\
                  Generate PowerShell completions:\n    appshell completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
