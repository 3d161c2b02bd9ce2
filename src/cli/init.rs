use clap::Parser;

/// Arguments for the init command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Create a manifest interactively:\n    appshell init\n\n\
                  Create with name and id:\n    appshell init \"My App\" com.example.app\n\n\
                  Point at an existing build output:\n    appshell init \"My App\" com.example.app --web-dir dist")]
pub struct InitArgs {
    /// Display name shown on device home screens (prompted for if omitted)
    pub app_name: Option<String>,

    /// Reverse-domain application id, e.g. com.example.app (prompted for if omitted)
    pub app_id: Option<String>,

    /// Directory of pre-built web assets, relative to the project root
    #[arg(long = "web-dir", value_name = "DIR", default_value = "www")]
    pub web_dir: String,
}
