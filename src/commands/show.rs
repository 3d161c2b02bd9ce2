//! Show command implementation

use std::path::PathBuf;

use crate::cli::ShowArgs;
use crate::commands::helpers;
use crate::error::Result;
use crate::project;
use crate::ui;

pub fn run(project_dir: Option<PathBuf>, args: ShowArgs) -> Result<()> {
    let root = helpers::require_project_root(project_dir)?;
    let config = project::config::load_app_config(&root)?;

    if args.json {
        // Canonical form already carries the trailing newline
        print!("{}", config.to_json()?);
    } else {
        ui::display::display_config(&root, &config);
    }

    Ok(())
}
