//! Validate command implementation
//!
//! Validation is the packaging-time gate: the manifest must parse, its
//! fields must satisfy the contract, and the web asset directory must
//! exist on disk.

use std::path::PathBuf;

use crate::cli::ValidateArgs;
use crate::commands::helpers;
use crate::common::paths;
use crate::error::{AppshellError, Result};
use crate::project;
use crate::ui;

pub fn run(project_dir: Option<PathBuf>, args: ValidateArgs) -> Result<()> {
    let root = helpers::require_project_root(project_dir)?;
    let config = project::config::load_app_config(&root)?;
    config.validate()?;

    let web_dir = config.web_dir.resolve(&root);
    if !web_dir.is_dir() {
        return Err(AppshellError::WebDirMissing {
            path: paths::display_path(&web_dir),
        });
    }

    if !args.quiet {
        ui::display::check_passed(&format!("{} is valid", project::CONFIG_FILE));
        ui::display::check_passed(&format!("webDir '{}' exists", config.web_dir));
    }

    Ok(())
}
