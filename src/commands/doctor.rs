//! Doctor command implementation
//!
//! Runs every project health check and reports each one, instead of
//! stopping at the first failure the way `validate` does. Exits non-zero
//! when any check fails.

use std::path::{Path, PathBuf};

use console::Style;
use walkdir::WalkDir;

use crate::commands::helpers;
use crate::common::paths;
use crate::error::{AppshellError, Result};
use crate::project;
use crate::ui::display;

pub fn run(project_dir: Option<PathBuf>) -> Result<()> {
    let start = helpers::start_dir(project_dir)?;

    let Some(root) = project::detection::find_from(&start) else {
        display::check_failed(
            "project manifest found",
            &format!("no {} from {}", project::CONFIG_FILE, start.display()),
        );
        return Err(AppshellError::ChecksFailed { count: 1 });
    };
    display::check_passed(&format!(
        "project manifest found at {}",
        paths::display_path(&root.join(project::CONFIG_FILE))
    ));

    let mut failures = 0;

    let config = match project::config::load_app_config(&root) {
        Ok(config) => {
            display::check_passed("manifest parses");
            Some(config)
        }
        Err(e) => {
            display::check_failed("manifest parses", &e.to_string());
            failures += 1;
            None
        }
    };

    if let Some(config) = config {
        match config.validate() {
            Ok(()) => display::check_passed("fields satisfy the contract"),
            Err(e) => {
                display::check_failed("fields satisfy the contract", &e.to_string());
                failures += 1;
            }
        }

        let web_dir = config.web_dir.resolve(&root);
        if web_dir.is_dir() {
            display::check_passed(&format!("webDir '{}' exists", config.web_dir));

            if web_dir.join("index.html").is_file() {
                display::check_passed("web assets contain index.html");
            } else {
                display::check_failed(
                    "web assets contain index.html",
                    "the shell has no entry point to load",
                );
                failures += 1;
            }

            let (files, bytes) = scan_assets(&web_dir);
            display::check_info(&format!(
                "{} asset file(s), {}",
                files,
                display::human_size(bytes)
            ));
        } else {
            display::check_failed(
                &format!("webDir '{}' exists", config.web_dir),
                "build your web assets first",
            );
            failures += 1;
        }
    }

    if failures > 0 {
        return Err(AppshellError::ChecksFailed { count: failures });
    }

    println!();
    println!("{}", Style::new().green().apply_to("All checks passed"));

    Ok(())
}

/// Count files and total bytes under the web asset directory
fn scan_assets(dir: &Path) -> (usize, u64) {
    let mut files = 0;
    let mut bytes = 0;

    for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
        if entry.file_type().is_file() {
            files += 1;
            bytes += entry.metadata().map(|m| m.len()).unwrap_or(0);
        }
    }

    (files, bytes)
}
