//! Init command implementation

use std::path::{Path, PathBuf};

use console::Style;
use inquire::Text;
use inquire::validator::Validation;

use crate::cli::InitArgs;
use crate::commands::helpers;
use crate::config::{AppConfig, AppId};
use crate::error::{AppshellError, Result};
use crate::project;

pub fn run(project_dir: Option<PathBuf>, args: InitArgs) -> Result<()> {
    let root = helpers::start_dir(project_dir)?;
    let manifest_path = root.join(project::CONFIG_FILE);

    if manifest_path.exists() {
        return Err(AppshellError::ConfigAlreadyExists {
            path: manifest_path.display().to_string(),
        });
    }

    let app_name = match args.app_name {
        Some(name) => name,
        None => prompt_app_name(&root)?,
    };

    let app_id = match args.app_id {
        Some(id) => id,
        None => prompt_app_id(&app_name)?,
    };

    let config = AppConfig::new(app_id, app_name, args.web_dir)?;
    project::config::save_app_config(&root, &config)?;

    println!(
        "Created {}",
        Style::new().bold().apply_to(project::CONFIG_FILE)
    );

    if !config.web_dir.resolve(&root).is_dir() {
        println!(
            "{}",
            Style::new().dim().apply_to(format!(
                "note: webDir '{}' does not exist yet; build your web assets before packaging",
                config.web_dir
            ))
        );
    }

    Ok(())
}

/// Prompt for the display name, suggesting the project directory's name
fn prompt_app_name(root: &Path) -> Result<String> {
    let suggestion = infer_app_name(root);

    let name = Text::new("App name:")
        .with_default(&suggestion)
        .with_validator(|input: &str| {
            if input.trim().is_empty() {
                Ok(Validation::Invalid("App name cannot be empty".into()))
            } else {
                Ok(Validation::Valid)
            }
        })
        .prompt()?;

    Ok(name)
}

/// Prompt for the application id, suggesting one derived from the name
fn prompt_app_id(app_name: &str) -> Result<String> {
    let suggestion = default_app_id(app_name);

    let id = Text::new("App id (reverse-domain):")
        .with_default(&suggestion)
        .with_validator(|input: &str| match AppId::check(input) {
            Ok(()) => Ok(Validation::Valid),
            Err(AppshellError::InvalidAppId { reason, .. }) => {
                Ok(Validation::Invalid(reason.into()))
            }
            Err(e) => Ok(Validation::Invalid(e.to_string().into())),
        })
        .prompt()?;

    Ok(id)
}

/// Infer a display name from the project directory name
fn infer_app_name(root: &Path) -> String {
    root.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("App")
        .to_string()
}

/// Derive a placeholder reverse-domain id from a display name
fn default_app_id(app_name: &str) -> String {
    let mut segment: String = app_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if segment.is_empty() || !segment.starts_with(|c: char| c.is_ascii_lowercase()) {
        segment = format!("app{}", segment);
    }

    format!("com.example.{}", segment)
}
