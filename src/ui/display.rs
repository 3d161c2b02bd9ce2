//! Display functions for the manifest and project checks
//!
//! This module provides utilities for rendering the configuration and
//! doctor/validate check results in a consistent styled format.

use console::Style;
use std::path::Path;

use crate::common::paths;
use crate::config::AppConfig;

/// Display the configuration with its project root
pub fn display_config(root: &Path, config: &AppConfig) {
    println!(
        "{}",
        Style::new().bold().yellow().apply_to(&config.app_name)
    );
    display_field("appId:", config.app_id.as_str());
    display_field("appName:", &config.app_name);
    display_field("webDir:", config.web_dir.as_str());
    display_field("project:", &paths::display_path(root));
}

fn display_field(label: &str, value: &str) {
    println!("  {} {}", Style::new().bold().apply_to(label), value);
}

/// Display a passed check
pub fn check_passed(label: &str) {
    println!("{} {}", Style::new().green().apply_to("✔"), label);
}

/// Display a failed check with its reason
pub fn check_failed(label: &str, reason: &str) {
    println!(
        "{} {} {}",
        Style::new().red().apply_to("✖"),
        label,
        Style::new().dim().apply_to(reason)
    );
}

/// Display an informational line under a check
pub fn check_info(message: &str) {
    println!("  {}", Style::new().dim().apply_to(message));
}

/// Format a byte count for humans
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, UNITS[unit])
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_size_bytes() {
        assert_eq!(human_size(0), "0 B");
        assert_eq!(human_size(512), "512 B");
    }

    #[test]
    fn test_human_size_kib() {
        assert_eq!(human_size(1024), "1.0 KiB");
        assert_eq!(human_size(1536), "1.5 KiB");
    }

    #[test]
    fn test_human_size_mib() {
        assert_eq!(human_size(5 * 1024 * 1024), "5.0 MiB");
    }
}
