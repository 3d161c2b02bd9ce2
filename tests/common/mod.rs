//! Common test utilities for Appshell integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A test project for integration tests
#[allow(dead_code)]
pub struct TestProject {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestProject {
    /// Create a new empty test project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a manifest with the given fields
    pub fn write_manifest(&self, app_id: &str, app_name: &str, web_dir: &str) {
        let content = format!(
            "{{\n  \"appId\": \"{}\",\n  \"appName\": \"{}\",\n  \"webDir\": \"{}\"\n}}\n",
            app_id, app_name, web_dir
        );
        self.write_file("appshell.config.json", &content);
    }

    /// Create a web asset directory containing an index.html
    pub fn create_web_dir(&self, name: &str) -> PathBuf {
        let web_path = self.path.join(name);
        std::fs::create_dir_all(&web_path).expect("Failed to create web directory");
        std::fs::write(web_path.join("index.html"), "<html><body></body></html>\n")
            .expect("Failed to write index.html");
        web_path
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Create a nested directory and return its path
    pub fn create_dir(&self, path: &str) -> PathBuf {
        let dir_path = self.path.join(path);
        std::fs::create_dir_all(&dir_path).expect("Failed to create directory");
        dir_path
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}
