use anyhow::{Context, Result};
use landing_kit_core::{PageConfig, locate_config, parse_page_config};
use std::path::{Path, PathBuf};

/// Directory inside a project whose files are served and exported as-is
pub const IMAGES_DIR: &str = "images";

/// Project directory plus the config file found in it
pub struct Project {
    pub root: PathBuf,
    pub config_path: PathBuf,
}

impl Project {
    /// Locate the config file of an existing project directory
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_dir() {
            anyhow::bail!(
                "Project directory does not exist: {}\nRun 'landing-kit init {}' first",
                path.display(),
                path.display()
            );
        }

        let config_path = locate_config(path).with_context(|| {
            format!(
                "No page configuration in {}\nRun 'landing-kit init {}' first",
                path.display(),
                path.display()
            )
        })?;

        Ok(Self {
            root: path.to_path_buf(),
            config_path,
        })
    }

    /// Parse the config file; re-read on every call
    pub fn load(&self) -> Result<PageConfig> {
        parse_page_config(&self.config_path)
            .with_context(|| format!("Failed to parse {}", self.config_path.display()))
    }

    pub fn images_dir(&self) -> PathBuf {
        self.root.join(IMAGES_DIR)
    }

    pub fn config_file_name(&self) -> String {
        self.config_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
