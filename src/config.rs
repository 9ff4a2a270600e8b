use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Environment variables checked for the chat credential, in order.
const API_KEY_VARS: &[&str] = &["OPENAI_API_KEY", "FINBUDDY_API_KEY"];

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub api_key: Option<String>,
    pub data_dir: PathBuf,
}

impl Config {
    /// Read the credential from the environment and resolve the data directory.
    pub fn load() -> Result<Self> {
        let api_key = api_key_from(|var| std::env::var(var).ok());
        let data_dir = default_data_dir()?;
        Ok(Self { api_key, data_dir })
    }

    pub fn budget_path(&self) -> PathBuf {
        self.data_dir.join("budget.csv")
    }

    pub fn goals_path(&self) -> PathBuf {
        self.data_dir.join("goals.csv")
    }

    pub fn with_data_dir(mut self, dir: &Path) -> Self {
        self.data_dir = dir.to_path_buf();
        self
    }
}

/// First non-blank credential from [`API_KEY_VARS`].
pub(crate) fn api_key_from(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    API_KEY_VARS
        .iter()
        .filter_map(|var| lookup(var))
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}

fn default_data_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "finbuddy", "FinBuddy")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
    Ok(data_dir.to_path_buf())
}
