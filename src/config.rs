use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

use mixtable::model::{animation, list, ui};

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_item_count")]
    pub item_count: u32,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_animation_ms")]
    pub animation_ms: u64,
    #[serde(default = "default_toast_ms")]
    pub toast_ms: u64,
    #[serde(default)]
    pub vim_mode: bool,
    /// Fixed RNG seed for reproducible shuffles
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_item_count() -> u32 {
    list::DEFAULT_ITEM_COUNT
}

fn default_title() -> String {
    ui::DEFAULT_TITLE.to_string()
}

fn default_animation_ms() -> u64 {
    animation::DEFAULT_ANIMATION_MS
}

fn default_toast_ms() -> u64 {
    ui::DEFAULT_TOAST_MS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            item_count: default_item_count(),
            title: default_title(),
            animation_ms: default_animation_ms(),
            toast_ms: default_toast_ms(),
            vim_mode: false,
            seed: None,
        }
    }
}

impl Config {
    /// Parse a YAML config document
    pub fn from_yaml(contents: &str) -> Result<Self> {
        // An empty file deserializes to unit, not to a map
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a file, or defaults when no file was found
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let contents = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file {}", path.display()))?;
                Self::from_yaml(&contents)
                    .with_context(|| format!("Invalid config file {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.item_count == 0 {
            bail!("item_count must be at least 1");
        }
        Ok(())
    }
}
