//! Generator configuration with documented defaults
//!
//! Everything tunable about a generation run lives here: the setting the
//! model writes for, where the skill catalog comes from, how assembly
//! degrades on bad model output, and where reports go. Rules constants
//! (value ladders, step tables) are NOT configuration; they live with the
//! rules that use them.

use crate::character::assembler::AttributePolicy;
use crate::core::error::{ChargenError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration, loadable from TOML
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub setting: SettingConfig,
    pub catalog: CatalogConfig,
    pub assembly: AssemblyConfig,
    pub output: OutputConfig,
}

/// Where and when the story is set, and the language the model answers in
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SettingConfig {
    pub country: String,
    /// Free text, e.g. "present time" or "1920s"
    pub era: String,
    /// Language for the description and traits. Skill names stay English
    /// so they match the catalog.
    pub language: String,
}

impl Default for SettingConfig {
    fn default() -> Self {
        Self {
            country: "Great Britain".into(),
            era: "present time".into(),
            language: "English".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON skill catalog
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/skills.json"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssemblyConfig {
    /// What to do when the model's attribute ordering cannot be parsed
    pub attribute_policy: AttributePolicy,

    /// Inclusive range for the number of interest skills requested
    ///
    /// A fresh count is rolled for every character.
    pub interest_skill_min: u32,
    pub interest_skill_max: u32,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            attribute_policy: AttributePolicy::DefaultOrder,
            interest_skill_min: 3,
            interest_skill_max: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the text report is written to
    pub directory: PathBuf,
    pub write_file: bool,
    /// Append the raw request and skill lists to the report
    pub debug_section: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            write_file: true,
            debug_section: true,
        }
    }
}

impl GeneratorConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML text; missing keys take defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: GeneratorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ChargenError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.assembly.interest_skill_min == 0 {
            return Err(ChargenError::Config(
                "interest_skill_min must be at least 1".into(),
            ));
        }

        if self.assembly.interest_skill_min > self.assembly.interest_skill_max {
            return Err(ChargenError::Config(format!(
                "interest_skill_min ({}) should be <= interest_skill_max ({})",
                self.assembly.interest_skill_min, self.assembly.interest_skill_max
            )));
        }

        if self.setting.language.trim().is_empty() {
            return Err(ChargenError::Config("setting.language must not be empty".into()));
        }

        Ok(())
    }
}
