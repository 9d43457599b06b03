//! Static skill definitions - the catalog every character references
//!
//! Loaded once from JSON at startup and shared read-only by every
//! generation request.

use crate::core::error::{ChargenError, Result};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Raw `defaultValue` meaning "half of DEX"
pub const HALF_DEX_SENTINEL: i32 = -20;
/// Raw `defaultValue` meaning "equal to EDU"
pub const EDU_SENTINEL: i32 = -50;

/// How a skill's starting value is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefaultValue {
    Fixed(i32),
    /// DEX / 2, truncated (Dodge)
    HalfDexterity,
    /// EDU (Language (Own))
    Education,
}

impl From<i32> for DefaultValue {
    fn from(raw: i32) -> Self {
        match raw {
            HALF_DEX_SENTINEL => DefaultValue::HalfDexterity,
            EDU_SENTINEL => DefaultValue::Education,
            n => DefaultValue::Fixed(n),
        }
    }
}

/// Definition of a skill in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawSkillDefinition")]
pub struct SkillDefinition {
    pub name: String,
    /// Whether the skill carries a free-text specialization (Survival (forest))
    pub has_specialization: bool,
    pub default_value: DefaultValue,
    /// Suggested specializations, used only to build prompts. Empty means free-form.
    pub allowed_specializations: Vec<String>,
}

impl SkillDefinition {
    pub fn new(name: impl Into<String>, has_specialization: bool, default_value: DefaultValue) -> Self {
        Self {
            name: name.into(),
            has_specialization,
            default_value,
            allowed_specializations: Vec::new(),
        }
    }

    pub fn with_specializations<I, S>(mut self, specs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_specializations = specs.into_iter().map(Into::into).collect();
        self
    }
}

/// On-disk shape of a catalog entry
#[derive(Deserialize)]
struct RawSkillDefinition {
    name: String,
    #[serde(default)]
    specialization: bool,
    #[serde(rename = "defaultValue", default)]
    default_value: i32,
    #[serde(rename = "possibleSpecs", default)]
    possible_specs: Option<Vec<String>>,
}

impl From<RawSkillDefinition> for SkillDefinition {
    fn from(raw: RawSkillDefinition) -> Self {
        Self {
            name: raw.name,
            has_specialization: raw.specialization,
            default_value: raw.default_value.into(),
            allowed_specializations: raw.possible_specs.unwrap_or_default(),
        }
    }
}

/// The universe of known skills, indexed by exact name
#[derive(Debug, Clone, Default)]
pub struct SkillCatalog {
    skills: Vec<SkillDefinition>,
    by_name: AHashMap<String, usize>,
}

impl SkillCatalog {
    /// Build a catalog, rejecting duplicate names
    pub fn new(skills: Vec<SkillDefinition>) -> Result<Self> {
        let mut by_name = AHashMap::with_capacity(skills.len());
        for (idx, skill) in skills.iter().enumerate() {
            if skill.name.trim().is_empty() {
                return Err(ChargenError::Catalog(format!("skill #{} has an empty name", idx)));
            }
            if by_name.insert(skill.name.clone(), idx).is_some() {
                return Err(ChargenError::Catalog(format!(
                    "duplicate skill name '{}'",
                    skill.name
                )));
            }
        }
        Ok(Self { skills, by_name })
    }

    /// Degraded mode: nothing resolves, assembly still completes
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let skills: Vec<SkillDefinition> = serde_json::from_str(json)
            .map_err(|e| ChargenError::Catalog(format!("invalid skill catalog JSON: {}", e)))?;
        Self::new(skills)
    }

    /// Load the catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ChargenError::Catalog(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let catalog = Self::from_json(&content)?;
        tracing::info!(
            skills = catalog.len(),
            path = %path.display(),
            "Loaded skill catalog"
        );
        Ok(catalog)
    }

    /// Exact-name lookup
    pub fn find(&self, name: &str) -> Option<&SkillDefinition> {
        self.by_name.get(name).map(|&idx| &self.skills[idx])
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkillDefinition> {
        self.skills.iter()
    }

    /// Every skill the model may pick, with suggested specializations expanded
    ///
    /// `Survival` with specs `[forest, desert]` yields `Survival (forest)` and
    /// `Survival (desert)`; skills without suggestions yield their bare name.
    pub fn prompt_listing(&self) -> Vec<String> {
        let mut listing = Vec::with_capacity(self.skills.len());
        for skill in &self.skills {
            if skill.has_specialization && !skill.allowed_specializations.is_empty() {
                for spec in &skill.allowed_specializations {
                    listing.push(format!("{} ({})", skill.name, spec));
                }
            } else {
                listing.push(skill.name.clone());
            }
        }
        listing
    }
}
