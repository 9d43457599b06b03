//! The finished character record

use crate::character::attributes::AttributeSet;
use crate::character::derived::DerivedScores;
use crate::skills::SkillSet;
use serde::{Deserialize, Serialize};

/// Narrative fields, passed through from the model untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub age: String,
    pub occupation: String,
    pub backstory: String,
    pub traits: String,
}

impl Profile {
    /// Split the model's description answer into its parts
    ///
    /// Line 1 is the name, line 2 the age, line 3 the occupation tagline,
    /// line 4 is blank, everything after is backstory. Missing lines come
    /// back empty rather than failing.
    pub fn from_description(description: &str, traits: impl Into<String>) -> Self {
        let lines: Vec<&str> = description.trim_start().lines().collect();
        let line = |i: usize| lines.get(i).map(|l| l.trim().to_string()).unwrap_or_default();

        let backstory = lines
            .iter()
            .skip(4)
            .copied()
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string();

        Self {
            name: line(0),
            age: line(1),
            occupation: line(2),
            backstory,
            traits: traits.into().trim().to_string(),
        }
    }
}

/// A fully assembled character sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub profile: Profile,
    pub attributes: AttributeSet,
    pub scores: DerivedScores,
    pub skills: SkillSet,
    /// The occupational skill list as the model returned it
    pub occupational_skills: String,
    /// The interest skill list as the model returned it
    pub interest_skills: String,
}
