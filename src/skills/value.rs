//! Per-character skill records and the rules that raise them
//!
//! A character's skills form a set keyed by `(name, specialization)`.
//! Occupational skills are raised to a floor from the value ladder;
//! interest skills get a flat bonus on top of whatever is already there.

use crate::character::attributes::AttributeSet;
use crate::core::types::Attribute;
use crate::skills::catalog::{DefaultValue, SkillDefinition};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A skill as recorded on a character sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSkill {
    pub skill_name: String,
    /// `None` iff the definition takes no specialization
    pub specialization: Option<String>,
    /// Fixed at creation from the definition's default rule
    pub initial_value: i32,
    pub bonuses: i32,
}

/// How a skill record should be advanced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillRule {
    /// Occupational slot: lift the skill to at least this value
    RaiseToAtLeast(i32),
    /// Interest skill: flat increment
    Bonus(i32),
}

impl CharacterSkill {
    /// Fresh record with the definition's starting value and no bonuses
    pub fn new(
        definition: &SkillDefinition,
        specialization: Option<String>,
        attributes: &AttributeSet,
    ) -> Self {
        Self {
            skill_name: definition.name.clone(),
            specialization: if definition.has_specialization {
                specialization
            } else {
                None
            },
            initial_value: starting_value(definition.default_value, attributes),
            bonuses: 0,
        }
    }

    pub fn value(&self) -> i32 {
        self.initial_value + self.bonuses
    }

    /// Hard success threshold
    pub fn half(&self) -> i32 {
        self.value() / 2
    }

    /// Extreme success threshold
    pub fn fifth(&self) -> i32 {
        self.value() / 5
    }

    /// Same identity: name and specialization
    pub fn is(&self, name: &str, specialization: Option<&str>) -> bool {
        self.skill_name == name && self.specialization.as_deref() == specialization
    }

    /// Lift the skill to `final_value` unless it is already there.
    ///
    /// A bonus from an earlier raise counts as spent: the second raise
    /// stores `final - initial - previous_bonus`, it does not reset to
    /// `final - initial`.
    pub fn raise_to_at_least(&mut self, final_value: i32) {
        if self.value() >= final_value {
            return;
        }
        if self.bonuses == 0 {
            self.bonuses = final_value - self.initial_value;
        } else {
            self.bonuses = final_value - self.initial_value - self.bonuses;
        }
    }

    pub fn add_bonus(&mut self, amount: i32) {
        self.bonuses += amount;
    }

    pub fn apply(&mut self, rule: SkillRule) {
        match rule {
            SkillRule::RaiseToAtLeast(value) => self.raise_to_at_least(value),
            SkillRule::Bonus(amount) => self.add_bonus(amount),
        }
    }

    /// Sheet label, `Name (Specialization)` or just `Name`
    pub fn label(&self) -> String {
        match &self.specialization {
            Some(spec) => format!("{} ({})", self.skill_name, spec),
            None => self.skill_name.clone(),
        }
    }

    /// Sheet ordering: by name, then specialization with unspecialised first
    pub fn sheet_order(&self, other: &Self) -> Ordering {
        self.skill_name
            .cmp(&other.skill_name)
            .then_with(|| self.specialization.cmp(&other.specialization))
    }
}

impl fmt::Display for CharacterSkill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}% ({}/{})",
            self.label(),
            self.value(),
            self.half(),
            self.fifth()
        )
    }
}

fn starting_value(rule: DefaultValue, attributes: &AttributeSet) -> i32 {
    match rule {
        DefaultValue::Fixed(n) => n,
        DefaultValue::HalfDexterity => attributes.get(Attribute::Dex) / 2,
        DefaultValue::Education => attributes.get(Attribute::Edu),
    }
}

/// A character's skills, a set under `(name, specialization)`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet {
    skills: Vec<CharacterSkill>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The existing record for this identity, or a fresh one
    pub fn get_or_insert(
        &mut self,
        definition: &SkillDefinition,
        specialization: Option<String>,
        attributes: &AttributeSet,
    ) -> &mut CharacterSkill {
        let specialization = if definition.has_specialization {
            specialization
        } else {
            None
        };

        let idx = match self
            .skills
            .iter()
            .position(|s| s.is(&definition.name, specialization.as_deref()))
        {
            Some(idx) => idx,
            None => {
                self.skills
                    .push(CharacterSkill::new(definition, specialization, attributes));
                self.skills.len() - 1
            }
        };
        &mut self.skills[idx]
    }

    pub fn get(&self, name: &str, specialization: Option<&str>) -> Option<&CharacterSkill> {
        self.skills.iter().find(|s| s.is(name, specialization))
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Skills in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &CharacterSkill> {
        self.skills.iter()
    }

    /// Skills in sheet order
    pub fn sorted(&self) -> Vec<&CharacterSkill> {
        let mut sorted: Vec<&CharacterSkill> = self.skills.iter().collect();
        sorted.sort_by(|a, b| a.sheet_order(b));
        sorted
    }
}
