//! Character assembly: attribute allocation, derived scores, then skills
//!
//! Order matters. Attributes come first because skill defaults read DEX
//! and EDU. Occupational skills are laid on the ladder in the order the
//! model listed them, Credit Rating takes the next rung, and only then do
//! interest skills get their flat bonus.

use crate::character::attributes::{self, AttributeSet};
use crate::character::derived::DerivedScores;
use crate::character::sheet::{Character, Profile};
use crate::core::error::Result;
use crate::core::types::Attribute;
use crate::skills::{split_phrases, SkillCatalog, SkillRule, SkillSet};
use rand::Rng;
use serde::Deserialize;

/// Floors for occupational skill slots, most important first.
/// The last rung is reserved for Credit Rating.
pub const OCCUPATION_LADDER: [i32; 9] = [70, 60, 60, 50, 50, 50, 40, 40, 40];

/// Always granted after the occupational list
pub const CREDIT_RATING: &str = "Credit Rating";

/// Flat bonus for each interest (non-occupational) skill
pub const INTEREST_BONUS: i32 = 20;

/// What to do when the attribute priority text cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum AttributePolicy {
    /// Fail the assembly with `MalformedAttributes`
    Strict,
    /// Log a warning and allocate in canonical order (STR first, EDU last)
    #[default]
    DefaultOrder,
}

/// Everything the assembler needs for one character
#[derive(Debug, Clone)]
pub struct AssemblyInput<'a> {
    pub profile: Profile,
    pub attribute_priority: &'a str,
    pub occupational_skills: &'a str,
    pub interest_skills: &'a str,
}

/// Builds characters against a shared catalog
pub struct CharacterAssembler<'c> {
    catalog: &'c SkillCatalog,
    policy: AttributePolicy,
}

impl<'c> CharacterAssembler<'c> {
    pub fn new(catalog: &'c SkillCatalog) -> Self {
        Self {
            catalog,
            policy: AttributePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: AttributePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> AttributePolicy {
        self.policy
    }

    /// Assemble a complete character
    ///
    /// Only a malformed attribute list under `Strict` fails. Skill phrases
    /// that do not resolve are skipped.
    pub fn assemble<R: Rng + ?Sized>(
        &self,
        input: AssemblyInput<'_>,
        rng: &mut R,
    ) -> Result<Character> {
        let attributes = self.allocate_attributes(input.attribute_priority)?;
        let scores = DerivedScores::compute(&attributes, rng);

        let mut skills = SkillSet::new();
        self.apply_occupational(&mut skills, &attributes, input.occupational_skills);
        self.apply_interests(&mut skills, &attributes, input.interest_skills);

        tracing::info!(
            name = %input.profile.name,
            skills = skills.len(),
            "Assembled character"
        );

        Ok(Character {
            profile: input.profile,
            attributes,
            scores,
            skills,
            occupational_skills: input.occupational_skills.to_string(),
            interest_skills: input.interest_skills.to_string(),
        })
    }

    /// Allocate attributes, applying the configured policy on bad input
    pub fn allocate_attributes(&self, priority: &str) -> Result<AttributeSet> {
        match attributes::allocate_attributes(priority) {
            Ok(attrs) => Ok(attrs),
            Err(e) => match self.policy {
                AttributePolicy::Strict => Err(e),
                AttributePolicy::DefaultOrder => {
                    tracing::warn!("{}; falling back to default attribute order", e);
                    Ok(attributes::allocate(&Attribute::ALL))
                }
            },
        }
    }

    /// Occupational phrases on the ladder, then Credit Rating on the next rung
    ///
    /// A phrase that fails to resolve still uses up its rung.
    pub fn apply_occupational(&self, skills: &mut SkillSet, attributes: &AttributeSet, text: &str) {
        let phrases = split_phrases(text);
        let slots = OCCUPATION_LADDER.len() - 1;

        if phrases.len() > slots {
            tracing::warn!(
                given = phrases.len(),
                slots,
                "Too many occupational skills; ignoring the extras"
            );
        }

        let mut next = 0;
        for phrase in phrases.into_iter().take(slots) {
            self.learn_or_advance(
                skills,
                attributes,
                phrase,
                SkillRule::RaiseToAtLeast(OCCUPATION_LADDER[next]),
            );
            next += 1;
        }

        self.learn_or_advance(
            skills,
            attributes,
            CREDIT_RATING,
            SkillRule::RaiseToAtLeast(OCCUPATION_LADDER[next]),
        );
    }

    /// Each interest phrase gets the flat bonus
    pub fn apply_interests(&self, skills: &mut SkillSet, attributes: &AttributeSet, text: &str) {
        for phrase in split_phrases(text) {
            self.learn_or_advance(skills, attributes, phrase, SkillRule::Bonus(INTEREST_BONUS));
        }
    }

    /// Resolve a phrase and apply a rule to its record; false if skipped
    fn learn_or_advance(
        &self,
        skills: &mut SkillSet,
        attributes: &AttributeSet,
        phrase: &str,
        rule: SkillRule,
    ) -> bool {
        let resolved = match self.catalog.resolve(phrase) {
            Ok(resolved) => resolved,
            Err(e) => {
                tracing::warn!("Skipping skill phrase: {}", e);
                return false;
            }
        };

        let skill = skills.get_or_insert(resolved.definition, resolved.specialization, attributes);
        skill.apply(rule);
        tracing::debug!(
            skill = %skill.label(),
            ?rule,
            initial = skill.initial_value,
            bonuses = skill.bonuses,
            "Applied skill rule"
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ChargenError;
    use crate::skills::{DefaultValue, SkillDefinition};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn catalog() -> SkillCatalog {
        SkillCatalog::new(vec![
            SkillDefinition::new("First Aid", false, DefaultValue::Fixed(30)),
            SkillDefinition::new("Library Use", false, DefaultValue::Fixed(20)),
            SkillDefinition::new("Credit Rating", false, DefaultValue::Fixed(0)),
            SkillDefinition::new("Survival", true, DefaultValue::Fixed(10)),
            SkillDefinition::new("Dodge", false, DefaultValue::HalfDexterity),
            SkillDefinition::new("Language (Own)", false, DefaultValue::Education),
        ])
        .unwrap()
    }

    fn input<'a>(attrs: &'a str, occupational: &'a str, interests: &'a str) -> AssemblyInput<'a> {
        AssemblyInput {
            profile: Profile::default(),
            attribute_priority: attrs,
            occupational_skills: occupational,
            interest_skills: interests,
        }
    }

    const ORDER: &str = "DEX, EDU, INT, POW, STR, CON, SIZ, APP";

    #[test]
    fn test_first_aid_first_slot() {
        let catalog = catalog();
        let assembler = CharacterAssembler::new(&catalog);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let pc = assembler.assemble(input(ORDER, "First Aid", ""), &mut rng).unwrap();
        let first_aid = pc.skills.get("First Aid", None).unwrap();
        assert_eq!(first_aid.initial_value, 30);
        assert_eq!(first_aid.bonuses, 40);
        assert_eq!(first_aid.value(), 70);
    }

    #[test]
    fn test_credit_rating_takes_next_rung() {
        let catalog = catalog();
        let assembler = CharacterAssembler::new(&catalog);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let pc = assembler
            .assemble(input(ORDER, "First Aid, Library Use", ""), &mut rng)
            .unwrap();
        // rungs 70, 60 used; Credit Rating gets 60
        assert_eq!(pc.skills.get("Credit Rating", None).unwrap().value(), 60);
    }

    #[test]
    fn test_full_list_credit_rating_gets_last_rung() {
        let catalog = catalog();
        let assembler = CharacterAssembler::new(&catalog);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let occupational = "First Aid, Library Use, Survival (forest), Survival (desert), \
                            Survival (arctic), Survival (sea), Survival (jungle), Survival (mountain)";
        let pc = assembler.assemble(input(ORDER, occupational, ""), &mut rng).unwrap();
        assert_eq!(pc.skills.get("Credit Rating", None).unwrap().value(), 40);
        assert_eq!(pc.skills.get("Survival", Some("mountain")).unwrap().value(), 40);
    }

    #[test]
    fn test_extra_occupational_skills_ignored() {
        let catalog = catalog();
        let assembler = CharacterAssembler::new(&catalog);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let occupational = "Survival (a), Survival (b), Survival (c), Survival (d), \
                            Survival (e), Survival (f), Survival (g), Survival (h), First Aid";
        let pc = assembler.assemble(input(ORDER, occupational, ""), &mut rng).unwrap();
        assert!(pc.skills.get("First Aid", None).is_none());
        assert_eq!(pc.skills.get("Credit Rating", None).unwrap().value(), 40);
    }

    #[test]
    fn test_unknown_phrase_consumes_rung() {
        let catalog = catalog();
        let assembler = CharacterAssembler::new(&catalog);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let pc = assembler
            .assemble(input(ORDER, "Hacking, First Aid", "Basket Weaving"), &mut rng)
            .unwrap();
        // Hacking took 70, First Aid gets 60
        assert_eq!(pc.skills.get("First Aid", None).unwrap().value(), 60);
        assert_eq!(pc.skills.len(), 2);
    }

    #[test]
    fn test_interest_stacks_on_occupational() {
        let catalog = catalog();
        let assembler = CharacterAssembler::new(&catalog);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let pc = assembler
            .assemble(input(ORDER, "Library Use", "Library Use, Survival (forest)"), &mut rng)
            .unwrap();
        let library = pc.skills.get("Library Use", None).unwrap();
        assert_eq!(library.bonuses, 50 + INTEREST_BONUS);
        assert_eq!(library.value(), 90);

        let survival = pc.skills.get("Survival", Some("forest")).unwrap();
        assert_eq!(survival.value(), 30);
    }

    #[test]
    fn test_attribute_dependent_defaults() {
        let catalog = catalog();
        let assembler = CharacterAssembler::new(&catalog);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        // DEX 80, EDU 70
        let pc = assembler
            .assemble(input(ORDER, "", "Dodge, Language (Own)"), &mut rng)
            .unwrap();
        assert_eq!(pc.skills.get("Dodge", None).unwrap().initial_value, 40);
        assert_eq!(pc.skills.get("Language (Own)", None).unwrap().initial_value, 70);
    }

    #[test]
    fn test_strict_policy_propagates() {
        let catalog = catalog();
        let assembler = CharacterAssembler::new(&catalog).with_policy(AttributePolicy::Strict);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let result = assembler.assemble(input("STR, DEX", "First Aid", ""), &mut rng);
        assert!(matches!(result, Err(ChargenError::MalformedAttributes(_))));
    }

    #[test]
    fn test_default_order_policy_falls_back() {
        let catalog = catalog();
        let assembler = CharacterAssembler::new(&catalog);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let pc = assembler
            .assemble(input("I think STR matters most", "First Aid", ""), &mut rng)
            .unwrap();
        assert_eq!(pc.attributes.get(Attribute::Str), 80);
        assert_eq!(pc.attributes.get(Attribute::Edu), 40);
        assert!(pc.skills.get("First Aid", None).is_some());
    }

    #[test]
    fn test_empty_catalog_yields_no_skills() {
        let catalog = SkillCatalog::empty();
        let assembler = CharacterAssembler::new(&catalog);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let pc = assembler
            .assemble(input(ORDER, "First Aid, Library Use", "Dodge"), &mut rng)
            .unwrap();
        assert!(pc.skills.is_empty());
    }
}
