//! Drive the model through one character, then hand off to the rules engine
//!
//! Five calls, in order: description, attribute priority, traits,
//! occupational skills, interest skills. All model traffic happens here;
//! once the texts are in, assembly is synchronous and deterministic for a
//! given RNG state.

use crate::character::{AssemblyInput, Character, CharacterAssembler, Profile};
use crate::core::config::GeneratorConfig;
use crate::core::error::Result;
use crate::llm::client::TextGenerator;
use crate::llm::prompts;
use crate::skills::SkillCatalog;
use rand::Rng;

/// Raw model answers for one character
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedTexts {
    pub description: String,
    pub attribute_priority: String,
    pub traits: String,
    pub occupational_skills: String,
    pub interest_skills: String,
}

/// Generates characters with a text model and a shared skill catalog
pub struct CharacterGenerator<'a, G: TextGenerator + ?Sized> {
    llm: &'a G,
    catalog: &'a SkillCatalog,
    config: &'a GeneratorConfig,
}

impl<'a, G: TextGenerator + ?Sized> CharacterGenerator<'a, G> {
    pub fn new(llm: &'a G, catalog: &'a SkillCatalog, config: &'a GeneratorConfig) -> Self {
        Self {
            llm,
            catalog,
            config,
        }
    }

    /// Generate a complete character from a short request
    pub async fn generate<R: Rng + ?Sized>(&self, request: &str, rng: &mut R) -> Result<Character> {
        let interest_count = rng.gen_range(
            self.config.assembly.interest_skill_min..=self.config.assembly.interest_skill_max,
        );
        let texts = self.generate_texts(request, interest_count).await?;
        self.assemble(&texts, rng)
    }

    /// Run the five model calls
    pub async fn generate_texts(&self, request: &str, interest_count: u32) -> Result<GeneratedTexts> {
        let setting = &self.config.setting;

        tracing::info!(request, "Generating character description");
        let description = self
            .llm
            .complete(
                &prompts::description_prompt(setting),
                &prompts::description_request(request),
            )
            .await?;

        tracing::info!("Ranking attributes");
        let attribute_priority = self
            .llm
            .complete(&prompts::attribute_priority_prompt(), &description)
            .await?;

        tracing::info!("Generating traits");
        let traits = self
            .llm
            .complete(&prompts::traits_prompt(setting), &description)
            .await?;

        let listing = self.catalog.prompt_listing();

        tracing::info!("Choosing occupational skills");
        let occupational_skills = self
            .llm
            .complete(
                &prompts::occupational_skills_prompt(setting, &listing),
                &description,
            )
            .await?;

        tracing::info!(count = interest_count, "Choosing interest skills");
        let interest_skills = self
            .llm
            .complete(
                &prompts::interest_skills_prompt(setting, &listing, interest_count),
                &description,
            )
            .await?;

        Ok(GeneratedTexts {
            description,
            attribute_priority,
            traits,
            occupational_skills,
            interest_skills,
        })
    }

    /// Turn model answers into a character sheet
    pub fn assemble<R: Rng + ?Sized>(&self, texts: &GeneratedTexts, rng: &mut R) -> Result<Character> {
        let assembler =
            CharacterAssembler::new(self.catalog).with_policy(self.config.assembly.attribute_policy);

        assembler.assemble(
            AssemblyInput {
                profile: Profile::from_description(&texts.description, texts.traits.as_str()),
                attribute_priority: texts.attribute_priority.trim(),
                occupational_skills: texts.occupational_skills.trim(),
                interest_skills: texts.interest_skills.trim(),
            },
            rng,
        )
    }
}
