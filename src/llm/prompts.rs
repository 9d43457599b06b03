//! Prompts for the five generation calls
//!
//! Each call gets a system prompt with the format rules and the character
//! description (or the player's request) as the user message. The rules
//! engine only parses what these prompts ask for, so the format lines
//! here and the parsers in `skills::phrase` and `character::attributes`
//! have to agree.

use crate::core::config::SettingConfig;
use crate::core::types::Attribute;

/// Name / age / tagline / blank / two paragraphs
pub fn description_prompt(setting: &SettingConfig) -> String {
    format!(
        "Generate a character for a Call of Cthulhu RPG game.
Give me 2 paragraphs describing the character. The story is set {era} in {country}.
On the first line return the character name by itself, without other info.
On the second line, return the characters age.
On the third line, return a tagline or job or other short description, a few words MAXIMUM.
These lines are followed by a blank line, and then the 2 paragraphs of short description and history.
Answer in {language}.",
        era = setting.era,
        country = setting.country,
        language = setting.language,
    )
}

pub fn description_request(request: &str) -> String {
    format!("Character description: {}", request)
}

/// Comma-separated attribute codes, most important first
pub fn attribute_priority_prompt() -> String {
    let attributes: Vec<String> = Attribute::ALL
        .iter()
        .map(|a| format!("{} ({})", a.long_name(), a.code()))
        .collect();

    format!(
        "I will give you a character description of a Call of Cthulhu RPG character. Based on this description, order the following
attributes of the character in descending order of importance. For example, for someone working physical jobs, STR is probably important. For someone working with
people, APP might be important. For a professor, INT or EDU is most important. The attributes to order are: {}.
Return ONLY the comma separated list of attribute codes in descending order of importance.
DO NOT return anything else, no descriptions or explanations.",
        attributes.join(", ")
    )
}

pub fn traits_prompt(setting: &SettingConfig) -> String {
    format!(
        "I will give you a character description of a Call of Cthulhu RPG character. Based on this description, you will determine some
traits of the character to help the player portray a unique character. List the following traits, one per line:

- Ideology/Beliefs
- Significant People
- Meaningful Locations
- Treasured Possessions
- Trait
- Injuries and Scars (could be none)

In the answer, start the line with the trait type, add a colon (:) and then the description.

For example:
Traits: optimistic, trusting.
Ideology/Belief: when life hands you an opportunity, seize it with both arms.

Answer in {}.",
        setting.language
    )
}

/// Shared format rules for both skill lists
fn skill_format_rules(setting: &SettingConfig, skill_listing: &[String]) -> String {
    format!(
        "Return only the list, on a single line, and do not return anything else. Do not explain your answer or give explanations or comments.
For Art/Craft, Science, Pilot, Survival also list the specialisation if applicable. Show this in parentheses after the skill name. For example: Survival (forest).
For own language use Language (Own).
For other languages, specify the concrete language. For example: Language (German) or Language (Arabic) or Language (Latin).
Do not include Credit Rating in your response.
The story is set {} in {}.

All possible skills: {}
",
        setting.era,
        setting.country,
        skill_listing.join(", ")
    )
}

/// Eight occupational skills, most important first
pub fn occupational_skills_prompt(setting: &SettingConfig, skill_listing: &[String]) -> String {
    format!(
        "I will give you a character description of a Call of Cthulhu RPG character.
Based on this description, you will determine which 8
Call of Cthulhu RPG skills are appropriate for this character as occupation skills.
You will return each skill in a comma separated list with the most important one first.
{}",
        skill_format_rules(setting, skill_listing)
    )
}

/// `count` interest skills, unordered
pub fn interest_skills_prompt(
    setting: &SettingConfig,
    skill_listing: &[String],
    count: u32,
) -> String {
    format!(
        "I will give you a character description of a Call of Cthulhu RPG character.
Based on this description, you will determine which {} Call of Cthulhu RPG skills are appropriate for this character as non-occupation skills.
You will return each skill in a comma separated list.
These skills represent interests of the character, and do not necessarily relate to his or her occupation.
{}",
        count,
        skill_format_rules(setting, skill_listing)
    )
}
