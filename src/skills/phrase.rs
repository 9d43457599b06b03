//! Resolve free-text skill phrases against the catalog
//!
//! The model writes skills as `"Survival (forest)"`, `"Language (Own)"` or
//! `"First Aid"`. A phrase is split into a base name and an optional
//! parenthetical, then matched: the whole phrase first, the base name second.

use crate::core::error::{ChargenError, Result};
use crate::skills::catalog::{SkillCatalog, SkillDefinition};
use nom::bytes::complete::take_till;
use nom::character::complete::char;
use nom::combinator::opt;
use nom::sequence::preceded;
use nom::{IResult, Parser};

/// A phrase split into its parts, before catalog lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillPhrase<'a> {
    /// The phrase as given, trimmed
    pub full: &'a str,
    /// Text before the first `(`, trimmed
    pub base: &'a str,
    /// Text inside the parenthesis, trimmed; `None` if absent or blank
    pub parenthetical: Option<&'a str>,
}

/// A phrase matched to a catalog definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSkill<'c> {
    pub definition: &'c SkillDefinition,
    /// Only ever `Some` for definitions that take a specialization
    pub specialization: Option<String>,
}

fn base_then_parenthetical(input: &str) -> IResult<&str, (&str, Option<&str>)> {
    (
        take_till(|c: char| c == '('),
        opt(preceded(char('('), take_till(|c: char| c == ')'))),
    )
        .parse(input)
}

/// Split a phrase into base name and parenthetical
pub fn parse_skill_phrase(phrase: &str) -> SkillPhrase<'_> {
    let full = phrase.trim();
    let (base, parenthetical) = match base_then_parenthetical(full) {
        Ok((_, (base, paren))) => (base.trim(), paren.map(str::trim)),
        Err(_) => (full, None),
    };

    SkillPhrase {
        full,
        base,
        parenthetical: parenthetical.filter(|p| !p.is_empty()),
    }
}

/// Split a comma-separated model answer into phrases
///
/// Blank entries are dropped and a trailing period is ignored.
pub fn split_phrases(text: &str) -> Vec<&str> {
    text.split(',')
        .map(|s| s.trim().trim_end_matches('.').trim())
        .filter(|s| !s.is_empty())
        .collect()
}

impl SkillCatalog {
    /// Resolve one phrase to a definition and specialization
    ///
    /// Returns `UnknownSkill` when neither the full phrase nor its base
    /// name is in the catalog.
    pub fn resolve(&self, phrase: &str) -> Result<ResolvedSkill<'_>> {
        let parsed = parse_skill_phrase(phrase);

        let definition = self
            .find(parsed.full)
            .or_else(|| self.find(parsed.base))
            .ok_or_else(|| ChargenError::UnknownSkill(parsed.full.to_string()))?;

        let specialization = if definition.has_specialization {
            parsed.parenthetical.map(str::to_string)
        } else {
            None
        };

        Ok(ResolvedSkill {
            definition,
            specialization,
        })
    }
}
