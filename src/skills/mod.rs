//! Skill catalog, phrase resolution and per-character skill values
//!
//! The model names skills in free text. The catalog says which names are
//! real and how each one starts; the phrase resolver maps text onto the
//! catalog; the value rules stack occupational floors and interest bonuses.

pub mod catalog;
pub mod phrase;
pub mod value;

pub use catalog::{DefaultValue, SkillCatalog, SkillDefinition};
pub use phrase::{parse_skill_phrase, split_phrases, ResolvedSkill, SkillPhrase};
pub use value::{CharacterSkill, SkillRule, SkillSet};
