//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The eight characteristics of a Call of Cthulhu investigator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Attribute {
    Str,
    Con,
    Siz,
    Dex,
    Int,
    App,
    Pow,
    Edu,
}

impl Attribute {
    /// All attributes in canonical sheet order
    pub const ALL: [Attribute; 8] = [
        Attribute::Str,
        Attribute::Con,
        Attribute::Siz,
        Attribute::Dex,
        Attribute::Int,
        Attribute::App,
        Attribute::Pow,
        Attribute::Edu,
    ];

    /// Three-letter code as printed on the sheet
    pub fn code(&self) -> &'static str {
        match self {
            Attribute::Str => "STR",
            Attribute::Con => "CON",
            Attribute::Siz => "SIZ",
            Attribute::Dex => "DEX",
            Attribute::Int => "INT",
            Attribute::App => "APP",
            Attribute::Pow => "POW",
            Attribute::Edu => "EDU",
        }
    }

    /// Full English name, as used in the attribute-priority prompt
    pub fn long_name(&self) -> &'static str {
        match self {
            Attribute::Str => "Strength",
            Attribute::Con => "Constitution",
            Attribute::Siz => "Size",
            Attribute::Dex => "Dexterity",
            Attribute::Int => "Intelligence",
            Attribute::App => "Appearance",
            Attribute::Pow => "Power",
            Attribute::Edu => "Education",
        }
    }

    /// Position in the canonical order
    pub fn index(&self) -> usize {
        *self as usize
    }

    fn from_word(word: &str) -> Option<Self> {
        Attribute::ALL.into_iter().find(|a| {
            a.code().eq_ignore_ascii_case(word) || a.long_name().eq_ignore_ascii_case(word)
        })
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Attribute {
    type Err = String;

    /// Accepts `STR`, `str`, `Strength` and `Strength (STR)`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(attr) = Self::from_word(s) {
            return Ok(attr);
        }
        if let (Some(open), Some(close)) = (s.find('('), s.rfind(')')) {
            if open < close {
                if let Some(attr) = Self::from_word(s[open + 1..close].trim()) {
                    return Ok(attr);
                }
            }
            if let Some(attr) = Self::from_word(s[..open].trim()) {
                return Ok(attr);
            }
        }
        Err(format!("unrecognised attribute '{}'", s))
    }
}
