//! Attribute scores and the priority allocator
//!
//! The model ranks the eight characteristics by importance; the allocator
//! hands out a fixed ladder of values in that order.

use crate::core::error::{ChargenError, Result};
use crate::core::types::Attribute;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Values handed out by priority position, most important first
pub const ATTRIBUTE_LADDER: [i32; 8] = [80, 70, 60, 60, 50, 50, 50, 40];

/// One score per characteristic, stored in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSet {
    scores: [i32; 8],
}

impl AttributeSet {
    /// Scores given in canonical order: STR, CON, SIZ, DEX, INT, APP, POW, EDU
    pub fn from_scores(scores: [i32; 8]) -> Self {
        Self { scores }
    }

    pub fn get(&self, attribute: Attribute) -> i32 {
        self.scores[attribute.index()]
    }

    /// (attribute, score) pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        Attribute::ALL.into_iter().map(move |a| (a, self.get(a)))
    }
}

impl fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(attr, score)| format!("{}: {}", attr, score))
            .collect();
        f.write_str(&parts.join(", "))
    }
}

/// Parse a comma-separated priority list into exactly eight distinct attributes
pub fn parse_priority(text: &str) -> Result<[Attribute; 8]> {
    let entries: Vec<&str> = text
        .split(',')
        .map(|s| s.trim().trim_end_matches('.').trim())
        .filter(|s| !s.is_empty())
        .collect();

    if entries.len() != Attribute::ALL.len() {
        return Err(ChargenError::MalformedAttributes(format!(
            "expected 8 attributes, got {} in '{}'",
            entries.len(),
            text.trim()
        )));
    }

    let mut order = [Attribute::Str; 8];
    let mut seen = [false; 8];
    for (slot, entry) in entries.iter().enumerate() {
        let attr: Attribute = entry
            .parse()
            .map_err(ChargenError::MalformedAttributes)?;
        if seen[attr.index()] {
            return Err(ChargenError::MalformedAttributes(format!(
                "{} listed more than once",
                attr
            )));
        }
        seen[attr.index()] = true;
        order[slot] = attr;
    }

    Ok(order)
}

/// Assign the ladder to attributes in the given priority order
pub fn allocate(order: &[Attribute; 8]) -> AttributeSet {
    let mut scores = [0; 8];
    for (attr, value) in order.iter().zip(ATTRIBUTE_LADDER) {
        scores[attr.index()] = value;
    }
    AttributeSet::from_scores(scores)
}

/// Parse and allocate in one step
pub fn allocate_attributes(text: &str) -> Result<AttributeSet> {
    let order = parse_priority(text)?;
    Ok(allocate(&order))
}
