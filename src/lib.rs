//! CoC Chargen - Call of Cthulhu character generator
//!
//! A text model writes the character; the rules engine turns its answers
//! into attribute scores, derived scores and stacked skill values.

pub mod character;
pub mod core;
pub mod llm;
pub mod render;
pub mod skills;
