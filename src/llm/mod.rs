//! Model-facing side: HTTP client, prompts, and the generation driver

pub mod client;
pub mod generator;
pub mod ideas;
pub mod prompts;

pub use client::{LlmClient, TextGenerator, TokenUsage};
pub use generator::{CharacterGenerator, GeneratedTexts};
pub use ideas::random_idea;
