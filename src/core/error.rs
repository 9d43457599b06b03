use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChargenError {
    #[error("Malformed attribute priority: {0}")]
    MalformedAttributes(String),

    #[error("Unknown skill: {0}")]
    UnknownSkill(String),

    #[error("Skill catalog error: {0}")]
    Catalog(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ChargenError>;
