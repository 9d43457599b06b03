pub mod config;
pub mod dice;
pub mod error;
pub mod types;

pub use config::GeneratorConfig;
pub use error::{ChargenError, Result};
pub use types::Attribute;
