//! Password request validation and generation.

pub mod charset;
mod error;
mod generate;
mod validate;

pub use charset::CharacterClass;
pub use error::{BuildError, ConfigError};
pub use generate::{Password, build};
pub use validate::{PasswordRequest, ValidatedConfig, validate};
