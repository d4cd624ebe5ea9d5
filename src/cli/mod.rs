//! Command-line surface: flags, output routing, and user-facing messages.

mod context;
mod flags;
pub mod prompts;
mod quiet;

use std::io;

use thiserror::Error;

use crate::pass::{BuildError, ConfigError};

pub use context::Context;
pub use flags::CliFlags;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("Failed to copy to clipboard: {0}")]
    Clipboard(String),

    #[error("Failed to write password: {0}")]
    Output(#[from] io::Error),
}

impl Error {
    /// Taxonomy name shown in front of the message.
    pub fn family(&self) -> &'static str {
        match self {
            Error::Config(_) => "ConfigError",
            Error::Build(_) => "BuildError",
            Error::Clipboard(_) => "ClipboardError",
            Error::Output(_) => "OutputError",
        }
    }
}

pub fn run(flags: CliFlags) -> Result<(), Error> {
    Context::new(flags).run()
}
