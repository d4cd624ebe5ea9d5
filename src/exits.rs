//! Process exit codes.
//!
//! Request errors live in the 100 range and generation errors in the 200
//! range so scripts can tell them apart.

use std::process::ExitCode;

use crate::cli::Error;
use crate::pass::{BuildError, ConfigError};

pub const CLIPBOARD: u8 = 3;
pub const OUTPUT: u8 = 4;

pub fn status(err: &Error) -> u8 {
    match err {
        Error::Config(ConfigError::ConflictingFlags) => 100,
        Error::Config(ConfigError::LengthTooShort(_)) => 101,
        Error::Config(ConfigError::NoClassSelected) => 102,
        Error::Config(ConfigError::LengthTooLong(_)) => 103,
        Error::Build(BuildError::NoCharactersAvailable) => 200,
        Error::Build(BuildError::AllocationFailed(_)) => 201,
        Error::Clipboard(_) => CLIPBOARD,
        Error::Output(_) => OUTPUT,
    }
}

pub fn code(err: &Error) -> ExitCode {
    ExitCode::from(status(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_distinct_nonzero_status() {
        let errors = [
            Error::Config(ConfigError::ConflictingFlags),
            Error::Config(ConfigError::LengthTooShort(3)),
            Error::Config(ConfigError::NoClassSelected),
            Error::Config(ConfigError::LengthTooLong(70_000)),
            Error::Build(BuildError::NoCharactersAvailable),
            Error::Build(BuildError::AllocationFailed(usize::MAX)),
            Error::Clipboard("gone".into()),
            Error::Output(std::io::Error::other("closed")),
        ];
        let mut codes: Vec<u8> = errors.iter().map(status).collect();
        assert!(codes.iter().all(|&c| c != 0));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn families_keep_their_ranges() {
        assert_eq!(status(&ConfigError::LengthTooShort(0).into()), 101);
        assert_eq!(status(&BuildError::NoCharactersAvailable.into()), 200);
    }

    #[test]
    fn display_and_family() {
        let err: Error = ConfigError::ConflictingFlags.into();
        assert_eq!(err.family(), "ConfigError");
        assert_eq!(
            err.to_string(),
            "The --all flag cannot be used with --letters, --digits, or --special-chars."
        );
        let err: Error = ConfigError::LengthTooShort(5).into();
        assert_eq!(
            err.to_string(),
            "Password length must be at least 8 characters (got 5). Please choose a longer length."
        );
    }
}
