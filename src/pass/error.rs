use thiserror::Error;

/// Rejected password request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("The --all flag cannot be used with --letters, --digits, or --special-chars.")]
    ConflictingFlags,

    #[error("Password length must be at least 8 characters (got {0}). Please choose a longer length.")]
    LengthTooShort(i64),

    #[error("Password length must be at most 65536 characters (got {0}).")]
    LengthTooLong(i64),

    #[error(
        "At least one of --all, --letters, --digits, or --special-chars must be specified. Please choose at least one."
    )]
    NoClassSelected,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("No characters available to build a password from.")]
    NoCharactersAvailable,

    #[error("Cannot allocate a {0} character password.")]
    AllocationFailed(usize),
}
