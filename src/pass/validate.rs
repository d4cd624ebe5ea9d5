//! Request validation: turns raw class toggles and a length into a `ValidatedConfig`.

use log::debug;

use super::charset::{self, CharacterClass};
use super::error::ConfigError;

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 65_536;
pub const DEFAULT_LENGTH: i64 = 16;

/// Raw password request as the caller supplied it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordRequest {
    pub use_all: bool,
    pub length: i64,
    pub use_letters: bool,
    pub use_digits: bool,
    pub use_special: bool,
}

impl PasswordRequest {
    /// Request built from an explicit list of classes, without `use_all`.
    pub fn from_classes(classes: &[CharacterClass], length: i64) -> Self {
        Self {
            use_all: false,
            length,
            use_letters: classes.contains(&CharacterClass::Letters),
            use_digits: classes.contains(&CharacterClass::Digits),
            use_special: classes.contains(&CharacterClass::Special),
        }
    }

    fn any_individual(&self) -> bool {
        self.use_letters || self.use_digits || self.use_special
    }

    fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Letters => self.use_letters,
            CharacterClass::Digits => self.use_digits,
            CharacterClass::Special => self.use_special,
        }
    }
}

impl Default for PasswordRequest {
    fn default() -> Self {
        Self {
            use_all: false,
            length: DEFAULT_LENGTH,
            use_letters: false,
            use_digits: false,
            use_special: false,
        }
    }
}

/// Active classes plus an exact length. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfig {
    classes: Vec<CharacterClass>,
    length: usize,
}

impl ValidatedConfig {
    /// Assemble a config directly, bypassing `validate`.
    ///
    /// Classes are put in canonical order with duplicates removed. Neither the
    /// length floor nor a non-empty class set is enforced here.
    pub fn new(classes: &[CharacterClass], length: usize) -> Self {
        let classes = CharacterClass::ALL
            .into_iter()
            .filter(|c| classes.contains(c))
            .collect();
        Self { classes, length }
    }

    pub fn classes(&self) -> &[CharacterClass] {
        &self.classes
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Estimated entropy in bits of a password uniformly drawn from the union alphabet.
    pub fn entropy_bits(&self) -> f64 {
        charset::calculate_entropy(self.length, charset::size(&self.classes))
    }
}

/// Validate and normalize a request.
///
/// With no class flag set at all the request means "all classes". That
/// default is applied before the conflict check.
pub fn validate(request: &PasswordRequest) -> Result<ValidatedConfig, ConfigError> {
    let use_all = request.use_all || !request.any_individual();

    if request.use_all && request.any_individual() {
        return Err(ConfigError::ConflictingFlags);
    }

    let length = usize::try_from(request.length)
        .ok()
        .filter(|&len| len >= MIN_LENGTH)
        .ok_or(ConfigError::LengthTooShort(request.length))?;
    if length > MAX_LENGTH {
        return Err(ConfigError::LengthTooLong(request.length));
    }

    let classes: Vec<CharacterClass> = CharacterClass::ALL
        .into_iter()
        .filter(|&c| use_all || request.is_enabled(c))
        .collect();

    if classes.is_empty() {
        return Err(ConfigError::NoClassSelected);
    }

    let config = ValidatedConfig::new(&classes, length);
    let names: Vec<&str> = config.classes.iter().map(|c| c.name()).collect();
    debug!(
        "validated request {:?}: classes [{}], length {}, ~{:.1} bits",
        request,
        names.join(", "),
        config.length,
        config.entropy_bits()
    );
    Ok(config)
}
