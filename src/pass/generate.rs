//! Password generation.

use std::fmt;

use log::debug;
use zeroize::{Zeroize, Zeroizing};

use super::charset;
use super::error::BuildError;
use super::validate::ValidatedConfig;
use crate::rng::RandomSource;

/// Generated password. The text is wiped from memory on drop.
pub struct Password(Zeroizing<String>);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars>)", self.len())
    }
}

/// Build a password for `config`.
///
/// One character is drawn from each active class first, so every class is
/// represented. The rest is drawn uniformly from the union alphabet, then the
/// whole sequence is shuffled.
pub fn build<R: RandomSource>(config: &ValidatedConfig, rng: &mut R) -> Result<Password, BuildError> {
    let chars = charset::build(config.classes());
    if chars.is_empty() {
        return Err(BuildError::NoCharactersAvailable);
    }

    let length = config.length();
    let mut buf: Vec<u8> = Vec::new();
    buf.try_reserve_exact(length.max(config.classes().len()))
        .map_err(|_| BuildError::AllocationFailed(length))?;

    for class in config.classes() {
        buf.push(random_byte(class.alphabet(), rng));
    }

    if length < buf.len() {
        buf.truncate(length);
    } else {
        let filler = length - buf.len();
        buf.extend((0..filler).map(|_| random_byte(&chars, rng)));
    }

    shuffle(&mut buf, rng);

    let password: String = buf.iter().map(|&b| char::from(b)).collect();
    buf.zeroize();

    debug!(
        "built {} char password from {} char alphabet",
        password.len(),
        chars.len()
    );
    Ok(Password(Zeroizing::new(password)))
}

#[inline]
fn random_byte<R: RandomSource>(chars: &[u8], rng: &mut R) -> u8 {
    chars[rng.index(chars.len())]
}

/// Fisher-Yates.
#[inline]
fn shuffle<R: RandomSource>(chars: &mut [u8], rng: &mut R) {
    for i in (1..chars.len()).rev() {
        let j = rng.index(i + 1);
        chars.swap(i, j);
    }
}
