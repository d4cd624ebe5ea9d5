//! Character classes and the alphabets they draw from.

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SPECIAL: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharacterClass {
    Letters,
    Digits,
    Special,
}

impl CharacterClass {
    /// Canonical iteration order. Required characters are drawn in this order.
    pub const ALL: [CharacterClass; 3] = [
        CharacterClass::Letters,
        CharacterClass::Digits,
        CharacterClass::Special,
    ];

    /// Fixed, ordered ASCII alphabet for this class.
    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharacterClass::Letters => LETTERS,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Special => SPECIAL,
        }
    }

    #[cfg(test)]
    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.alphabet().contains(&(c as u8))
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Letters => "letters",
            CharacterClass::Digits => "digits",
            CharacterClass::Special => "special",
        }
    }
}

/// Build the union alphabet of `classes`, in the order given.
pub fn build(classes: &[CharacterClass]) -> Vec<u8> {
    let mut chars = Vec::with_capacity(size(classes));
    for class in classes {
        chars.extend_from_slice(class.alphabet());
    }
    chars
}

/// Size of the union alphabet (for entropy calculation).
pub fn size(classes: &[CharacterClass]) -> usize {
    classes.iter().map(|c| c.alphabet().len()).sum()
}

/// Bits of entropy for a password of `length` drawn uniformly from `charset_size` symbols.
pub fn calculate_entropy(length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    length as f64 * (charset_size as f64).log2()
}
