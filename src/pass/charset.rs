//! Character groups and the password alphabet.

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
// Milder subset of the usual ASCII punctuation.
const SYMBOLS: &str = "!$^*()";

/// Every valid password character, groups concatenated in [`Group::ALL`] order.
pub const ALPHABET: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!$^*()";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl Group {
    pub const ALL: [Group; 4] = [Group::Lowercase, Group::Uppercase, Group::Digit, Group::Symbol];

    pub fn chars(self) -> &'static str {
        match self {
            Group::Lowercase => LOWERCASE,
            Group::Uppercase => UPPERCASE,
            Group::Digit => DIGITS,
            Group::Symbol => SYMBOLS,
        }
    }

    pub fn contains(self, c: u8) -> bool {
        self.chars().as_bytes().contains(&c)
    }

    /// Group a character belongs to, if it is in the alphabet at all.
    pub fn of(c: u8) -> Option<Group> {
        Group::ALL.into_iter().find(|g| g.contains(c))
    }
}

/// Bits drawn per character: `floor(log2(len)) + 1`.
#[inline]
pub fn bit_width(alphabet_len: usize) -> u32 {
    alphabet_len.max(1).ilog2() + 1
}

/// Scale a `width`-bit value onto `[0, len)`: `floor(value * len / 2^width)`.
///
/// `value < 2^width` gives `value * len < 2^width * len`, so the result is
/// always below `len`.
#[inline]
pub fn scale_index(value: u64, width: u32, len: usize) -> usize {
    ((value as u128 * len as u128) >> width) as usize
}

/// Password entropy in bits for a uniform pick from the alphabet.
pub fn entropy_bits(password_length: usize) -> f64 {
    password_length as f64 * (ALPHABET.len() as f64).log2()
}

pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Excellent",
    }
}
