//! Utilities for generating passwords.

use rand::Rng;

pub static LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub static UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub static DIGITS: &str = "0123456789";
pub static SYMBOLS: &str = "!@#$%^&*()_+[]{}|;:',.<>?";

/// The optional character classes a password may be drawn from. Lowercase letters are always
/// part of the alphabet.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CharClasses {
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl CharClasses {
    pub fn all() -> CharClasses {
        CharClasses {
            uppercase: true,
            digits: true,
            symbols: true,
        }
    }

    /// The alphabet implied by these classes: lowercase, then each enabled class in the order
    /// uppercase, digits, symbols.
    pub fn alphabet(&self) -> Vec<char> {
        let mut abc = Vec::new();
        abc.extend(LOWERCASE.chars());
        if self.uppercase {
            abc.extend(UPPERCASE.chars());
        }
        if self.digits {
            abc.extend(DIGITS.chars());
        }
        if self.symbols {
            abc.extend(SYMBOLS.chars());
        }
        abc
    }
}

/// Generate a password by sampling the alphabet for `classes` uniformly, with replacement, `len`
/// times.
///
/// `rand`'s uniform range sampler rejects out-of-range values rather than taking a modulus, so no
/// character is favoured. Any `Rng` will do; the strength of the result is only as good as the
/// generator passed in.
pub fn generate_random_password<R>(rng: &mut R, classes: CharClasses, len: usize) -> crate::Secret
where
    R: Rng + ?Sized,
{
    let alphabet = classes.alphabet();
    let mut secret = crate::Secret(String::with_capacity(len));
    for _ in 0..len {
        // `alphabet` always holds at least the lowercase letters.
        let idx = rng.gen_range(0..alphabet.len());
        secret.0.push(alphabet[idx]);
    }
    log::debug!(
        "generated a {}-character password from a {}-character alphabet",
        len,
        alphabet.len()
    );
    secret
}
