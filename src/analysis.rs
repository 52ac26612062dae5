//! Strength tiers.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Minimum length, in characters, for a password to be anything but weak.
pub const MIN_RATED_LENGTH: usize = 12;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
}

impl Strength {
    pub const ALL: [Strength; 3] = [Strength::Weak, Strength::Moderate, Strength::Strong];

    /// The 1-3 score used to plot a tier.
    pub fn score(self) -> u32 {
        match self {
            Strength::Weak => 1,
            Strength::Moderate => 2,
            Strength::Strong => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Moderate => "Moderate",
            Strength::Strong => "Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown strength {0:?}; expected one of weak, moderate or strong")]
pub struct ParseStrengthError(String);

impl FromStr for Strength {
    type Err = ParseStrengthError;

    fn from_str(s: &str) -> Result<Strength, ParseStrengthError> {
        Strength::ALL
            .into_iter()
            .find(|tier| tier.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseStrengthError(s.to_owned()))
    }
}

/// Rate a password.
///
/// Anything shorter than [`MIN_RATED_LENGTH`] is weak. Longer passwords are strong with an
/// uppercase letter, a digit and a symbol; moderate with a digit plus either an uppercase letter
/// or a symbol. Uppercase plus symbols without a digit stays weak.
pub fn analyze(password: &str) -> Strength {
    if password.chars().count() < MIN_RATED_LENGTH {
        return Strength::Weak;
    }
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| !c.is_ascii_alphanumeric());

    if has_upper && has_digit && has_symbol {
        Strength::Strong
    } else if (has_upper && has_digit) || (has_digit && has_symbol) {
        Strength::Moderate
    } else {
        Strength::Weak
    }
}
