//! Canned advice on improving a password.

use std::fmt;

use serde::Serialize;

use crate::{CommonPasswords, PassLabError};

/// Below this many characters, suggest a longer password.
pub const MIN_SUGGESTED_LENGTH: usize = 8;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Suggestion {
    IncreaseLength,
    AddSpecialCharacter,
    MixCase,
    AddDigit,
    AvoidCommonPasswords,
    /// Nothing to improve.
    Strong,
}

impl Suggestion {
    pub fn message(self) -> &'static str {
        match self {
            Suggestion::IncreaseLength => {
                "Increase the length of your password to at least 8 characters."
            }
            Suggestion::AddSpecialCharacter => {
                "Add at least one special character (e.g., !, @, #, $)."
            }
            Suggestion::MixCase => "Use a mix of uppercase and lowercase letters.",
            Suggestion::AddDigit => "Include at least one number.",
            Suggestion::AvoidCommonPasswords => "Avoid using common passwords.",
            Suggestion::Strong => "Your password is strong!",
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Suggest improvements for `password`, in a fixed order: length, special characters, case, digits,
/// then common passwords. Every check that applies contributes; if none does, the result is just
/// [`Suggestion::Strong`].
///
/// Fails if `common` was never loaded.
pub fn suggest_improvements(
    password: &str,
    common: &CommonPasswords,
) -> Result<Vec<Suggestion>, PassLabError> {
    let is_common = common.contains(password)?;

    let mut suggestions = Vec::new();
    if password.chars().count() < MIN_SUGGESTED_LENGTH {
        suggestions.push(Suggestion::IncreaseLength);
    }
    if password.chars().all(|c| c.is_ascii_alphanumeric()) {
        suggestions.push(Suggestion::AddSpecialCharacter);
    }
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    if !has_lower || !has_upper {
        suggestions.push(Suggestion::MixCase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        suggestions.push(Suggestion::AddDigit);
    }
    if is_common {
        suggestions.push(Suggestion::AvoidCommonPasswords);
    }

    if suggestions.is_empty() {
        suggestions.push(Suggestion::Strong);
    }
    Ok(suggestions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_password_gets_everything() {
        let s = suggest_improvements("abc", &CommonPasswords::empty()).unwrap();
        assert_eq!(
            s,
            [
                Suggestion::IncreaseLength,
                Suggestion::AddSpecialCharacter,
                Suggestion::MixCase,
                Suggestion::AddDigit,
            ]
        );
    }

    #[test]
    fn good_password_is_strong() {
        let s = suggest_improvements("Str0ng!Pass", &CommonPasswords::empty()).unwrap();
        assert_eq!(s, [Suggestion::Strong]);
    }

    #[test]
    fn common_password_is_flagged_even_when_otherwise_fine() {
        let common = CommonPasswords::parse("Str0ng!Pass\nhunter2");
        let s = suggest_improvements("Str0ng!Pass", &common).unwrap();
        assert_eq!(s, [Suggestion::AvoidCommonPasswords]);
    }

    #[test]
    fn common_suggestion_comes_last() {
        let common = CommonPasswords::parse("password");
        let s = suggest_improvements("password", &common).unwrap();
        assert_eq!(s.last(), Some(&Suggestion::AvoidCommonPasswords));
        assert!(!s.contains(&Suggestion::Strong));
    }

    #[test]
    fn missing_uppercase_alone_asks_for_mixed_case() {
        let s = suggest_improvements("lower$case1", &CommonPasswords::empty()).unwrap();
        assert_eq!(s, [Suggestion::MixCase]);
    }

    #[test]
    fn empty_password() {
        let s = suggest_improvements("", &CommonPasswords::empty()).unwrap();
        assert_eq!(s.len(), 4);
        assert_eq!(s[0], Suggestion::IncreaseLength);
    }

    #[test]
    fn not_loaded_list_is_an_error() {
        let err = suggest_improvements("Str0ng!Pass", &CommonPasswords::NotLoaded).unwrap_err();
        assert!(err.is_not_loaded());
    }
}
