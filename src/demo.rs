//! A fixed set of sample passwords to browse, filter by strength and search.

use serde::Serialize;

use crate::{analyze, CommonPasswords, PassLabError, Strength, Suggestion};

pub static DEMO_PASSWORDS: &[&str] = &[
    "123456",
    "password",
    "qwerty",
    "letmein",
    "iloveyou",
    "Summer2024",
    "P@ssw0rd",
    "correcthorsebatterystaple",
    "Tr0ub4dor&3",
    "monkey123456",
    "Password1234",
    "blue-sky-42-river",
    "N0v3mb3r!Rain#Falls",
    "Gh7$kLp2@xQz9!mW",
    "ALLCAPS&SYMBOLS!!",
];

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct DemoEntry {
    pub password: &'static str,
    pub strength: Strength,
}

impl DemoEntry {
    pub fn suggestions(&self, common: &CommonPasswords) -> Result<Vec<Suggestion>, PassLabError> {
        crate::suggest_improvements(self.password, common)
    }
}

pub fn entries() -> impl Iterator<Item = DemoEntry> {
    DEMO_PASSWORDS.iter().map(|&password| DemoEntry {
        password,
        strength: analyze(password),
    })
}

/// Entries of the given tier, or all of them for `None`.
pub fn filter_by_strength(strength: Option<Strength>) -> Vec<DemoEntry> {
    entries()
        .filter(|entry| strength.map_or(true, |s| entry.strength == s))
        .collect()
}

/// Entries containing `query`, case-sensitively. An empty query matches everything.
pub fn search(query: &str) -> Vec<DemoEntry> {
    entries()
        .filter(|entry| entry.password.contains(query))
        .collect()
}
