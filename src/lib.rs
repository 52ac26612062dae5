use std::io;

use serde::Serialize;

pub mod analysis;
pub mod chart;
pub mod common_passwords;
pub mod composition;
pub mod demo;
pub mod password_generation;
pub mod suggestions;

pub use analysis::{analyze, Strength};
pub use common_passwords::CommonPasswords;
pub use composition::Composition;
pub use password_generation::CharClasses;
pub use suggestions::{suggest_improvements, Suggestion};

#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct PassLabError(PassLabErrorRepr);

impl PassLabError {
    /// Whether this error came from consulting a common-password list that was never loaded.
    pub fn is_not_loaded(&self) -> bool {
        matches!(self.0, PassLabErrorRepr::CommonPasswordsNotLoaded)
    }
}

impl From<PassLabErrorRepr> for PassLabError {
    fn from(err: PassLabErrorRepr) -> PassLabError {
        PassLabError(err)
    }
}

#[derive(Debug, thiserror::Error)]
enum PassLabErrorRepr {
    #[error("I/O error: {0}")]
    Io(io::Error),
    #[error("the common-password list is not valid UTF-8: {0}")]
    CommonPasswordsNotUtf8(#[source] std::string::FromUtf8Error),
    #[error("the common-password list has not been loaded")]
    CommonPasswordsNotLoaded,
}

/// A generated password. Kept out of `Debug` output so it doesn't end up in logs.
#[derive(Clone, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Secret(String);

opaque_debug::implement!(Secret);

impl Secret {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Secret {
    fn from(s: String) -> Secret {
        Secret(s)
    }
}
