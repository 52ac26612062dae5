//! The list of well-known passwords that suggestions check against.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::{PassLabError, PassLabErrorRepr};

/// A list of common passwords, or the explicit absence of one.
///
/// Loading happens once, at startup; a list that was never loaded is distinct from an empty one so
/// that callers can tell "not a common password" from "couldn't check".
#[derive(Clone, Debug, Default)]
pub enum CommonPasswords {
    #[default]
    NotLoaded,
    Loaded(LoadedList),
}

#[derive(Clone, Debug, Default)]
pub struct LoadedList {
    /// Entries in file order.
    entries: Vec<String>,
    lookup: HashSet<String>,
}

impl CommonPasswords {
    /// A loaded, but empty, list.
    pub fn empty() -> CommonPasswords {
        CommonPasswords::Loaded(LoadedList::default())
    }

    /// Build a list from newline-delimited text.
    ///
    /// Lines are split on `'\n'` only and are not trimmed: a trailing newline yields an empty
    /// entry, and `"\r\n"` line endings leave the `'\r'` on each entry.
    pub fn parse(text: &str) -> CommonPasswords {
        CommonPasswords::from_entries(text.split('\n').map(str::to_owned))
    }

    pub fn from_entries<I>(entries: I) -> CommonPasswords
    where
        I: IntoIterator<Item = String>,
    {
        let entries = entries.into_iter().collect::<Vec<_>>();
        let lookup = entries.iter().cloned().collect();
        CommonPasswords::Loaded(LoadedList { entries, lookup })
    }

    pub fn from_reader(mut rdr: impl Read) -> Result<CommonPasswords, PassLabError> {
        let mut data = Vec::new();
        rdr.read_to_end(&mut data).map_err(PassLabErrorRepr::Io)?;
        let text = String::from_utf8(data).map_err(PassLabErrorRepr::CommonPasswordsNotUtf8)?;
        Ok(CommonPasswords::parse(&text))
    }

    pub fn load(path: &Path) -> Result<CommonPasswords, PassLabError> {
        let file = File::open(path).map_err(PassLabErrorRepr::Io)?;
        let list = CommonPasswords::from_reader(file)?;
        log::debug!(
            "loaded {} common passwords from {}",
            list.len().unwrap_or(0),
            path.display()
        );
        Ok(list)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, CommonPasswords::Loaded(_))
    }

    /// Number of entries, or `None` if the list was never loaded.
    pub fn len(&self) -> Option<usize> {
        match self {
            CommonPasswords::NotLoaded => None,
            CommonPasswords::Loaded(list) => Some(list.entries.len()),
        }
    }

    /// Exact-match membership.
    pub fn contains(&self, password: &str) -> Result<bool, PassLabError> {
        match self {
            CommonPasswords::NotLoaded => Err(PassLabErrorRepr::CommonPasswordsNotLoaded.into()),
            CommonPasswords::Loaded(list) => Ok(list.lookup.contains(password)),
        }
    }

    pub fn entries(&self) -> &[String] {
        match self {
            CommonPasswords::NotLoaded => &[],
            CommonPasswords::Loaded(list) => &list.entries,
        }
    }
}
