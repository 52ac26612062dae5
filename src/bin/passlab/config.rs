//! Defaults read from `~/.passlab/config.yaml`.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::ProgError;

const DEFAULT_LENGTH: usize = 12;

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    pub length: usize,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub common_passwords: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            length: DEFAULT_LENGTH,
            uppercase: false,
            digits: false,
            symbols: false,
            common_passwords: None,
        }
    }
}

impl Config {
    /// Load the config at `path`, or at the default location if `None`. Only the default config is
    /// allowed to be missing.
    pub(crate) fn load(path: Option<&Path>) -> Result<Config, ProgError> {
        if let Some(path) = path {
            let file = File::open(path)
                .context("failed to open file")
                .map_err(|err| ProgError::Config(path.to_owned(), err))?;
            return Config::from_reader(file, path);
        }

        let default_path = match crate::passlab_dir() {
            Ok(dir) => dir.join("config.yaml"),
            Err(err) => {
                log::debug!("using built-in defaults: {err}");
                return Ok(Config::default());
            }
        };
        match File::open(&default_path) {
            Ok(file) => Config::from_reader(file, &default_path),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!(
                    "no config file at {}; using built-in defaults",
                    default_path.display()
                );
                Ok(Config::default())
            }
            Err(err) => Err(ProgError::Config(
                default_path,
                anyhow::Error::new(err).context("failed to open file"),
            )),
        }
    }

    fn from_reader(rdr: impl io::Read, path: &Path) -> Result<Config, ProgError> {
        let config: Config = serde_yaml::from_reader(rdr)
            .context("failed to parse YAML")
            .map_err(|err| ProgError::Config(path.to_owned(), err))?;
        log::debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn missing_keys_take_defaults() {
        let config: Config = serde_yaml::from_str("digits: true\n").unwrap();
        assert_eq!(config.length, DEFAULT_LENGTH);
        assert!(config.digits);
        assert!(!config.uppercase);
        assert!(config.common_passwords.is_none());
    }

    #[test]
    fn loads_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "length: 20\nsymbols: true\ncommon_passwords: /tmp/list.txt").unwrap();
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.length, 20);
        assert!(config.symbols);
        assert_eq!(config.common_passwords, Some(PathBuf::from("/tmp/list.txt")));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "lenght: 20").unwrap();
        assert!(matches!(
            Config::load(Some(file.path())),
            Err(ProgError::Config(..))
        ));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.yaml");
        assert!(matches!(
            Config::load(Some(path.as_path())),
            Err(ProgError::Config(..))
        ));
    }
}
