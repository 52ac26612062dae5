use std::env;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use clap::Parser;
use passlab::{CommonPasswords, PassLabError, Strength};

mod analyze;
mod chart;
mod config;
mod demo;
mod generate;
mod select;
mod table;

#[derive(Parser)]
#[command(about = "Generate passwords and rate how strong they are.")]
struct Args {
    /// YAML config file to read defaults from. [default: ~/.passlab/config.yaml]
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Generate a random password, then show its strength and composition.
    #[command(alias = "gen")]
    Generate {
        /// Number of characters. [default: 12, or `length` from the config file]
        #[arg(long, short)]
        length: Option<usize>,
        #[command(flatten)]
        classes: ClassFlags,
        /// Copy the password to the clipboard.
        #[arg(long, short)]
        copy: bool,
        /// Print the result and its charts as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Rate a password's strength and show what it is made of.
    Analyze {
        /// The password to analyze; read from the terminal if omitted.
        password: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Suggest improvements to a password.
    Suggest {
        /// The password to check; read from the terminal if omitted.
        password: Option<String>,
        #[command(flatten)]
        common: CommonPasswordArgs,
        #[arg(long)]
        json: bool,
    },
    /// Browse the built-in sample passwords.
    #[command(subcommand)]
    Demo(DemoCommand),
}

#[derive(clap::Subcommand)]
enum DemoCommand {
    /// List the sample passwords, optionally only those of one strength.
    List {
        /// weak, moderate or strong. Asked for interactively when omitted on a terminal.
        #[arg(long)]
        strength: Option<Strength>,
        /// List every sample password without asking for a filter.
        #[arg(long, conflicts_with = "strength")]
        all: bool,
        #[command(flatten)]
        common: CommonPasswordArgs,
        #[arg(long)]
        json: bool,
    },
    /// Find sample passwords containing the query, with suggestions for each.
    Search {
        query: String,
        #[command(flatten)]
        common: CommonPasswordArgs,
    },
}

/// Character classes to add to, or take out of, the ones the config file enables. The last of a
/// `--x` / `--no-x` pair wins.
#[derive(clap::Args)]
struct ClassFlags {
    /// Include uppercase letters.
    #[arg(long, short, overrides_with = "no_uppercase")]
    uppercase: bool,
    /// Leave out uppercase letters.
    #[arg(long, overrides_with = "uppercase")]
    no_uppercase: bool,
    /// Include digits.
    #[arg(long, short, overrides_with = "no_digits")]
    digits: bool,
    /// Leave out digits.
    #[arg(long, overrides_with = "digits")]
    no_digits: bool,
    /// Include symbols.
    #[arg(long, short, overrides_with = "no_symbols")]
    symbols: bool,
    /// Leave out symbols.
    #[arg(long, overrides_with = "symbols")]
    no_symbols: bool,
}

impl ClassFlags {
    fn resolve(&self, config: &config::Config) -> passlab::CharClasses {
        passlab::CharClasses {
            uppercase: pick(self.uppercase, self.no_uppercase, config.uppercase),
            digits: pick(self.digits, self.no_digits, config.digits),
            symbols: pick(self.symbols, self.no_symbols, config.symbols),
        }
    }
}

fn pick(on: bool, off: bool, default: bool) -> bool {
    match (on, off) {
        (true, _) => true,
        (_, true) => false,
        _ => default,
    }
}

#[derive(clap::Args)]
struct CommonPasswordArgs {
    /// Newline-delimited list of common passwords. [default: `common_passwords` from the config
    /// file, or ~/.passlab/common-passwords.txt]
    #[arg(long)]
    common_passwords: Option<PathBuf>,
    /// Don't check against a common-password list.
    #[arg(long, conflicts_with = "common_passwords")]
    skip_common_check: bool,
}

fn run() -> Result<(), ProgError> {
    let args = Args::parse();
    let config = config::Config::load(args.config.as_deref())?;

    match args.command {
        Command::Generate {
            length,
            classes,
            copy,
            json,
        } => {
            let options = generate::GenerateOptions {
                length: length.unwrap_or(config.length),
                classes: classes.resolve(&config),
                copy,
                json,
            };
            generate::generate(options)?
        }
        Command::Analyze { password, json } => analyze::analyze(password, json)?,
        Command::Suggest {
            password,
            common,
            json,
        } => {
            let common = load_common_passwords(common, &config)?;
            analyze::suggest(password, &common, json)?
        }
        Command::Demo(DemoCommand::List {
            strength,
            all,
            common,
            json,
        }) => {
            let common = load_common_passwords(common, &config)?;
            demo::list(strength, all, &common, json)?
        }
        Command::Demo(DemoCommand::Search { query, common }) => {
            let common = load_common_passwords(common, &config)?;
            demo::search(&query, &common)?
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => (),
        Err(ProgError::Other(err)) => {
            eprintln!("Error: {err:?}");
            process::exit(1);
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

pub(crate) fn passlab_dir() -> anyhow::Result<PathBuf> {
    let home = env::var_os("HOME")
        .ok_or_else(|| anyhow::anyhow!("HOME is not set; cannot find home directory of user"))?;
    let mut p = PathBuf::from(home);
    p.push(".passlab");
    Ok(p)
}

fn load_common_passwords(
    args: CommonPasswordArgs,
    config: &config::Config,
) -> Result<CommonPasswords, ProgError> {
    resolve_common_passwords(args, config, passlab_dir())
}

/// Load the common-password list named on the command line or in the config file, falling back to
/// `common-passwords.txt` in `default_dir`. A list that was asked for must load; a missing default
/// list just stays unloaded.
fn resolve_common_passwords(
    args: CommonPasswordArgs,
    config: &config::Config,
    default_dir: anyhow::Result<PathBuf>,
) -> Result<CommonPasswords, ProgError> {
    if args.skip_common_check {
        return Ok(CommonPasswords::empty());
    }
    if let Some(path) = args.common_passwords.or_else(|| config.common_passwords.clone()) {
        return load_common_passwords_from(&path);
    }

    let default_path = match default_dir {
        Ok(dir) => dir.join("common-passwords.txt"),
        Err(err) => {
            log::info!("no default common-password list: {err}");
            return Ok(CommonPasswords::NotLoaded);
        }
    };
    if default_path.exists() {
        load_common_passwords_from(&default_path)
    } else {
        log::info!(
            "no common-password list at {}; leaving it unloaded",
            default_path.display()
        );
        Ok(CommonPasswords::NotLoaded)
    }
}

fn load_common_passwords_from(path: &Path) -> Result<CommonPasswords, ProgError> {
    CommonPasswords::load(path)
        .map_err(|err| ProgError::CommonPasswordsLoad(path.to_owned(), err))
}

pub(crate) fn read_password(password: Option<String>) -> Result<String, ProgError> {
    match password {
        Some(p) => Ok(p),
        None => Ok(rpassword::prompt_password("Password: ")
            .context("failed to read password from TTY")?),
    }
}

#[derive(Debug, thiserror::Error)]
enum ProgError {
    #[error("Selection cancelled; exiting.")]
    SelectionCancelled,
    #[error(
        "No common-password list is loaded. Pass --common-passwords FILE, set `common_passwords` \
         in the config file, or use --skip-common-check."
    )]
    CommonPasswordsUnavailable,
    #[error("Failed to load the common-password list at {}: {1}", .0.display())]
    CommonPasswordsLoad(PathBuf, #[source] PassLabError),
    #[error("Failed to read the config file at {}: {1}", .0.display())]
    Config(PathBuf, #[source] anyhow::Error),
    #[error("{0}")]
    PassLab(PassLabError),
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<anyhow::Error> for ProgError {
    fn from(err: anyhow::Error) -> ProgError {
        ProgError::Other(err)
    }
}

impl From<PassLabError> for ProgError {
    fn from(err: PassLabError) -> ProgError {
        if err.is_not_loaded() {
            ProgError::CommonPasswordsUnavailable
        } else {
            ProgError::PassLab(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn generate_classes(args: &[&str], config: &config::Config) -> passlab::CharClasses {
        let args = Args::try_parse_from(args).unwrap();
        match args.command {
            Command::Generate { classes, .. } => classes.resolve(config),
            _ => panic!("expected the generate command"),
        }
    }

    fn no_list() -> CommonPasswordArgs {
        CommonPasswordArgs {
            common_passwords: None,
            skip_common_check: false,
        }
    }

    #[test]
    fn flags_switch_classes_off_against_config() {
        let config = config::Config {
            uppercase: true,
            symbols: true,
            ..config::Config::default()
        };
        let classes = generate_classes(&["passlab", "generate", "--no-symbols"], &config);
        assert!(!classes.symbols);
        assert!(classes.uppercase);
        assert!(!classes.digits);

        let classes = generate_classes(&["passlab", "generate"], &config);
        assert!(classes.symbols);
    }

    #[test]
    fn last_of_a_flag_pair_wins() {
        let config = config::Config::default();
        let classes = generate_classes(
            &["passlab", "generate", "--no-digits", "-d", "--uppercase", "--no-uppercase"],
            &config,
        );
        assert!(classes.digits);
        assert!(!classes.uppercase);
    }

    #[test]
    fn skip_flag_gives_an_empty_loaded_list() {
        let args = CommonPasswordArgs {
            common_passwords: None,
            skip_common_check: true,
        };
        let common = load_common_passwords(args, &config::Config::default()).unwrap();
        assert_eq!(common.len(), Some(0));
    }

    #[test]
    fn explicit_list_must_load() {
        let dir = tempfile::tempdir().unwrap();
        let args = CommonPasswordArgs {
            common_passwords: Some(dir.path().join("missing.txt")),
            skip_common_check: false,
        };
        assert!(matches!(
            load_common_passwords(args, &config::Config::default()),
            Err(ProgError::CommonPasswordsLoad(..))
        ));
    }

    #[test]
    fn config_list_is_used_when_no_flag_is_given() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "hunter2\npassword").unwrap();
        let config = config::Config {
            common_passwords: Some(file.path().to_owned()),
            ..config::Config::default()
        };
        let common = load_common_passwords(no_list(), &config).unwrap();
        assert!(common.contains("hunter2").unwrap());

        let config = config::Config {
            common_passwords: Some(file.path().with_extension("gone")),
            ..config::Config::default()
        };
        assert!(matches!(
            load_common_passwords(no_list(), &config),
            Err(ProgError::CommonPasswordsLoad(..))
        ));
    }

    #[test]
    fn missing_default_list_stays_unloaded() {
        let dir = tempfile::tempdir().unwrap();
        let common = resolve_common_passwords(
            no_list(),
            &config::Config::default(),
            Ok(dir.path().to_owned()),
        )
        .unwrap();
        assert!(!common.is_loaded());

        let err = passlab::suggest_improvements("Str0ng!Pass", &common).unwrap_err();
        assert!(matches!(
            ProgError::from(err),
            ProgError::CommonPasswordsUnavailable
        ));
    }

    #[test]
    fn no_home_directory_leaves_list_unloaded() {
        let common = resolve_common_passwords(
            no_list(),
            &config::Config::default(),
            Err(anyhow::anyhow!("HOME is not set")),
        )
        .unwrap();
        assert!(!common.is_loaded());
    }

    #[test]
    fn default_list_is_loaded_when_present() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("common-passwords.txt"), "qwerty\n").unwrap();
        let common = resolve_common_passwords(
            no_list(),
            &config::Config::default(),
            Ok(dir.path().to_owned()),
        )
        .unwrap();
        assert!(common.contains("qwerty").unwrap());
        assert_eq!(common.len(), Some(2));
    }

    #[test]
    fn other_library_errors_are_not_reported_as_unloaded() {
        let err = CommonPasswords::from_reader(&b"\xff"[..]).unwrap_err();
        assert!(matches!(ProgError::from(err), ProgError::PassLab(_)));
    }
}
