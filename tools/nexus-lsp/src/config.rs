//! Startup configuration: command line, environment, vocabulary file.
//!
//! The vocabulary is read once, before the server starts. The file path
//! comes from `--vocabulary <path>`, falling back to the
//! `NEXUS_LSP_VOCABULARY` environment variable. Without either, the
//! built-in defaults are used.
//!
//! A vocabulary file is JSON. Every field is optional; a missing field keeps
//! the default set:
//!
//! ```json
//! {
//!   "keywords": ["class", "sum", "yield"],
//!   "types": ["i32", "f64"],
//!   "builtinFunctions": ["printf"],
//!   "operators": ["+", "-"],
//!   "punctuation": ["(", ")"]
//! }
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use nexus_lexer_core::{
    CharSet, Vocabulary, WordSet, DEFAULT_BUILTIN_FUNCTIONS, DEFAULT_KEYWORDS, DEFAULT_OPERATORS,
    DEFAULT_PUNCTUATION, DEFAULT_TYPES,
};
use serde::Deserialize;
use thiserror::Error;

/// Environment variable naming a vocabulary file.
pub const VOCABULARY_ENV: &str = "NEXUS_LSP_VOCABULARY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read vocabulary file `{}`: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid vocabulary file `{}`: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("`{set}` entry {entry:?} must be exactly one character")]
    NotOneCharacter { set: &'static str, entry: String },
    #[error("missing value for `{0}`")]
    MissingValue(&'static str),
    #[error("unknown argument `{0}`")]
    UnknownArgument(String),
}

/// What the binary was asked to do.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Serve(Settings),
    Version,
    Help,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Settings {
    pub vocabulary_path: Option<PathBuf>,
}

impl Command {
    /// Parse arguments (program name already removed). `env_path` is the
    /// value of [`VOCABULARY_ENV`], used when no flag is given.
    pub fn parse<I>(args: I, env_path: Option<OsString>) -> Result<Command, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut settings = Settings::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--help" | "-h" => return Ok(Command::Help),
                "--version" | "-V" => return Ok(Command::Version),
                "--vocabulary" => {
                    let path = args.next().ok_or(ConfigError::MissingValue("--vocabulary"))?;
                    settings.vocabulary_path = Some(PathBuf::from(path));
                }
                // Editors commonly launch servers with an explicit transport flag.
                "--stdio" => {}
                other => {
                    if let Some(path) = other.strip_prefix("--vocabulary=") {
                        settings.vocabulary_path = Some(PathBuf::from(path));
                    } else {
                        return Err(ConfigError::UnknownArgument(other.to_string()));
                    }
                }
            }
        }

        if settings.vocabulary_path.is_none() {
            settings.vocabulary_path = env_path.filter(|p| !p.is_empty()).map(PathBuf::from);
        }
        Ok(Command::Serve(settings))
    }
}

impl Settings {
    pub fn load_vocabulary(&self) -> Result<Vocabulary, ConfigError> {
        match &self.vocabulary_path {
            Some(path) => VocabularyFile::read(path)?.into_vocabulary(),
            None => Ok(Vocabulary::default()),
        }
    }
}

/// On-disk vocabulary overrides.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct VocabularyFile {
    pub keywords: Option<Vec<String>>,
    pub types: Option<Vec<String>>,
    pub builtin_functions: Option<Vec<String>>,
    pub operators: Option<Vec<String>>,
    pub punctuation: Option<Vec<String>>,
}

impl VocabularyFile {
    pub fn read(path: &Path) -> Result<VocabularyFile, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn into_vocabulary(self) -> Result<Vocabulary, ConfigError> {
        let operators = match self.operators {
            Some(entries) => char_set("operators", entries)?,
            None => CharSet::new(DEFAULT_OPERATORS.iter().copied()),
        };
        let punctuation = match self.punctuation {
            Some(entries) => char_set("punctuation", entries)?,
            None => CharSet::new(DEFAULT_PUNCTUATION.iter().copied()),
        };

        Ok(Vocabulary::new(
            word_set(self.keywords, DEFAULT_KEYWORDS),
            word_set(self.types, DEFAULT_TYPES),
            word_set(self.builtin_functions, DEFAULT_BUILTIN_FUNCTIONS),
            operators,
            punctuation,
        ))
    }
}

fn word_set(words: Option<Vec<String>>, default: &[&str]) -> WordSet {
    match words {
        Some(words) => WordSet::new(words),
        None => WordSet::new(default.iter().copied()),
    }
}

fn char_set(set: &'static str, entries: Vec<String>) -> Result<CharSet, ConfigError> {
    let chars = entries
        .into_iter()
        .map(|entry| {
            let mut chars = entry.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Ok(ch),
                _ => Err(ConfigError::NotOneCharacter { set, entry }),
            }
        })
        .collect::<Result<Vec<char>, _>>()?;
    Ok(CharSet::new(chars))
}
