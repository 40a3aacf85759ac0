//! Fail-fast secret loading from the environment.
//!
//! Secrets live in process environment variables, optionally seeded once at
//! startup from a dotenv file with [`init_env`] or [`init_env_from`]. Seeding
//! never happens implicitly. Lookups go through [`get_secret`], which fails
//! with [`SecretError::Missing`] instead of falling back to a default.
//!
//! [`SecretStore`] offers the same lookup over an isolated map, for tests and
//! for callers that want to read a dotenv file without touching the process.

use std::collections::HashMap;
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::Secret;

static INIT: OnceLock<Result<EnvInit, SecretError>> = OnceLock::new();

/// Error returned when a secret cannot be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretError {
    /// The variable is not set in the environment or the dotenv file.
    Missing {
        /// Variable name.
        name: String,
    },
    /// The variable is set but is not valid Unicode.
    NotUnicode {
        /// Variable name.
        name: String,
    },
    /// The name is empty or contains `=` or NUL.
    InvalidName {
        /// The rejected name.
        name: String,
    },
    /// The dotenv file could not be read or parsed.
    Dotenv {
        /// File that failed, if known.
        path: Option<PathBuf>,
        /// Parser or I/O message.
        message: String,
    },
}

impl fmt::Display for SecretError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { name } => write!(
                f,
                "required secret '{}' was not found in environment variables or the .env file",
                name
            ),
            Self::NotUnicode { name } => write!(f, "secret '{}' is not valid unicode", name),
            Self::InvalidName { name } => write!(f, "invalid secret name {:?}", name),
            Self::Dotenv {
                path: Some(path),
                message,
            } => write!(f, "failed to load {}: {}", path.display(), message),
            Self::Dotenv {
                path: None,
                message,
            } => write!(f, "failed to load .env: {}", message),
        }
    }
}

impl std::error::Error for SecretError {}

/// Outcome of seeding the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvInit {
    /// Variables were loaded from this file.
    Loaded(PathBuf),
    /// No default `.env` file was found; the environment is unchanged.
    NoFile,
}

/// Seeds the process environment from the nearest `.env` file.
///
/// Searches the current directory and its ancestors. Variables already set
/// in the process are not overridden. A missing file is not an error.
///
/// Only the first call to `init_env` or [`init_env_from`] does any work;
/// later calls return the first outcome.
///
/// # Errors
///
/// Returns [`SecretError::Dotenv`] if a file was found but could not be read
/// or parsed.
pub fn init_env() -> Result<EnvInit, SecretError> {
    INIT.get_or_init(|| match dotenvy::dotenv() {
        Ok(path) => {
            tracing::info!(path = %path.display(), "seeded environment from dotenv file");
            Ok(EnvInit::Loaded(path))
        }
        Err(err) if err.not_found() => {
            tracing::debug!("no .env file found, using process environment only");
            Ok(EnvInit::NoFile)
        }
        Err(err) => Err(SecretError::Dotenv {
            path: None,
            message: err.to_string(),
        }),
    })
    .clone()
}

/// Seeds the process environment from an explicit dotenv file.
///
/// Unlike [`init_env`], a missing file is an error. Only the first
/// initialization call does any work.
///
/// # Errors
///
/// Returns [`SecretError::Dotenv`] if the file is missing, unreadable, or
/// malformed.
pub fn init_env_from(path: impl AsRef<Path>) -> Result<EnvInit, SecretError> {
    let path = path.as_ref();
    INIT.get_or_init(|| {
        dotenvy::from_path(path).map_err(|err| dotenv_error(path, &err))?;
        tracing::info!(path = %path.display(), "seeded environment from dotenv file");
        Ok(EnvInit::Loaded(path.to_path_buf()))
    })
    .clone()
}

/// Reads a required secret from the process environment.
///
/// # Errors
///
/// Returns [`SecretError::Missing`] if the variable is unset,
/// [`SecretError::NotUnicode`] if its value is not valid Unicode, and
/// [`SecretError::InvalidName`] for an empty or malformed name.
///
/// # Examples
///
/// ```
/// use secure_patterns::{get_secret, SecretError};
///
/// let err = get_secret("SECURE_PATTERNS_DOC_MISSING_KEY").unwrap_err();
/// assert!(matches!(err, SecretError::Missing { .. }));
/// ```
pub fn get_secret(name: &str) -> Result<Secret<String>, SecretError> {
    SecretStore::from_env().get_secret(name)
}

/// Where a [`SecretStore`] reads from.
#[derive(Debug)]
enum Source {
    Process,
    Map(HashMap<String, String>),
}

/// A secret lookup over the live process environment or an isolated map.
///
/// # Examples
///
/// ```
/// use secure_patterns::SecretStore;
///
/// let store = SecretStore::from_pairs([("EXTERNAL_API_KEY", "sk-test-0000-abcd")]);
/// let key = store.get_secret("EXTERNAL_API_KEY").unwrap();
/// assert_eq!(key.masked(), "sk-t...abcd");
/// assert!(store.get_secret("MISSING_DB_PASSWORD").is_err());
/// ```
#[derive(Debug)]
pub struct SecretStore {
    source: Source,
}

impl SecretStore {
    /// Reads from the live process environment.
    pub fn from_env() -> Self {
        Self {
            source: Source::Process,
        }
    }

    /// Reads from the given name/value pairs only.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            source: Source::Map(
                pairs
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Parses a dotenv file into an isolated store without touching the process.
    ///
    /// Later assignments of the same name win.
    ///
    /// # Errors
    ///
    /// Returns [`SecretError::Dotenv`] if the file is missing, unreadable, or
    /// malformed.
    pub fn from_dotenv(path: impl AsRef<Path>) -> Result<Self, SecretError> {
        let path = path.as_ref();
        let iter = dotenvy::from_path_iter(path).map_err(|err| dotenv_error(path, &err))?;

        let mut vars = HashMap::new();
        for item in iter {
            let (name, value) = item.map_err(|err| dotenv_error(path, &err))?;
            vars.insert(name, value);
        }
        tracing::debug!(path = %path.display(), count = vars.len(), "parsed dotenv file");

        Ok(Self {
            source: Source::Map(vars),
        })
    }

    /// Looks up a required secret.
    ///
    /// # Errors
    ///
    /// See [`get_secret`].
    pub fn get_secret(&self, name: &str) -> Result<Secret<String>, SecretError> {
        if name.is_empty() || name.contains(['=', '\0']) {
            return Err(SecretError::InvalidName {
                name: name.to_string(),
            });
        }

        let value = match &self.source {
            Source::Process => match env::var_os(name) {
                Some(raw) => Some(raw.into_string().map_err(|_| SecretError::NotUnicode {
                    name: name.to_string(),
                })?),
                None => None,
            },
            Source::Map(vars) => vars.get(name).cloned(),
        };

        match value {
            Some(value) => {
                tracing::debug!(name, "loaded secret");
                Ok(Secret::new(value))
            }
            None => {
                tracing::warn!(name, "required secret is missing");
                Err(SecretError::Missing {
                    name: name.to_string(),
                })
            }
        }
    }
}

fn dotenv_error(path: &Path, err: &dotenvy::Error) -> SecretError {
    SecretError::Dotenv {
        path: Some(path.to_path_buf()),
        message: err.to_string(),
    }
}
