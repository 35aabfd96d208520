//! Loading run settings from a `key = value` file.
//!
//! The format is deliberately small:
//!
//! ```text
//! # comment
//! threads = 4
//! max_number = 100000
//! ```
//!
//! Every problem with the file is recoverable. A missing file is created with
//! the defaults, a line whose value has no leading integer is skipped with a
//! warning, and a key that never appears keeps its default. Text after the
//! leading integer is ignored, so `threads = 8 # eight` sets eight threads. Only the *values* are
//! validated later, when the [`Settings`] are turned into a
//! [`SearchConfig`](crate::SearchConfig).

use core::fmt;
use std::{
    fs,
    io::{self, ErrorKind},
    path::Path,
};

use crate::Result;

/// Default location of the settings file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.ini";

/// Worker count used when the file does not set `threads`.
pub const DEFAULT_THREADS: i64 = 4;

/// Search ceiling used when the file does not set `max_number`.
pub const DEFAULT_MAX_NUMBER: i64 = 100_000;

const KEY_THREADS: &str = "threads";
const KEY_MAX_NUMBER: &str = "max_number";

/// Raw, unvalidated run settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Settings {
    pub threads: i64,
    pub max_number: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            threads: DEFAULT_THREADS,
            max_number: DEFAULT_MAX_NUMBER,
        }
    }
}

/// Classification of one line of a settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigLine<'a> {
    /// Empty or whitespace only.
    Blank,
    /// Starts with `#` after trimming.
    Comment,
    /// No `=` on the line, or nothing after it; ignored silently.
    Unstructured,
    /// A key whose value starts with an integer.
    Entry { key: &'a str, value: i64 },
    /// A key whose value does not start with an integer, or starts with one
    /// that overflows `i64`; skipped with a warning.
    Malformed { key: &'a str, value: &'a str },
}

impl<'a> ConfigLine<'a> {
    /// Classifies `raw`. Surrounding whitespace is ignored, as is whitespace
    /// around the `=`. The value is the longest prefix made of an optional
    /// sign and decimal digits; anything after it is ignored.
    ///
    /// # Example
    /// ```
    /// use primehunt::ConfigLine;
    ///
    /// assert_eq!(ConfigLine::parse("  threads = 8 "), ConfigLine::Entry { key: "threads", value: 8 });
    /// assert_eq!(ConfigLine::parse("# threads = 8"), ConfigLine::Comment);
    /// assert_eq!(
    ///     ConfigLine::parse("max_number = 500 # five hundred"),
    ///     ConfigLine::Entry { key: "max_number", value: 500 }
    /// );
    /// assert_eq!(
    ///     ConfigLine::parse("max_number = lots"),
    ///     ConfigLine::Malformed { key: "max_number", value: "lots" }
    /// );
    /// ```
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        let line = raw.trim();
        if line.is_empty() {
            return Self::Blank;
        }
        if line.starts_with('#') {
            return Self::Comment;
        }
        let Some((key, value)) = line.split_once('=') else {
            return Self::Unstructured;
        };
        let (key, value) = (key.trim_end(), value.trim_start());
        if value.is_empty() {
            return Self::Unstructured;
        }
        match leading_integer(value) {
            Some(value) => Self::Entry { key, value },
            None => Self::Malformed { key, value },
        }
    }
}

/// Parses the optional sign and digits at the start of `value`, ignoring the
/// rest. `None` if there are no digits or the number overflows.
fn leading_integer(value: &str) -> Option<i64> {
    let sign = usize::from(value.starts_with(|c: char| c == '+' || c == '-'));
    let digits = value[sign..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    value[..sign + digits].parse().ok()
}

/// A recoverable problem found while loading settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The file did not exist and was created with the defaults.
    Created,
    /// The file did not exist and could not be created either.
    CreateFailed { reason: String },
    /// The file exists but could not be read; defaults are used.
    Unreadable { reason: String },
    /// A line's value was not an integer and the line was skipped.
    UnparseableLine { number: usize, line: String },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "config file not found, created one with defaults"),
            Self::CreateFailed { reason } => {
                write!(f, "config file not found and could not be created: {reason}")
            }
            Self::Unreadable { reason } => {
                write!(f, "config file could not be read, using defaults: {reason}")
            }
            Self::UnparseableLine { number, line } => {
                write!(f, "could not parse line {number}: {line}")
            }
        }
    }
}

/// Settings together with everything that went wrong loading them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSettings {
    pub settings: Settings,
    pub warnings: Vec<ConfigWarning>,
}

impl Settings {
    /// Parses settings from file contents. Never fails: unknown keys are
    /// ignored, unparseable lines are reported, later lines override earlier
    /// ones.
    #[must_use]
    pub fn parse(text: &str) -> LoadedSettings {
        let mut settings = Self::default();
        let mut warnings = Vec::new();

        for (index, raw) in text.lines().enumerate() {
            match ConfigLine::parse(raw) {
                ConfigLine::Blank | ConfigLine::Comment | ConfigLine::Unstructured => {}
                ConfigLine::Entry {
                    key: KEY_THREADS,
                    value,
                } => settings.threads = value,
                ConfigLine::Entry {
                    key: KEY_MAX_NUMBER,
                    value,
                } => settings.max_number = value,
                ConfigLine::Entry { key: _key, .. } => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("Ignoring unknown config key `{_key}`");
                }
                ConfigLine::Malformed { .. } => warnings.push(ConfigWarning::UnparseableLine {
                    number: index + 1,
                    line: raw.trim().to_owned(),
                }),
            }
        }

        LoadedSettings { settings, warnings }
    }

    /// Loads settings from `path`, creating the file with the defaults if it
    /// does not exist.
    ///
    /// Every warning is also logged at `warn` level when the `tracing` feature
    /// is enabled.
    ///
    /// # Errors
    /// This currently never fails; configuration file problems are returned
    /// as [`ConfigWarning`]s. The `Result` leaves room for fatal cases.
    pub fn load_or_create(path: impl AsRef<Path>) -> Result<LoadedSettings> {
        let path = path.as_ref();
        let loaded = match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                let warning = match write_defaults(path) {
                    Ok(()) => ConfigWarning::Created,
                    Err(err) => ConfigWarning::CreateFailed {
                        reason: err.to_string(),
                    },
                };
                LoadedSettings {
                    settings: Self::default(),
                    warnings: vec![warning],
                }
            }
            Err(err) => LoadedSettings {
                settings: Self::default(),
                warnings: vec![ConfigWarning::Unreadable {
                    reason: err.to_string(),
                }],
            },
        };

        #[cfg(feature = "tracing")]
        for warning in &loaded.warnings {
            tracing::warn!(path = %path.display(), "{warning}");
        }

        Ok(loaded)
    }

    /// Renders these settings in the file format.
    #[must_use]
    pub fn to_file_contents(&self) -> String {
        format!(
            "{KEY_THREADS} = {}\n{KEY_MAX_NUMBER} = {}\n",
            self.threads, self.max_number
        )
    }
}

fn write_defaults(path: &Path) -> io::Result<()> {
    fs::write(path, Settings::default().to_file_contents())
}
