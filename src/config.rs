#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{path::PathBuf, str::FromStr, sync::OnceLock};

use tracing::Level;

/// Default wrap width for table cells.
pub const DEFAULT_TABLE_WIDTH: usize = 24;

/// Settings read from the environment (and `.env`, when the binary loads one).
#[derive(Debug, Clone)]
pub struct Config {
    /// Gradebook file to open when none is given on the command line.
    gradebook_path: Option<PathBuf>,
    /// Whether reports use terminal colors.
    color:          bool,
    /// Wrap width for table cells.
    table_width:    usize,
    /// Minimum level for log output.
    log_level:      Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gradebook_path: None,
            color:          true,
            table_width:    DEFAULT_TABLE_WIDTH,
            log_level:      Level::INFO,
        }
    }
}

impl Config {
    /// Builds a configuration from `GRADESLEUTH_*` environment variables,
    /// falling back to defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let var = |name: &str| std::env::var(name).ok();

        Self {
            gradebook_path: var("GRADESLEUTH_GRADEBOOK")
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
                .map(PathBuf::from),
            color:          parse_bool(var("GRADESLEUTH_COLOR").as_deref(), defaults.color),
            table_width:    parse_or(
                var("GRADESLEUTH_TABLE_WIDTH").as_deref(),
                defaults.table_width,
            ),
            log_level:      parse_or(var("GRADESLEUTH_LOG").as_deref(), defaults.log_level),
        }
    }

    /// Returns the default gradebook path, if configured.
    pub fn gradebook_path(&self) -> Option<&PathBuf> {
        self.gradebook_path.as_ref()
    }

    /// Returns whether reports use terminal colors.
    pub fn color(&self) -> bool {
        self.color
    }

    /// Returns the wrap width for table cells.
    pub fn table_width(&self) -> usize {
        self.table_width
    }

    /// Returns the minimum log level.
    pub fn log_level(&self) -> Level {
        self.log_level
    }
}

/// Global storage for the lazily constructed configuration.
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Returns the active configuration, reading the environment on first use.
pub fn get() -> &'static Config {
    CONFIG.get_or_init(Config::from_env)
}

/// Interprets common spellings of a boolean, falling back to `default`.
fn parse_bool(value: Option<&str>, default: bool) -> bool {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("1" | "true" | "yes" | "on") => true,
        Some("0" | "false" | "no" | "off") => false,
        _ => default,
    }
}

/// Parses `value`, falling back to `default` when missing or invalid.
fn parse_or<T: FromStr>(value: Option<&str>, default: T) -> T {
    value
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}
