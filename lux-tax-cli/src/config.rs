//! TOML configuration for the `lux-tax` binary.
//!
//! ```toml
//! log_level = "debug"
//! log_file = "lux-tax.log"
//! schedules_csv = "schedules/luxembourg_2024.csv"
//! default_income1 = 70000
//! default_income2 = 20000
//! ```
//!
//! Every key is optional. Relative paths are resolved against the directory
//! holding the config file.

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "lux-tax.toml";

/// Household used when no incomes are supplied.
pub const DEFAULT_INCOME1: i64 = 70_000;
pub const DEFAULT_INCOME2: i64 = 20_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Log filter directive, e.g. `"info"` or `"lux_tax_core=debug"`.
    pub log_level: Option<String>,
    /// Append log records to this file.
    pub log_file: Option<PathBuf>,
    /// Bracket schedules to use instead of the built-in ones.
    pub schedules_csv: Option<PathBuf>,
    pub default_income1: Option<Decimal>,
    pub default_income2: Option<Decimal>,
}

impl AppConfig {
    pub fn from_toml_str(
        input: &str,
        path: &Path,
    ) -> Result<Self, ConfigError> {
        let mut config: AppConfig = toml::from_str(input).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents, path)
    }

    /// Loads `explicit` if given, otherwise [`DEFAULT_CONFIG_FILE`] when it
    /// exists, otherwise the defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::load(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn income1(&self) -> Decimal {
        self.default_income1
            .unwrap_or_else(|| Decimal::from(DEFAULT_INCOME1))
    }

    pub fn income2(&self) -> Decimal {
        self.default_income2
            .unwrap_or_else(|| Decimal::from(DEFAULT_INCOME2))
    }

    fn resolve_paths(
        &mut self,
        base: &Path,
    ) {
        for path in [&mut self.log_file, &mut self.schedules_csv]
            .into_iter()
            .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}
