//! Configuration loading
//!
//! Sources are layered, later ones winning:
//!
//! 1. built-in defaults
//! 2. `config.toml` in the user's configuration directory
//! 3. `./lotto-ticket.toml`, or an explicit `--config` file instead
//! 4. `LOTTO_TICKET_<SECTION>__<KEY>` environment variables

use crate::error::Result;
use crate::storage::{LoadPolicy, NumberRange};
use config::{Environment, File};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Data file used when nothing else is configured
pub const DEFAULT_DATA_FILE: &str = "product.csv";

/// Project-local configuration file
pub const LOCAL_CONFIG_FILE: &str = "lotto-ticket.toml";

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "LOTTO_TICKET";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    pub storage: StorageConfig,
    pub numbers: NumbersConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StorageConfig {
    /// CSV file tickets are loaded from and saved to
    pub file: PathBuf,
    /// Skip rows that fail to parse instead of aborting the load
    pub skip_malformed_rows: bool,
}

/// Default bounds for randomly drawn numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct NumbersConfig {
    pub min: i64,
    pub max: i64,
}

impl Default for Config {
    fn default() -> Self {
        let range = NumberRange::default();
        Self {
            storage: StorageConfig {
                file: PathBuf::from(DEFAULT_DATA_FILE),
                skip_malformed_rows: false,
            },
            numbers: NumbersConfig {
                min: range.min,
                max: range.max,
            },
        }
    }
}

impl Config {
    /// Load configuration, reading `explicit` in place of `./lotto-ticket.toml`
    ///
    /// An explicit file must exist; the implicit ones are optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let defaults = Self::default();
        let mut builder = config::Config::builder()
            .set_default(
                "storage.file",
                defaults.storage.file.to_string_lossy().into_owned(),
            )?
            .set_default("storage.skip_malformed_rows", defaults.storage.skip_malformed_rows)?
            .set_default("numbers.min", defaults.numbers.min)?
            .set_default("numbers.max", defaults.numbers.max)?;

        if let Some(dirs) = ProjectDirs::from("", "", "lotto-ticket") {
            let user_file = dirs.config_dir().join("config.toml");
            builder = builder.add_source(File::from(user_file).required(false));
        }

        builder = match explicit {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => builder.add_source(File::from(Path::new(LOCAL_CONFIG_FILE)).required(false)),
        };

        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = settings.try_deserialize()?;
        tracing::debug!(?config, "Loaded configuration");
        Ok(config)
    }

    pub const fn load_policy(&self) -> LoadPolicy {
        if self.storage.skip_malformed_rows {
            LoadPolicy::SkipMalformed
        } else {
            LoadPolicy::Abort
        }
    }

    /// Configured random range
    pub const fn number_range(&self) -> NumberRange {
        NumberRange {
            min: self.numbers.min,
            max: self.numbers.max,
        }
    }
}
