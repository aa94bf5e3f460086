// std imports
use std::include_str;
use std::path::Path;
use std::thread::available_parallelism;

// third-party imports
use config::{Config, File, FileFormat, builder::DefaultState};
use serde::Deserialize;

// local imports
use crate::error::Result;

// ---

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

/// Environment variable naming an extra, optional settings file.
pub const CONFIG_ENV: &str = "ALTGLOB_CONFIG";

// ---

/// Compile-time settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub enumeration: Enumeration,
    pub parallel_threshold: usize,
    #[serde(default)]
    pub workers: Option<usize>,
    pub large_product: usize,
}

impl Settings {
    /// Loads the embedded defaults, then each of `paths` in order, then the
    /// file named by [`CONFIG_ENV`] if it is set and exists.
    ///
    /// Files named in `paths` are required.
    pub fn load<P: AsRef<Path>>(paths: impl IntoIterator<Item = P>) -> Result<Self> {
        let mut builder = Self::builder();
        for path in paths {
            builder = builder.add_source(File::from(path.as_ref()).required(true));
        }
        if let Ok(filename) = std::env::var(CONFIG_ENV) {
            log::debug!("loading settings from {CONFIG_ENV}={filename:?}");
            builder = builder.add_source(File::with_name(&filename).required(false));
        }

        Self::from_config(builder)
    }

    /// Returns a configuration builder seeded with the embedded defaults.
    pub fn builder() -> config::ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml))
    }

    pub fn from_config(builder: config::ConfigBuilder<DefaultState>) -> Result<Self> {
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Number of workers the parallel strategy uses.
    ///
    /// Unset or zero means the available parallelism of the host.
    pub fn workers(&self) -> usize {
        match self.workers {
            Some(n) if n > 0 => n,
            _ => available_parallelism().map(|n| n.get()).unwrap_or(1),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enumeration: Enumeration::Sequential,
            parallel_threshold: 4096,
            workers: None,
            large_product: 65536,
        }
    }
}

// ---

/// Strategy for enumerating combinations of alternatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Enumeration {
    #[default]
    Sequential,
    Parallel,
}
