#![forbid(unsafe_code)]

mod analysis;
mod demo;
mod error;

pub use analysis::Analysis;
pub use demo::Demo;
pub use error::Error;

use figment::Figment;
use figment::providers::{Format, Toml};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub analysis: Analysis,
    pub demo: Demo,
}

impl Config {
    /// Create a config with built-in defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a TOML file, falling back to defaults for
    /// anything the file leaves unset.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::InvalidPath(path.to_owned()));
        }
        let config: Config = Figment::new().merge(Toml::file(path)).extract()?;
        Ok(config)
    }
}
