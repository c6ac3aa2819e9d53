//! Pipeline configuration.
//!
//! A [`Config`] selects the processing [`Mode`] and the factoring options.
//! It can be built in code or loaded from TOML:
//!
//! ```toml
//! mode = "factor"
//!
//! [factor]
//! grouping = "declaration"
//! preserve_overrides = true
//! ```
//!
//! Every key is optional; missing keys take their defaults.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::pipeline::Mode;
use crate::transform::{FactorGrouping, FactorOptions};

/// Configuration for [`Pipeline`](crate::pipeline::Pipeline).
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Rewrite applied between parsing and rendering.
    pub mode: Mode,
    /// Options used when `mode` is [`Mode::Factor`].
    pub factor: FactorOptions,
}

impl Config {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&text)
    }

    /// Set the processing mode.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the factor grouping strategy.
    pub fn grouping(mut self, grouping: FactorGrouping) -> Self {
        self.factor.grouping = grouping;
        self
    }

    /// Enable or disable the factor override check.
    pub fn preserve_overrides(mut self, enabled: bool) -> Self {
        self.factor.preserve_overrides = enabled;
        self
    }
}
