//! Translator configuration
//!
//! Defaults reproduce the stock C → Go run. A TOML file can extend the
//! tables and change the output shape:
//!
//! ```toml
//! package = "video"
//! suffix = ".go"
//! initializers = "strict"
//!
//! [types]
//! "unsigned char" = "byte"
//!
//! [[rules]]
//! pattern = "SDL_zero"
//! replacement = "zero"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::tables::{RuleScope, SubstitutionRule, TableError, Tables};

pub const DEFAULT_PACKAGE: &str = "gdl";
pub const DEFAULT_SUFFIX: &str = ".go";

/// What to do with `type name = <more than one token>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitializerPolicy {
    /// Reject anything but a single-token value
    #[default]
    Strict,
    /// Keep the first value token, drop the rest
    Truncate,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RuleConfig {
    pub pattern: String,
    pub replacement: String,
    #[serde(default)]
    pub line_start: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub package: String,
    pub suffix: String,
    pub initializers: InitializerPolicy,
    pub types: BTreeMap<String, String>,
    pub rules: Vec<RuleConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            package: DEFAULT_PACKAGE.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
            initializers: InitializerPolicy::default(),
            types: BTreeMap::new(),
            rules: Vec::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid substitution rules: {0}")]
    Tables(#[from] TableError),
}

impl Config {
    pub fn from_toml(contents: &str, path: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;
        let config = Self::from_toml(&contents, &display)?;
        log::debug!("Loaded config from {}", display);
        Ok(config)
    }

    /// Default tables extended with this config's types and rules.
    ///
    /// The combined literal table must survive a second pass unchanged.
    pub fn build_tables(&self) -> Result<Tables, ConfigError> {
        let mut tables = Tables::default();
        for (c_type, go_type) in &self.types {
            tables.types.insert(c_type, go_type);
        }
        for rule in &self.rules {
            let scope = if rule.line_start {
                RuleScope::LineStart
            } else {
                RuleScope::Anywhere
            };
            tables
                .literals
                .insert(SubstitutionRule::new(&rule.pattern, &rule.replacement, scope));
        }
        tables.validate()?;
        log::debug!(
            "{} type equivalences, {} literal rules",
            tables.types.len(),
            tables.literals.rules().len()
        );
        Ok(tables)
    }
}
