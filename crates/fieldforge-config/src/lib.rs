//! Configuration system for FieldForge.
//!
//! Load solve settings from TOML or YAML files to change the target field
//! prefix, the ticket set used for resolution, and resolver limits without
//! code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use fieldforge_config::SolveConfig;
//!
//! let config = SolveConfig::from_toml_str(r#"
//!     target_prefix = "arrival "
//!     include_own_ticket = false
//!
//!     [resolver]
//!     max_passes = 25
//! "#).unwrap();
//!
//! assert_eq!(config.target_prefix, "arrival ");
//! assert!(!config.include_own_ticket);
//! assert_eq!(config.resolver.max_passes, Some(25));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use fieldforge_config::SolveConfig;
//!
//! let config = SolveConfig::load("fieldforge.toml").unwrap_or_default();
//! assert_eq!(config.target_prefix, "departure ");
//! ```

use std::path::Path;

use fieldforge_core::FieldResolver;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix of the fields whose own-ticket values are multiplied.
pub const DEFAULT_TARGET_PREFIX: &str = "departure ";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solve configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolveConfig {
    /// Field name prefix selecting the own-ticket values to multiply.
    #[serde(default = "default_target_prefix")]
    pub target_prefix: String,

    /// Whether the own ticket joins the valid nearby tickets during resolution.
    #[serde(default = "default_true")]
    pub include_own_ticket: bool,

    /// Resolver configuration.
    #[serde(default)]
    pub resolver: ResolverConfig,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            target_prefix: default_target_prefix(),
            include_own_ticket: true,
            resolver: ResolverConfig::default(),
        }
    }
}

impl SolveConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a file, picking YAML for `.yaml`/`.yml`
    /// extensions and TOML otherwise.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values serde cannot reject on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.max_passes == Some(0) {
            return Err(ConfigError::Invalid(
                "resolver.max_passes must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Sets the target field prefix.
    pub fn with_target_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.target_prefix = prefix.into();
        self
    }

    /// Sets whether the own ticket takes part in resolution.
    pub fn with_own_ticket(mut self, include: bool) -> Self {
        self.include_own_ticket = include;
        self
    }

    /// Sets the resolver pass limit.
    pub fn with_max_passes(mut self, limit: usize) -> Self {
        self.resolver.max_passes = Some(limit);
        self
    }

    /// Builds the resolver described by this configuration.
    pub fn resolver(&self) -> FieldResolver {
        self.resolver.build()
    }
}

/// Resolver configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ResolverConfig {
    /// Maximum number of elimination passes. Unbounded when absent; a pass
    /// that assigns nothing always fails.
    #[serde(default)]
    pub max_passes: Option<usize>,
}

impl ResolverConfig {
    pub fn build(&self) -> FieldResolver {
        match self.max_passes {
            Some(limit) => FieldResolver::new().with_max_passes(limit),
            None => FieldResolver::new(),
        }
    }
}

fn default_target_prefix() -> String {
    DEFAULT_TARGET_PREFIX.to_string()
}

fn default_true() -> bool {
    true
}
