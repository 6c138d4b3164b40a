//! Configuration
//!
//! Settings for a labcalc session, layered from lowest to highest precedence:
//!
//! 1. Built-in defaults ([`LabcalcConfig::default`])
//! 2. A TOML document ([`LabcalcConfig::from_toml_str`])
//! 3. Environment overrides ([`LabcalcConfig::apply_env`])
//!
//! The core never reads files itself; surfaces load the document and hand
//! over its contents.
//!
//! # Example document
//!
//! ```toml
//! char_limit = 32
//!
//! [style]
//! selected_marker = "» "
//! precision = 4
//! show_hints = false
//! ```

use serde::Deserialize;
use thiserror::Error;

use crate::fields::DEFAULT_CHAR_LIMIT;
use crate::render::RenderStyle;

/// Environment variable overriding [`LabcalcConfig::char_limit`]
pub const ENV_CHAR_LIMIT: &str = "LABCALC_CHAR_LIMIT";
/// Environment variable overriding [`RenderStyle::precision`]
pub const ENV_PRECISION: &str = "LABCALC_PRECISION";
/// Environment variable overriding [`RenderStyle::show_hints`]
pub const ENV_HINTS: &str = "LABCALC_HINTS";

/// Largest accepted number of decimals in results
pub const MAX_PRECISION: usize = 10;

/// Errors while building a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML document is malformed or has unknown keys
    #[error("invalid config document: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of range or unparsable
    #[error("invalid value for '{key}': {reason}")]
    Invalid {
        /// Offending key or environment variable
        key: String,
        /// What is wrong with it
        reason: String,
    },
}

/// labcalc session settings
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabcalcConfig {
    /// Maximum characters per input field
    pub char_limit: usize,
    /// Render façade settings
    pub style: RenderStyle,
}

impl Default for LabcalcConfig {
    fn default() -> Self {
        Self {
            char_limit: DEFAULT_CHAR_LIMIT,
            style: RenderStyle::default(),
        }
    }
}

impl LabcalcConfig {
    /// Defaults with environment overrides applied
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().apply_env()
    }

    /// Parse and validate a TOML document; missing keys keep their defaults
    pub fn from_toml_str(document: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `LABCALC_*` environment variables on top of `self`
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup (environment-shaped)
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_CHAR_LIMIT) {
            self.char_limit = parse_override(ENV_CHAR_LIMIT, &raw)?;
        }
        if let Some(raw) = lookup(ENV_PRECISION) {
            self.style.precision = parse_override(ENV_PRECISION, &raw)?;
        }
        if let Some(raw) = lookup(ENV_HINTS) {
            self.style.show_hints = match raw.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                other => {
                    return Err(ConfigError::Invalid {
                        key: ENV_HINTS.to_string(),
                        reason: format!("'{other}' is not a boolean"),
                    })
                }
            };
        }

        self.validate()?;
        Ok(self)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.char_limit == 0 {
            return Err(ConfigError::Invalid {
                key: "char_limit".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.style.selected_marker == self.style.idle_marker {
            return Err(ConfigError::Invalid {
                key: "style.selected_marker".to_string(),
                reason: "must differ from style.idle_marker".to_string(),
            });
        }
        if self.style.precision > MAX_PRECISION {
            return Err(ConfigError::Invalid {
                key: "style.precision".to_string(),
                reason: format!("must be at most {MAX_PRECISION}"),
            });
        }
        Ok(())
    }
}

fn parse_override(key: &str, raw: &str) -> Result<usize, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        key: key.to_string(),
        reason: format!("'{raw}' is not a non-negative integer"),
    })
}
