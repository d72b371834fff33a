//! Generator configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Suffix appended to every generated filename, identifying the generating
/// user. Conventionally the user's initials.
pub const DEFAULT_SUFFIX: &str = "ArP";

/// Top-level generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Filename suffix (generating user's initials).
    pub suffix: String,
}

impl GeneratorConfig {
    /// Create a configuration with an explicit suffix.
    pub fn new(suffix: impl Into<String>) -> Result<Self> {
        let suffix = suffix.into();
        if suffix.trim().is_empty() {
            return Err(Error::Config("filename suffix must not be empty".into()));
        }
        Ok(Self { suffix })
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}
