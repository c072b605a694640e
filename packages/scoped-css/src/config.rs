//! Scope configuration
//!
//! Read from a camelCase JSON file, e.g. `{ "tokenPrefix": "s", "tokenLength": 6 }`.
//! Missing fields fall back to the defaults.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::id_generator::is_valid_token;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScopeConfig {
    /// Leading characters of every token. Keeps tokens from starting with a
    /// digit, which a class name may not.
    pub token_prefix: String,
    /// Number of random characters after the prefix.
    pub token_length: usize,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        ScopeConfig {
            token_prefix: "s".to_string(),
            token_length: 6,
        }
    }
}

impl ScopeConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: ScopeConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !is_valid_token(&self.token_prefix) {
            return Err(Error::InvalidConfig(format!(
                "tokenPrefix {:?} must start with a letter or '_' and contain only letters, digits, '_' or '-'",
                self.token_prefix
            )));
        }
        if self.token_length == 0 {
            return Err(Error::InvalidConfig(
                "tokenLength must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
