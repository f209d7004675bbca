//! # Configuration
//!
//! PILAR configuration is managed by [`clapfig`], which handles layered loading
//! from TOML files, environment variables, and programmatic overrides.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `PILAR__CLASSIFY_URL`, `PILAR__AUTH_TOKEN`, etc.
//! 2. **Data-dir Config**: `<data dir>/pilar.toml`.
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `max_retained` | `50` | Scan records kept before the oldest are evicted |
//! | `history_key` | `scan_history` | Storage key of the history blob |
//! | `classify_url` | `http://localhost:8000/api/predict` | Classification endpoint |
//! | `auth_token` | unset | Bearer token sent to the classifier |
//! | `timeout_secs` | `30` | Read timeout for classification requests |

use confique::Config;
use serde::{Deserialize, Serialize};

use crate::error::{PilarError, Result};

/// Configuration for PILAR, stored in `pilar.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PilarConfig {
    /// Maximum number of scan records kept in history.
    #[config(default = 50)]
    pub max_retained: usize,

    /// Storage key (file stem) holding the history.
    #[config(default = "scan_history")]
    pub history_key: String,

    /// Classification endpoint URL.
    #[config(default = "http://localhost:8000/api/predict")]
    pub classify_url: String,

    /// Bearer token for the classification endpoint.
    pub auth_token: Option<String>,

    /// Read timeout, in seconds, for classification requests.
    #[config(default = 30)]
    pub timeout_secs: u64,
}

impl Default for PilarConfig {
    fn default() -> Self {
        Self {
            max_retained: crate::store::scan_store::MAX_RETAINED,
            history_key: crate::store::scan_store::HISTORY_KEY.to_string(),
            classify_url: "http://localhost:8000/api/predict".to_string(),
            auth_token: None,
            timeout_secs: 30,
        }
    }
}

impl PilarConfig {
    /// Rejects values the store or the HTTP client cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.max_retained == 0 {
            return Err(PilarError::Config(
                "max_retained must be at least 1".to_string(),
            ));
        }
        if self.history_key.trim().is_empty()
            || self.history_key.contains(['/', '\\'])
            || self.history_key.starts_with('.')
        {
            return Err(PilarError::Config(format!(
                "history_key {:?} is not a valid storage key",
                self.history_key
            )));
        }
        validate_classify_url(&self.classify_url)?;
        if self.timeout_secs == 0 {
            return Err(PilarError::Config(
                "timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Checks that a classification endpoint is an http(s) URL.
pub fn validate_classify_url(url: &str) -> Result<()> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(PilarError::Config(format!(
            "classify_url {:?} must be an http(s) URL",
            url
        )))
    }
}
