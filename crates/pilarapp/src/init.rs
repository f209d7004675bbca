//! # Context Initialization
//!
//! Resolves where PILAR keeps its data, loads configuration from there and
//! wires the file-backed store into a [`PilarApi`].
//!
//! ## Data Directory Resolution
//!
//! 1. `data_override` (the CLI's `--data` flag), used as-is.
//! 2. `PILAR_DATA` environment variable (primarily for tests).
//! 3. The OS data directory from the `directories` crate.
//!
//! ## Configuration
//!
//! `pilar.toml` in the data directory, merged with `PILAR__*` environment
//! variables and compiled defaults (see [`crate::config`]). A file that fails
//! to load falls back to the defaults; values that load but fail validation
//! are an error.

use crate::api::{PilarApi, PilarPaths};
use crate::config::PilarConfig;
use crate::error::{PilarError, Result};
use crate::http_client::HttpClassifier;
use crate::store::fs::FileStore;
use clapfig::{Clapfig, SearchMode, SearchPath};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub struct PilarContext {
    pub api: PilarApi<FileStore>,
    pub classifier: HttpClassifier,
    pub config: PilarConfig,
}

pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    if let Ok(path) = std::env::var("PILAR_DATA") {
        if !path.is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    ProjectDirs::from("id", "pilar", "pilar")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| PilarError::Config("Could not determine data directory".to_string()))
}

pub fn load_config(data_dir: &Path) -> PilarConfig {
    match Clapfig::builder()
        .app_name("pilar")
        .file_name("pilar.toml")
        .search_paths(vec![SearchPath::Path(data_dir.to_path_buf())])
        .search_mode(SearchMode::Merge)
        .load()
    {
        Ok(config) => config,
        Err(e) => {
            warn!(error = ?e, "could not load pilar.toml, using defaults");
            PilarConfig::default()
        }
    }
}

pub fn initialize(data_override: Option<PathBuf>) -> Result<PilarContext> {
    let data_dir = resolve_data_dir(data_override)?;
    let config = load_config(&data_dir);
    config.validate()?;
    debug!(
        data_dir = %data_dir.display(),
        max_retained = config.max_retained,
        classify_url = %config.classify_url,
        "initialized"
    );

    let store = FileStore::new(data_dir.clone())
        .with_key(config.history_key.clone())
        .with_max_retained(config.max_retained);
    let classifier = HttpClassifier::from_config(&config);
    let api = PilarApi::new(store, PilarPaths { data_dir });

    Ok(PilarContext {
        api,
        classifier,
        config,
    })
}
