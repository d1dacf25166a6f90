use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::IndexError;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "postsearch.toml";

/// Runtime settings, layered from an optional file and `POSTSEARCH_*` env vars.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Search store to load when `--index` is not given.
    pub index_path: Option<PathBuf>,
    /// Cap on rendered results. `None` shows everything.
    pub max_results: Option<usize>,
    /// Snippet length in characters.
    pub snippet_chars: usize,
    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            index_path: None,
            max_results: None,
            snippet_chars: 160,
            log_filter: "postsearch=info".to_string(),
        }
    }
}

impl Settings {
    /// Build settings.
    ///
    /// An explicit `config_file` must exist; the default `postsearch.toml`
    /// is optional. Environment variables override file values.
    pub fn load(config_file: Option<&Path>) -> Result<Self, IndexError> {
        let file = match config_file {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        config::Config::builder()
            .add_source(file)
            .add_source(config::Environment::with_prefix("POSTSEARCH"))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| IndexError::Config(e.to_string()))
    }
}
