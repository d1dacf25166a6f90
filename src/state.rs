//! Process-wide active index.
//!
//! A page view (or CLI run) calls [`init`] once; searches then read the
//! shared index without further coordination. Every `init` replaces the
//! previous index wholesale.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::Result;
use crate::index::SearchIndex;
use crate::models::document::Document;

static ACTIVE: RwLock<Option<Arc<SearchIndex>>> = RwLock::new(None);

/// Load `source` and make it the active index.
///
/// On failure the slot is cleared, so search reports "unavailable" rather
/// than serving a stale build.
pub fn init(source: &str) -> Result<Arc<SearchIndex>> {
    install(SearchIndex::load(source))
}

pub fn init_from_file(path: &Path) -> Result<Arc<SearchIndex>> {
    install(SearchIndex::load_file(path))
}

/// The active index, if one loaded successfully.
pub fn active() -> Option<Arc<SearchIndex>> {
    ACTIVE.read().clone()
}

/// Search the active index.
///
/// Without an active index this degrades to no results.
pub fn search(query: &str) -> Vec<Document> {
    match active() {
        Some(index) => index.search(query).into_iter().cloned().collect(),
        None => {
            tracing::debug!("Search requested with no active index");
            Vec::new()
        }
    }
}

pub fn reset() {
    *ACTIVE.write() = None;
}

fn install(loaded: Result<SearchIndex>) -> Result<Arc<SearchIndex>> {
    match loaded {
        Ok(index) => {
            let index = Arc::new(index);
            tracing::info!(documents = index.len(), "Activated search index");
            *ACTIVE.write() = Some(Arc::clone(&index));
            Ok(index)
        }
        Err(e) => {
            tracing::error!("Search index unavailable: {e}");
            *ACTIVE.write() = None;
            Err(e)
        }
    }
}
