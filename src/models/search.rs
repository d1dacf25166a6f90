use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::document::Document;
use crate::search::matcher::MatchField;

/// A search result shaped for rendering: link, snippet and optional thumbnail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub snippet: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teaser: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_on: Option<NaiveDate>,
    /// Fields the query was found in. Empty for the match-all query.
    #[serde(default)]
    pub matched: Vec<MatchField>,
}

impl SearchHit {
    pub fn from_document(doc: &Document, matched: Vec<MatchField>, snippet_chars: usize) -> Self {
        Self {
            title: doc.title.clone(),
            url: doc.url.clone(),
            snippet: doc.snippet(snippet_chars),
            teaser: doc.teaser.clone(),
            published_on: doc.published_on(),
            matched,
        }
    }
}
