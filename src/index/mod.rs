pub mod loader;

use std::path::Path;

use crate::error::Result;
use crate::models::document::Document;
use crate::models::search::SearchHit;
use crate::search::matcher::{FoldedDocument, Query};

/// The full, ordered set of documents behind a search widget.
///
/// Immutable once built. A new build of the site replaces the whole index
/// instead of merging into it.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    documents: Vec<Document>,
    folded: Vec<FoldedDocument>,
}

impl SearchIndex {
    pub fn from_documents(documents: Vec<Document>) -> Self {
        let folded = documents.iter().map(FoldedDocument::new).collect();
        Self { documents, folded }
    }

    /// Parse a payload. See [`loader::load`] for the accepted formats.
    pub fn load(source: &str) -> Result<Self> {
        loader::load(source).map(Self::from_documents)
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        loader::load_file(path).map(Self::from_documents)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    /// First document published at `url`.
    pub fn get_by_url(&self, url: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.url == url)
    }

    /// Documents whose title, excerpt, categories or tags contain `query`,
    /// ignoring case, in index order.
    ///
    /// The empty query returns every document; no match is an empty result.
    pub fn search(&self, query: &str) -> Vec<&Document> {
        let query = Query::new(query);
        let hits: Vec<&Document> = self
            .documents
            .iter()
            .zip(&self.folded)
            .filter(|(_, folded)| query.matches(folded))
            .map(|(doc, _)| doc)
            .collect();

        tracing::debug!(hits = hits.len(), total = self.len(), "Searched index");
        hits
    }

    /// Same filter as [`SearchIndex::search`], projected for rendering.
    pub fn search_hits(&self, query: &str, snippet_chars: usize) -> Vec<SearchHit> {
        let query = Query::new(query);
        self.documents
            .iter()
            .zip(&self.folded)
            .filter(|(_, folded)| query.matches(folded))
            .map(|(doc, folded)| {
                SearchHit::from_document(doc, query.matched_fields(folded), snippet_chars)
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a SearchIndex {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Free-function form of [`SearchIndex::search`].
pub fn search<'a>(index: &'a SearchIndex, query: &str) -> Vec<&'a Document> {
    index.search(query)
}
