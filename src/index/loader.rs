use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{IndexError, Result};
use crate::models::document::Document;

/// Assignment prefix of a generated `lunr-store.js`, e.g. `var store = `.
static STORE_ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:var|let|const)\s+[A-Za-z_$][A-Za-z0-9_$]*\s*=\s*")
        .expect("valid store assignment regex")
});

/// A record as written by the site generator, before validation.
#[derive(Debug, Deserialize)]
struct RawDocument {
    title: Option<String>,
    excerpt: Option<String>,
    categories: Option<Vec<String>>,
    tags: Option<Vec<String>>,
    url: Option<String>,
    teaser: Option<String>,
    date: Option<String>,
}

/// Parse a search store payload into documents, preserving order.
///
/// Accepts a bare JSON array or the `var store = [...];` script the site
/// generator emits.
pub fn load(source: &str) -> Result<Vec<Document>> {
    let payload = strip_script_wrapper(source);
    let value: Value = serde_json::from_str(payload)?;

    let records = match value {
        Value::Array(records) => records,
        other => {
            return Err(IndexError::Malformed(format!(
                "expected a sequence of records, found {}",
                kind_of(&other)
            )))
        }
    };

    let documents = records
        .into_iter()
        .enumerate()
        .map(|(position, record)| validate_record(position, record))
        .collect::<Result<Vec<_>>>()?;

    warn_on_duplicate_urls(&documents);
    tracing::debug!(documents = documents.len(), "Loaded search store");

    Ok(documents)
}

/// Read a payload from disk and parse it with [`load`].
pub fn load_file(path: &Path) -> Result<Vec<Document>> {
    let source = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = source.len(), "Read search store");
    load(&source)
}

/// Urls that appear more than once, in first-seen order.
pub fn duplicate_urls(documents: &[Document]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();
    for doc in documents {
        let url = doc.url.as_str();
        if !seen.insert(url) && reported.insert(url) {
            duplicates.push(doc.url.clone());
        }
    }
    duplicates
}

fn strip_script_wrapper(source: &str) -> &str {
    let body = match STORE_ASSIGNMENT.find(source) {
        Some(m) => &source[m.end()..],
        None => source,
    };
    body.trim_end().trim_end_matches(';')
}

fn validate_record(position: usize, record: Value) -> Result<Document> {
    if !record.is_object() {
        return Err(IndexError::Malformed(format!(
            "record {position} is {}, expected an object",
            kind_of(&record)
        )));
    }

    let raw: RawDocument = serde_json::from_value(record)
        .map_err(|e| IndexError::Malformed(format!("record {position}: {e}")))?;

    let title = required(position, "title", raw.title)?;
    let excerpt = raw
        .excerpt
        .ok_or(IndexError::MissingField { position, field: "excerpt" })?;
    let url = required(position, "url", raw.url)?;

    Ok(Document {
        title,
        excerpt,
        categories: raw.categories.unwrap_or_default(),
        tags: raw.tags.unwrap_or_default(),
        url,
        teaser: raw.teaser.filter(|t| !t.is_empty()),
        date: raw.date.filter(|d| !d.is_empty()),
    })
}

/// A required field must be present and non-blank.
fn required(position: usize, field: &'static str, value: Option<String>) -> Result<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(IndexError::MissingField { position, field })
}

fn warn_on_duplicate_urls(documents: &[Document]) {
    for url in duplicate_urls(documents) {
        tracing::warn!(%url, "Search store contains duplicate url");
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
