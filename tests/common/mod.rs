#![allow(dead_code)]

use postsearch::{Document, SearchIndex};

/// The store the site generator emits for the three sample posts.
pub const LUNR_STORE: &str = include_str!("../fixtures/lunr-store.js");

pub const GALILEI_URL: &str = "/troubleshooting/2021/05/28/galidevo-galilei.html";
pub const FIXPOINTS_URL: &str =
    "/java/2021/06/29/polymorphic-fixpoints-get-rid-inheritance-castings.html";
pub const TOKENS_URL: &str = "/branding/2021/09/29/my-brand-my-tokens.html";

pub fn sample_index() -> SearchIndex {
    SearchIndex::load(LUNR_STORE).expect("sample store should load")
}

pub fn urls(docs: &[&Document]) -> Vec<String> {
    docs.iter().map(|d| d.url.clone()).collect()
}

/// A minimal valid record as JSON.
pub fn record(title: &str, url: &str, tags: &[&str]) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "excerpt": format!("About {title}"),
        "categories": ["General"],
        "tags": tags,
        "url": url,
    })
}
