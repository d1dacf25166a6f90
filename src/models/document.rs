use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Jekyll-style permalink date segment, e.g. `/java/2021/06/29/slug.html`.
static PERMALINK_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/(\d{4})/(\d{2})/(\d{2})/").expect("valid permalink regex"));

/// One published post as it appears in the generated search store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Display title, never empty.
    pub title: String,
    /// Summary text, possibly cut short with an ellipsis by the generator.
    pub excerpt: String,
    /// Category labels, in declaration order.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Free-form tags. Case is preserved as published.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Relative navigation target, unique within one store.
    pub url: String,
    /// Relative path to the thumbnail image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teaser: Option<String>,
    /// Publication date, when the generator emits one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl Document {
    /// Publication date from the `date` field, falling back to the permalink.
    pub fn published_on(&self) -> Option<NaiveDate> {
        self.date
            .as_deref()
            .and_then(parse_date)
            .or_else(|| date_from_permalink(&self.url))
    }

    /// Whether the generator truncated the excerpt.
    pub fn excerpt_is_truncated(&self) -> bool {
        let trimmed = self.excerpt.trim_end();
        trimmed.ends_with("...") || trimmed.ends_with('…')
    }

    /// The excerpt limited to `max_chars` characters.
    ///
    /// Cut text gets a trailing `…`; an excerpt that already fits is returned as is.
    pub fn snippet(&self, max_chars: usize) -> String {
        match self.excerpt.char_indices().nth(max_chars) {
            None => self.excerpt.clone(),
            Some((cut, _)) => {
                let mut snippet = self.excerpt[..cut].trim_end().to_string();
                snippet.push('…');
                snippet
            }
        }
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    // Jekyll writes `2021-05-28 00:00:00 +0200`; the day is all we need.
    raw.get(..10)
        .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
}

fn date_from_permalink(url: &str) -> Option<NaiveDate> {
    let caps = PERMALINK_DATE.captures(url)?;
    let year = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let day = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
