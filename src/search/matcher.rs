use serde::{Deserialize, Serialize};

use crate::models::document::Document;

/// A searchable field of a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchField {
    Title,
    Excerpt,
    Category,
    Tag,
}

/// Lowercased copies of the searchable fields, computed once per document.
#[derive(Debug, Clone)]
pub struct FoldedDocument {
    title: String,
    excerpt: String,
    categories: Vec<String>,
    tags: Vec<String>,
}

impl FoldedDocument {
    pub fn new(doc: &Document) -> Self {
        Self {
            title: fold(&doc.title),
            excerpt: fold(&doc.excerpt),
            categories: doc.categories.iter().map(|c| fold(c)).collect(),
            tags: doc.tags.iter().map(|t| fold(t)).collect(),
        }
    }
}

/// A case-insensitive query.
///
/// Title and excerpt match on any substring, so `astro` finds "astronomy".
/// Categories and tags match only where the hit is bounded by whitespace or
/// the label edges, so `java` does not find a `javascript` tag while
/// `design tokens` still finds "Design Tokens". The label text itself is
/// never rewritten: every hit is a substring of the folded field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    needle: String,
}

impl Query {
    pub fn new(raw: &str) -> Self {
        Self { needle: fold(raw) }
    }

    /// The empty query matches every document.
    pub fn is_match_all(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, doc: &FoldedDocument) -> bool {
        self.is_match_all()
            || doc.title.contains(&self.needle)
            || doc.excerpt.contains(&self.needle)
            || self.matches_label(&doc.categories)
            || self.matches_label(&doc.tags)
    }

    /// Every field the needle occurs in, in declaration order.
    pub fn matched_fields(&self, doc: &FoldedDocument) -> Vec<MatchField> {
        if self.is_match_all() {
            return Vec::new();
        }

        let mut fields = Vec::new();
        if doc.title.contains(&self.needle) {
            fields.push(MatchField::Title);
        }
        if doc.excerpt.contains(&self.needle) {
            fields.push(MatchField::Excerpt);
        }
        if self.matches_label(&doc.categories) {
            fields.push(MatchField::Category);
        }
        if self.matches_label(&doc.tags) {
            fields.push(MatchField::Tag);
        }
        fields
    }

    fn matches_label(&self, labels: &[String]) -> bool {
        labels
            .iter()
            .any(|label| contains_bounded(label, &self.needle))
    }
}

/// Case folding shared by documents and queries.
pub fn fold(text: &str) -> String {
    text.to_lowercase()
}

/// Whether `needle` occurs in `label` with whitespace or an edge on both sides.
///
/// Overlapping occurrences are all considered.
fn contains_bounded(label: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    let mut from = 0;
    while let Some(offset) = label[from..].find(needle) {
        let start = from + offset;
        let end = start + needle.len();
        let before = label[..start].chars().next_back();
        let after = label[end..].chars().next();
        if before.map_or(true, char::is_whitespace) && after.map_or(true, char::is_whitespace) {
            return true;
        }
        from = start + label[start..].chars().next().map_or(1, char::len_utf8);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folded() -> FoldedDocument {
        FoldedDocument::new(&Document {
            title: "My brand, my ~~rules~~ tokens".to_string(),
            excerpt: "Brands have long ceased to be simply the advertised image.".to_string(),
            categories: vec!["Branding".to_string()],
            tags: vec![
                "CSS Custom Properties".to_string(),
                "Design Tokens".to_string(),
            ],
            url: "/branding/2021/09/29/my-brand-my-tokens.html".to_string(),
            teaser: None,
            date: None,
        })
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let q = Query::new("");
        assert!(q.is_match_all());
        assert!(q.matches(&folded()));
        assert!(q.matched_fields(&folded()).is_empty());
    }

    #[test]
    fn test_case_insensitive_tag_match() {
        let q = Query::new("css custom");
        assert!(q.matches(&folded()));
        assert_eq!(q.matched_fields(&folded()), vec![MatchField::Tag]);
    }

    #[test]
    fn test_match_in_several_fields() {
        let q = Query::new("BRAND");
        assert_eq!(
            q.matched_fields(&folded()),
            vec![MatchField::Title, MatchField::Excerpt]
        );

        let q = Query::new("branding");
        assert_eq!(q.matched_fields(&folded()), vec![MatchField::Category]);
    }

    #[test]
    fn test_labels_match_whole_words_only() {
        let doc = FoldedDocument::new(&Document {
            title: "Galidevo Galilei".to_string(),
            excerpt: "He studied gravity, motion, inertia and astronomy.".to_string(),
            categories: vec!["Troubleshooting".to_string()],
            tags: vec!["javascript".to_string(), "astronomy".to_string()],
            url: "/troubleshooting/2021/05/28/galidevo-galilei.html".to_string(),
            teaser: None,
            date: None,
        });
        assert!(!Query::new("java").matches(&doc));
        assert!(Query::new("JavaScript").matches(&doc));
        assert_eq!(
            Query::new("astro").matched_fields(&doc),
            vec![MatchField::Excerpt]
        );
        assert_eq!(
            Query::new("astronomy").matched_fields(&doc),
            vec![MatchField::Excerpt, MatchField::Tag]
        );
    }

    #[test]
    fn test_label_whitespace_is_matched_verbatim() {
        let doc = FoldedDocument::new(&Document {
            title: "t".to_string(),
            excerpt: String::new(),
            categories: Vec::new(),
            tags: vec!["  Design\tTokens ".to_string()],
            url: "/t".to_string(),
            teaser: None,
            date: None,
        });
        assert!(!Query::new("design tokens").matches(&doc));
        assert!(Query::new("design\ttokens").matches(&doc));
        assert!(Query::new("tokens").matches(&doc));
        assert!(!Query::new("token").matches(&doc));

        let doc = FoldedDocument::new(&Document {
            title: "t".to_string(),
            excerpt: String::new(),
            categories: vec!["Node\tJS".to_string()],
            tags: vec!["Design  Tokens".to_string()],
            url: "/t".to_string(),
            teaser: None,
            date: None,
        });
        assert!(!Query::new("node js").matches(&doc));
        assert!(!Query::new("design tokens").matches(&doc));
        assert!(Query::new("design  tokens").matches(&doc));
    }

    #[test]
    fn test_contains_bounded_checks_overlapping_hits() {
        assert!(contains_bounded("xa a a", "a a"));
        assert!(!contains_bounded("javascript", "java"));
        assert!(contains_bounded("java", "java"));
        assert!(contains_bounded("über café", "café"));
        assert!(!contains_bounded("übercafé", "café"));
    }

    #[test]
    fn test_url_is_not_searched() {
        let q = Query::new("2021/09");
        assert!(!q.matches(&folded()));
    }

    #[test]
    fn test_whitespace_is_significant() {
        assert!(!Query::new(" ").is_match_all());
        assert!(Query::new("design tokens").matches(&folded()));
        assert!(!Query::new("design  tokens").matches(&folded()));
    }

    #[test]
    fn test_match_field_serialization() {
        assert_eq!(
            serde_json::to_string(&MatchField::Category).unwrap(),
            "\"category\""
        );
    }
}
