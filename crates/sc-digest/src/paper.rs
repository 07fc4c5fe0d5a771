//! Paper records as returned by the feed.

use chrono::{DateTime, Utc};

/// A single paper from the feed, plus the fields attached while ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct Paper {
    /// Paper title with whitespace collapsed.
    pub title: String,
    /// Abstract text.
    pub summary: String,
    /// Publication time.
    pub published: DateTime<Utc>,
    /// Author names in feed order.
    pub authors: Vec<String>,
    /// Landing page on the feed's site.
    pub link: String,
    /// Direct PDF link, when the feed provides one.
    pub pdf: Option<String>,
    /// Primary subject category (e.g. `cs.CL`), empty if unknown.
    pub primary_category: String,
    /// Relevance score, set by ranking.
    pub score: f64,
    /// One-line "why it matters" blurb, set after selection.
    pub why_it_matters: String,
}

impl Paper {
    /// Create a paper with no score or blurb yet.
    pub fn new(title: impl Into<String>, summary: impl Into<String>, published: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            published,
            authors: Vec::new(),
            link: String::new(),
            pdf: None,
            primary_category: String::new(),
            score: 0.0,
            why_it_matters: String::new(),
        }
    }

    /// Lowercased title and abstract, the text searched for topic terms.
    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.title, self.summary).to_lowercase()
    }
}
