//! The digest pipeline: query, fetch, filter, rank, annotate, render.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::blurb::why_it_matters;
use crate::error::DigestResult;
use crate::feed::{MAX_CANDIDATES, PaperSource};
use crate::level::ReadingLevel;
use crate::paper::Paper;
use crate::query::{build_search_query, topic_terms, topics_or_default};
use crate::rank::{clamp_count, filter_recent, rank};
use crate::template::TemplateSet;

/// What to put in a digest.
#[derive(Debug, Clone, PartialEq)]
pub struct DigestRequest {
    /// Topics to search for. Empty means the default topic.
    pub topics: Vec<String>,
    /// Requested paper count, clamped to 1-3.
    pub n: i64,
    /// Look-back window in days.
    pub days: i64,
    /// Reading level for the guidance paragraph.
    pub level: ReadingLevel,
}

/// A rendered digest and the papers it covers.
#[derive(Debug, Clone)]
pub struct Digest {
    /// Selected papers, best first, with scores and blurbs attached.
    pub papers: Vec<Paper>,
    /// The rendered document.
    pub text: String,
}

/// Run the full pipeline against `source`, using `now` as the reference time.
pub fn build_digest(
    source: &dyn PaperSource,
    request: &DigestRequest,
    templates: &TemplateSet,
    now: DateTime<Utc>,
) -> DigestResult<Digest> {
    let topics = topics_or_default(request.topics.clone());
    let query = build_search_query(&topics);

    let candidates = source.fetch(&query, MAX_CANDIDATES)?;
    tracing::info!(candidates = candidates.len(), "fetched candidates");

    let recent = filter_recent(candidates, now, request.days);
    let terms = topic_terms(&topics);
    let mut papers = rank(recent, &terms, now, clamp_count(request.n));

    for paper in &mut papers {
        paper.why_it_matters = why_it_matters(&paper.summary);
        tracing::debug!(title = %paper.title, score = paper.score, "selected paper");
    }

    let text = render_digest(&papers, &topics, request.level, templates, now);
    Ok(Digest { papers, text })
}

/// Render one paper section.
fn render_paper(index: usize, paper: &Paper, templates: &TemplateSet) -> String {
    let pdf_line = paper
        .pdf
        .as_ref()
        .map(|url| format!("- [PDF]({url})"))
        .unwrap_or_default();

    let vars = HashMap::from([
        ("index", index.to_string()),
        ("title", paper.title.clone()),
        ("authors", paper.authors.join(", ")),
        ("published", paper.published.format("%Y-%m-%d").to_string()),
        ("category", paper.primary_category.clone()),
        ("abstract", paper.summary.clone()),
        ("why_it_matters", paper.why_it_matters.clone()),
        ("link", paper.link.clone()),
        ("pdf", paper.pdf.clone().unwrap_or_default()),
        ("pdf_line", pdf_line),
        ("score", format!("{:.3}", paper.score)),
    ]);
    templates.paper.render(&vars)
}

/// Render the digest document for already-selected papers.
pub fn render_digest(
    papers: &[Paper],
    topics: &[String],
    level: ReadingLevel,
    templates: &TemplateSet,
    now: DateTime<Utc>,
) -> String {
    let sections: String = papers
        .iter()
        .enumerate()
        .map(|(i, paper)| render_paper(i + 1, paper, templates))
        .collect();

    let vars = HashMap::from([
        ("date", now.format("%Y-%m-%d").to_string()),
        ("topics", topics.join(", ")),
        ("level", level.to_string()),
        ("guidance", level.guidance().to_string()),
        ("papers", sections),
    ]);
    templates.document.render(&vars)
}
