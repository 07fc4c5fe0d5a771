//! Recency filter and naive relevance ranking.
//!
//! `score = 1 / max(1, age_days) + 0.2 * keyword_hits`, where keyword hits
//! count every (non-overlapping) occurrence of each topic word in the
//! lowercased title and abstract.

use chrono::{DateTime, Duration, Utc};

use crate::paper::Paper;

/// Weight of one keyword hit relative to the recency term.
pub const KEYWORD_WEIGHT: f64 = 0.2;

/// Largest number of papers a digest will include.
pub const MAX_SELECTED: i64 = 3;

/// Clamp a requested paper count to `1..=3`.
pub fn clamp_count(requested: i64) -> usize {
    requested.clamp(1, MAX_SELECTED) as usize
}

/// Drop papers published before `now - days`. A paper exactly at the cutoff is kept.
///
/// A window reaching past the earliest representable date keeps every paper.
pub fn filter_recent(papers: Vec<Paper>, now: DateTime<Utc>, days: i64) -> Vec<Paper> {
    let Some(cutoff) = Duration::try_days(days).and_then(|window| now.checked_sub_signed(window))
    else {
        tracing::debug!(days, "recency window out of range, keeping all papers");
        return papers;
    };
    let before = papers.len();
    let kept: Vec<Paper> = papers.into_iter().filter(|p| p.published >= cutoff).collect();
    tracing::debug!(%cutoff, before, after = kept.len(), "filtered by recency");
    kept
}

/// Whole days elapsed since publication, never below 1.
fn age_days(paper: &Paper, now: DateTime<Utc>) -> i64 {
    (now - paper.published).num_days().max(1)
}

/// Number of times the topic terms occur in the paper's title and abstract.
pub fn keyword_hits(paper: &Paper, terms: &[String]) -> usize {
    let text = paper.searchable_text();
    terms
        .iter()
        .filter(|t| !t.is_empty())
        .map(|t| text.matches(t.as_str()).count())
        .sum()
}

/// Relevance score of one paper.
pub fn score(paper: &Paper, terms: &[String], now: DateTime<Utc>) -> f64 {
    let recency = 1.0 / age_days(paper, now) as f64;
    recency + KEYWORD_WEIGHT * keyword_hits(paper, terms) as f64
}

/// Score every paper, sort by descending score and keep the first `top_k`.
///
/// The sort is stable, so equal scores keep their feed order.
pub fn rank(mut papers: Vec<Paper>, terms: &[String], now: DateTime<Utc>, top_k: usize) -> Vec<Paper> {
    for paper in &mut papers {
        paper.score = score(paper, terms, now);
    }
    papers.sort_by(|a, b| b.score.total_cmp(&a.score));
    papers.truncate(top_k);
    papers
}
