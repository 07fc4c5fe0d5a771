//! Search query construction for the arXiv API.
//!
//! Each topic becomes one clause. Single words are exact-phrase matches
//! (`all:"word"`); multi-word topics AND their words together. Clauses are
//! OR'd:
//!
//! ```text
//! ["computational linguistics", "neuroscience"]
//!   => (all:"computational" AND all:"linguistics") OR all:"neuroscience"
//! ```

/// Topic used when none is given.
pub const DEFAULT_TOPIC: &str = "computational linguistics";

/// Split a comma-separated topic list, dropping empty entries.
pub fn parse_topics(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Replace an empty topic list with [`DEFAULT_TOPIC`].
pub fn topics_or_default(topics: Vec<String>) -> Vec<String> {
    if topics.iter().all(|t| t.trim().is_empty()) {
        vec![DEFAULT_TOPIC.to_string()]
    } else {
        topics
    }
}

fn topic_clause(topic: &str) -> Option<String> {
    let words: Vec<&str> = topic.split_whitespace().collect();
    match words.as_slice() {
        [] => None,
        [word] => Some(format!("all:\"{word}\"")),
        _ => {
            let inner: Vec<String> = words.iter().map(|w| format!("all:\"{w}\"")).collect();
            Some(format!("({})", inner.join(" AND ")))
        }
    }
}

/// Build the `search_query` value for a list of topics.
pub fn build_search_query<S: AsRef<str>>(topics: &[S]) -> String {
    let clauses: Vec<String> = topics
        .iter()
        .filter_map(|t| topic_clause(t.as_ref()))
        .collect();

    if clauses.is_empty() {
        return topic_clause(DEFAULT_TOPIC).unwrap_or_default();
    }
    clauses.join(" OR ")
}

/// Lowercased words of every topic, the terms counted by the ranker.
pub fn topic_terms<S: AsRef<str>>(topics: &[S]) -> Vec<String> {
    topics
        .iter()
        .flat_map(|t| t.as_ref().split_whitespace())
        .map(str::to_lowercase)
        .collect()
}
