//! "Why it matters" blurbs built from the first sentence of an abstract.

/// Used when the abstract has no usable sentence.
pub const FALLBACK_BLURB: &str =
    "This paper potentially advances the topic with new findings or synthesis.";

/// First sentence of an abstract, split on `". "`, without trailing dots.
pub fn first_sentence(summary: &str) -> Option<String> {
    let flat = summary.replace('\n', " ");
    flat.trim()
        .split(". ")
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(|s| s.trim_end_matches('.').to_string())
        .filter(|s| !s.is_empty())
}

/// Reframe the abstract's first sentence as a one-line relevance note.
pub fn why_it_matters(summary: &str) -> String {
    match first_sentence(summary) {
        Some(sentence) => format!("This work is relevant because it addresses: {sentence}."),
        None => FALLBACK_BLURB.to_string(),
    }
}
