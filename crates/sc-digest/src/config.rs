//! Digest settings, from command-line flags or a TOML config file.
//!
//! A config file replaces the command-line flags entirely; keys it leaves
//! out take their defaults:
//!
//! ```toml
//! topics = ["computational linguistics", "neuroscience"]  # or "a, b"
//! n = 2
//! days = 14
//! level = "beginner"
//! outfile = "digest.md"
//! templates = "templates"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::digest::DigestRequest;
use crate::error::{DigestError, DigestResult};
use crate::level::ReadingLevel;
use crate::query::{parse_topics, topics_or_default};

/// Default number of papers requested.
pub const DEFAULT_COUNT: i64 = 3;

/// Default look-back window in days.
pub const DEFAULT_DAYS: i64 = 30;

/// Default template directory.
pub const DEFAULT_TEMPLATE_DIR: &str = "templates";

/// Resolved settings for one digest run.
#[derive(Debug, Clone, PartialEq)]
pub struct DigestConfig {
    /// Topics to search for.
    pub topics: Vec<String>,
    /// Requested paper count (clamped to 1-3 when ranking).
    pub n: i64,
    /// Look-back window in days.
    pub days: i64,
    /// File to write the digest to instead of stdout.
    pub outfile: Option<PathBuf>,
    /// Reading level for the guidance paragraph.
    pub level: ReadingLevel,
    /// Directory searched for template overrides.
    pub templates: PathBuf,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            topics: Vec::new(),
            n: DEFAULT_COUNT,
            days: DEFAULT_DAYS,
            outfile: None,
            level: ReadingLevel::default(),
            templates: PathBuf::from(DEFAULT_TEMPLATE_DIR),
        }
    }
}

/// Topics may be written as a list or a comma-separated string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TopicList {
    List(Vec<String>),
    Csv(String),
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    topics: Option<TopicList>,
    n: Option<i64>,
    days: Option<i64>,
    outfile: Option<PathBuf>,
    level: Option<String>,
    templates: Option<PathBuf>,
}

impl DigestConfig {
    /// Set topics from a comma-separated list.
    pub fn with_topics(mut self, raw: &str) -> Self {
        self.topics = parse_topics(raw);
        self
    }

    /// Set the requested paper count.
    pub fn with_count(mut self, n: i64) -> Self {
        self.n = n;
        self
    }

    /// Set the look-back window.
    pub fn with_days(mut self, days: i64) -> Self {
        self.days = days;
        self
    }

    /// Set the reading level.
    pub fn with_level(mut self, level: ReadingLevel) -> Self {
        self.level = level;
        self
    }

    /// Read settings from a TOML file.
    pub fn load(path: &Path) -> DigestResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| DigestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text, path)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse settings from TOML text. `origin` is only used in error messages.
    pub fn from_toml(text: &str, origin: &Path) -> DigestResult<Self> {
        let file: ConfigFile = toml::from_str(text).map_err(|source| DigestError::Config {
            path: origin.to_path_buf(),
            source,
        })?;

        let defaults = Self::default();
        let topics = match file.topics {
            Some(TopicList::List(items)) => items
                .into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
            Some(TopicList::Csv(raw)) => parse_topics(&raw),
            None => Vec::new(),
        };

        Ok(Self {
            topics,
            n: file.n.unwrap_or(defaults.n),
            days: file.days.unwrap_or(defaults.days),
            outfile: file.outfile,
            level: file
                .level
                .as_deref()
                .map_or(defaults.level, ReadingLevel::parse_or_default),
            templates: file.templates.unwrap_or(defaults.templates),
        })
    }

    /// The request handed to the digest pipeline.
    pub fn request(&self) -> DigestRequest {
        DigestRequest {
            topics: topics_or_default(self.topics.clone()),
            n: self.n,
            days: self.days,
            level: self.level,
        }
    }
}
