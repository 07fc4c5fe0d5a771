//! Reading levels and their guidance paragraphs.

use std::fmt;

/// How deeply the reader wants to engage with each paper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReadingLevel {
    /// New to the field.
    Beginner,
    /// Comfortable with the basics.
    #[default]
    Intermediate,
    /// Working researcher.
    Expert,
}

impl ReadingLevel {
    /// Parse a level name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Some(Self::Beginner),
            "intermediate" => Some(Self::Intermediate),
            "expert" => Some(Self::Expert),
            _ => None,
        }
    }

    /// Parse a level name, falling back to [`ReadingLevel::Intermediate`].
    pub fn parse_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            tracing::warn!(level = s, "unknown reading level, using intermediate");
            Self::default()
        })
    }

    /// Static reading advice for this level.
    pub fn guidance(self) -> &'static str {
        match self {
            Self::Beginner => {
                "Start with the abstract. Skim intro & conclusion; skip proofs/appendices first pass."
            }
            Self::Intermediate => {
                "Read abstract → intro → figures → discussion. Note unfamiliar terms for later."
            }
            Self::Expert => {
                "Skim contributions and methods. Jump to experiments/limitations; check references for gaps."
            }
        }
    }
}

impl fmt::Display for ReadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Beginner => write!(f, "beginner"),
            Self::Intermediate => write!(f, "intermediate"),
            Self::Expert => write!(f, "expert"),
        }
    }
}
