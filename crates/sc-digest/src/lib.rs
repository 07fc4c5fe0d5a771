//! Academic paper digest.
//!
//! Queries the arXiv Atom feed for recent papers on a set of topics, ranks
//! them by a naive recency + keyword heuristic, and renders the best few
//! into a Markdown digest with reading guidance.

pub mod blurb;
pub mod config;
pub mod digest;
pub mod error;
pub mod feed;
pub mod level;
pub mod paper;
pub mod query;
pub mod rank;
pub mod template;

pub use config::DigestConfig;
pub use digest::{Digest, DigestRequest, build_digest, render_digest};
pub use error::{DigestError, DigestResult};
pub use feed::{ArxivClient, FileSource, PaperSource};
pub use level::ReadingLevel;
pub use paper::Paper;
pub use template::{Template, TemplateSet};
