//! Paper sources: the arXiv Atom API and local Atom files.
//!
//! Both sources hand back papers in feed order. arXiv is queried sorted by
//! submission date, newest first.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{DigestError, DigestResult};
use crate::paper::Paper;

/// arXiv query endpoint.
pub const ARXIV_API: &str = "https://export.arxiv.org/api/query";

/// Number of candidates requested before filtering and ranking.
pub const MAX_CANDIDATES: usize = 50;

/// Anything that can return papers for a search query.
pub trait PaperSource {
    /// Fetch up to `max_results` papers matching `query`, newest first.
    fn fetch(&self, query: &str, max_results: usize) -> DigestResult<Vec<Paper>>;
}

/// Blocking client for the arXiv API.
pub struct ArxivClient {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl ArxivClient {
    /// Create a client for the public arXiv endpoint.
    pub fn new() -> DigestResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("sc-digest/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            endpoint: ARXIV_API.to_string(),
        })
    }

    /// Point the client at a different endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

impl PaperSource for ArxivClient {
    fn fetch(&self, query: &str, max_results: usize) -> DigestResult<Vec<Paper>> {
        let max_results = max_results.to_string();
        tracing::info!(endpoint = %self.endpoint, query, "querying arXiv");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("search_query", query),
                ("sortBy", "submittedDate"),
                ("sortOrder", "descending"),
                ("start", "0"),
                ("max_results", max_results.as_str()),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(DigestError::Status(status.as_u16()));
        }

        let body = response.text()?;
        let papers = parse_atom(&body, Utc::now())?;
        tracing::info!(count = papers.len(), "received papers");
        Ok(papers)
    }
}

/// Reads an Atom document from disk instead of the network.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source backed by the Atom file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PaperSource for FileSource {
    fn fetch(&self, query: &str, max_results: usize) -> DigestResult<Vec<Paper>> {
        tracing::info!(path = %self.path.display(), query, "reading feed file");
        let xml = std::fs::read_to_string(&self.path).map_err(|source| DigestError::Io {
            path: self.path.clone(),
            source,
        })?;
        let mut papers = parse_atom(&xml, Utc::now())?;
        papers.truncate(max_results);
        Ok(papers)
    }
}

/// Fields collected for one `<entry>` while parsing.
#[derive(Default)]
struct EntryFields {
    title: String,
    summary: String,
    published: Option<String>,
    updated: Option<String>,
    id: String,
    authors: Vec<String>,
    alternate: Option<String>,
    pdf: Option<String>,
    category: String,
}

impl EntryFields {
    fn read_attributes(&mut self, element: &str, start: &BytesStart<'_>) -> DigestResult<()> {
        match element {
            "link" => {
                let (mut href, mut rel, mut kind, mut title) = (None, None, None, None);
                for attr in start.attributes() {
                    let attr = attr.map_err(quick_xml::Error::from)?;
                    let value = attr.unescape_value()?.into_owned();
                    match attr.key.local_name().as_ref() {
                        b"href" => href = Some(value),
                        b"rel" => rel = Some(value),
                        b"type" => kind = Some(value),
                        b"title" => title = Some(value),
                        _ => {}
                    }
                }
                let Some(href) = href else {
                    return Ok(());
                };
                if kind.as_deref() == Some("application/pdf") || title.as_deref() == Some("pdf") {
                    self.pdf.get_or_insert(href);
                } else if rel.as_deref().is_none_or(|r| r == "alternate") {
                    self.alternate.get_or_insert(href);
                }
            }
            "primary_category" => {
                for attr in start.attributes() {
                    let attr = attr.map_err(quick_xml::Error::from)?;
                    if attr.key.local_name().as_ref() == b"term" {
                        self.category = attr.unescape_value()?.into_owned();
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn into_paper(self, now: DateTime<Utc>) -> Paper {
        let published = self
            .published
            .as_deref()
            .and_then(parse_timestamp)
            .or_else(|| self.updated.as_deref().and_then(parse_timestamp))
            .unwrap_or_else(|| {
                tracing::warn!(id = %self.id, "entry has no usable date, treating as new");
                now
            });

        Paper {
            title: collapse_whitespace(&self.title),
            summary: self.summary.trim().to_string(),
            published,
            authors: self.authors,
            link: self.alternate.unwrap_or(self.id),
            pdf: self.pdf,
            primary_category: self.category,
            score: 0.0,
            why_it_matters: String::new(),
        }
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(ts) => Some(ts.with_timezone(&Utc)),
        Err(e) => {
            tracing::warn!(raw, "unparseable timestamp: {e}");
            None
        }
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn local_name(name: &[u8]) -> String {
    String::from_utf8_lossy(name).into_owned()
}

/// Parse an Atom document into papers, in document order.
///
/// Entries without a `<published>` date fall back to `<updated>`, then to `now`.
pub fn parse_atom(xml: &str, now: DateTime<Utc>) -> DigestResult<Vec<Paper>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut papers = Vec::new();
    let mut current: Option<EntryFields> = None;
    let mut open: Vec<String> = Vec::new();
    let mut text = String::new();
    let mut saw_feed = false;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                let name = local_name(start.local_name().as_ref());
                match name.as_str() {
                    "feed" => saw_feed = true,
                    "entry" => current = Some(EntryFields::default()),
                    _ => {
                        if let Some(entry) = current.as_mut() {
                            entry.read_attributes(&name, &start)?;
                        }
                    }
                }
                open.push(name);
                text.clear();
            }
            Event::Empty(start) => {
                let name = local_name(start.local_name().as_ref());
                if let Some(entry) = current.as_mut() {
                    entry.read_attributes(&name, &start)?;
                }
            }
            Event::Text(t) => text.push_str(&t.unescape()?),
            Event::CData(c) => text.push_str(&String::from_utf8_lossy(&c.into_inner())),
            Event::End(end) => {
                let name = local_name(end.local_name().as_ref());
                open.pop();

                if name == "entry" {
                    if let Some(entry) = current.take() {
                        papers.push(entry.into_paper(now));
                    }
                } else if let Some(entry) = current.as_mut() {
                    let value = std::mem::take(&mut text);
                    match (open.last().map(String::as_str), name.as_str()) {
                        (Some("entry"), "title") => entry.title = value,
                        (Some("entry"), "summary") => entry.summary = value,
                        (Some("entry"), "published") => entry.published = Some(value),
                        (Some("entry"), "updated") => entry.updated = Some(value),
                        (Some("entry"), "id") => entry.id = value.trim().to_string(),
                        (Some("author"), "name") => entry.authors.push(value.trim().to_string()),
                        _ => {}
                    }
                }
                text.clear();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_feed {
        return Err(DigestError::Feed("document is not an Atom feed".into()));
    }
    Ok(papers)
}
