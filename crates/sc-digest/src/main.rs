//! Command-line front end for the paper digest.

use std::io;
use std::path::PathBuf;
use std::process;

use chrono::Utc;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sc_digest::config::DEFAULT_TEMPLATE_DIR;
use sc_digest::query::parse_topics;
use sc_digest::{
    ArxivClient, DigestConfig, DigestError, DigestResult, FileSource, PaperSource, ReadingLevel,
    TemplateSet, build_digest,
};

#[derive(Parser)]
#[command(
    name = "digest",
    about = "Academic paper digest — fetch 1-3 recent arXiv papers by topic",
    version
)]
struct Cli {
    /// Comma-separated list of topics
    #[arg(long)]
    topics: Option<String>,

    /// Papers per digest (clamped to 1-3)
    #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
    n: i64,

    /// Look-back window in days
    #[arg(long, default_value_t = 30)]
    days: i64,

    /// Write the digest to this file instead of stdout
    #[arg(long)]
    outfile: Option<PathBuf>,

    /// Reading level for the guidance paragraph
    #[arg(long, value_enum, default_value_t = ReadingLevel::Intermediate)]
    level: ReadingLevel,

    /// TOML config file (overrides all other flags)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory with digest.md / paper.md template overrides
    #[arg(long, default_value = DEFAULT_TEMPLATE_DIR)]
    templates: PathBuf,

    /// Read the Atom feed from a file instead of querying arXiv
    #[arg(long, hide = true)]
    feed_file: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> DigestResult<()> {
    let config = match &cli.config {
        Some(path) => DigestConfig::load(path)?,
        None => DigestConfig {
            topics: parse_topics(cli.topics.as_deref().unwrap_or_default()),
            n: cli.n,
            days: cli.days,
            outfile: cli.outfile,
            level: cli.level,
            templates: cli.templates,
        },
    };

    let source: Box<dyn PaperSource> = match cli.feed_file {
        Some(path) => Box::new(FileSource::new(path)),
        None => Box::new(ArxivClient::new()?),
    };

    let templates = TemplateSet::resolve(&config.templates)?;
    let digest = build_digest(source.as_ref(), &config.request(), &templates, Utc::now())?;

    match &config.outfile {
        Some(path) => {
            std::fs::write(path, &digest.text).map_err(|source| DigestError::Io {
                path: path.clone(),
                source,
            })?;
            println!("Wrote digest to {}", path.display());
        }
        None => println!("{}", digest.text),
    }

    Ok(())
}
