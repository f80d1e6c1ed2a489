use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use sigla::{
    Extraction, InMemoryVerseStore, Locale, Rejection, ResolvedCitation, SiglaConfig, SiglaEngine, VerseResolver,
    extract_context,
};

/// Find biblical citations in OCR text and look up their verses.
#[derive(Parser, Debug)]
#[command(name = "sigla", version, about)]
struct Cli {
    /// OCR text files. Reads stdin when none are given.
    files: Vec<PathBuf>,

    /// JSON verse file: an array of {"book", "chapter", "verse", "text"}
    #[arg(long)]
    verses: Option<PathBuf>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Page language (pl or en); detected per page when omitted
    #[arg(long)]
    locale: Option<Locale>,

    /// Print one JSON object per page instead of text
    #[arg(long)]
    json: bool,

    /// Characters of context shown around each citation
    #[arg(long, default_value_t = 30)]
    context: usize,
}

struct Page {
    source: String,
    text: String,
}

#[derive(Serialize)]
struct PageReport<'a> {
    source: &'a str,
    locale: Option<Locale>,
    citations: Vec<CitationReport>,
    rejected: &'a [Rejection],
}

#[derive(Serialize)]
struct CitationReport {
    label: String,
    siglum: String,
    context: String,
    #[serde(flatten)]
    resolved: ResolvedCitation,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("sigla=info".parse()?))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SiglaConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => SiglaConfig::default(),
    };
    if cli.locale.is_some() {
        config.locale = cli.locale;
    }

    let resolver = match &cli.verses {
        Some(path) => {
            let store = InMemoryVerseStore::from_json_file(path)
                .with_context(|| format!("Failed to load verses {}", path.display()))?;
            Some(VerseResolver::new(Arc::new(store), &config.resolver))
        }
        None => None,
    };

    let engine = SiglaEngine::new(config);
    tracing::debug!("{}", engine.canon().stats());

    let pages = read_pages(&cli.files)?;
    let texts: Vec<&str> = pages.iter().map(|p| p.text.as_str()).collect();
    let extractions = engine.extract_batch(&texts);

    let runtime = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;

    for (page, extraction) in pages.iter().zip(extractions) {
        let rejected = extraction.rejected.clone();
        let locale = extraction.locale;
        let resolved = runtime.block_on(resolve(resolver.as_ref(), extraction));

        let citations = resolved
            .into_iter()
            .map(|resolved| CitationReport {
                label: resolved
                    .reference
                    .label(engine.canon(), locale.unwrap_or(Locale::English)),
                siglum: resolved.span.slice(&page.text).to_string(),
                context: extract_context(&page.text, resolved.span, cli.context),
                resolved,
            })
            .collect();
        let report = PageReport {
            source: &page.source,
            locale,
            citations,
            rejected: &rejected,
        };

        if cli.json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            print_text(&report, resolver.is_some());
        }
    }

    Ok(())
}

fn read_pages(files: &[PathBuf]) -> Result<Vec<Page>> {
    if files.is_empty() {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text).context("Failed to read stdin")?;
        return Ok(vec![Page {
            source: "-".to_string(),
            text,
        }]);
    }
    files
        .iter()
        .map(|path| {
            let text =
                std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
            Ok(Page {
                source: path.display().to_string(),
                text,
            })
        })
        .collect()
}

/// Attach verse text when a verse store is available.
async fn resolve(resolver: Option<&VerseResolver>, extraction: Extraction) -> Vec<ResolvedCitation> {
    match resolver {
        Some(resolver) => resolver.resolve_page(extraction.citations).await,
        None => extraction
            .citations
            .into_iter()
            .map(|c| ResolvedCitation {
                reference: c.reference,
                span: c.span,
                verse_text: None,
                failure: None,
            })
            .collect(),
    }
}

fn print_text(report: &PageReport<'_>, with_verses: bool) {
    for citation in &report.citations {
        let span = citation.resolved.span;
        println!(
            "{}:{}-{}\t{}\t{}",
            report.source, span.start, span.end, citation.siglum, citation.label
        );
        if !with_verses {
            continue;
        }
        match (&citation.resolved.verse_text, &citation.resolved.failure) {
            (Some(text), _) => println!("\t{}", text),
            (None, Some(e)) => println!("\t[lookup failed: {}]", e),
            (None, None) => println!("\t[not found]"),
        }
    }
}
