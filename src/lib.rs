//! Biblical sigla extraction from OCR text.
//!
//! A page goes through [`tokenizer::tokenize`], [`matcher::match_citations`],
//! [`reference::validate`] and [`dedupe::dedupe`]; [`SiglaEngine`] runs those
//! steps and hands the result to a [`resolver::VerseResolver`] for verse text.

pub mod canon;
pub mod config;
pub mod dedupe;
pub mod error;
pub mod matcher;
pub mod reference;
pub mod resolver;
pub mod store;
pub mod tokenizer;

#[cfg(feature = "python")]
mod python;

use std::sync::Arc;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

pub use canon::{BookId, Canon, Locale};
pub use config::{DedupeConfig, ResolverConfig, SiglaConfig};
pub use error::{LookupError, SiglaError};
pub use matcher::CandidateReference;
pub use reference::{Reference, RejectReason};
pub use resolver::{ResolvedCitation, VerseLookupResult, VerseResolver, VerseSource};
pub use store::InMemoryVerseStore;

/// Half-open byte range into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Span from the start of `self` to the end of `other`.
    pub fn to(self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// Number of bytes both spans cover.
    pub fn overlap(&self, other: &Span) -> usize {
        self.end.min(other.end).saturating_sub(self.start.max(other.start))
    }

    pub fn overlaps(&self, other: &Span) -> bool {
        self.overlap(other) > 0
    }

    /// The spanned text, or `""` if the span does not fit `text`.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        text.get(self.start..self.end).unwrap_or("")
    }
}

/// A validated reference located in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Citation {
    pub reference: Reference,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub candidate: CandidateReference,
    pub reason: RejectReason,
}

/// Citations found on one page, before verse lookup.
#[derive(Debug, Clone, Serialize)]
pub struct Extraction {
    pub citations: Vec<Citation>,
    pub rejected: Vec<Rejection>,
    /// Locale used for book lookups, if any.
    pub locale: Option<Locale>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResolvedPage {
    pub citations: Vec<ResolvedCitation>,
    pub rejected: Vec<Rejection>,
    pub locale: Option<Locale>,
}

/// Runs the extraction pipeline. Cheap to clone and safe to share between threads.
#[derive(Debug, Clone)]
pub struct SiglaEngine {
    canon: Arc<Canon>,
    config: SiglaConfig,
}

impl SiglaEngine {
    pub fn new(config: SiglaConfig) -> Self {
        Self::with_canon(Arc::new(Canon::embedded()), config)
    }

    pub fn with_canon(canon: Arc<Canon>, config: SiglaConfig) -> Self {
        Self { canon, config }
    }

    pub fn canon(&self) -> &Canon {
        &self.canon
    }

    pub fn config(&self) -> &SiglaConfig {
        &self.config
    }

    /// Find, validate and deduplicate the citations of one page.
    pub fn extract(&self, text: &str) -> Extraction {
        let locale = self.config.locale.or_else(|| canon::detect_locale(text));
        self.extract_with_locale(text, locale)
    }

    /// [`SiglaEngine::extract`] with the locale hint given by the caller.
    pub fn extract_with_locale(&self, text: &str, locale: Option<Locale>) -> Extraction {
        let candidates = matcher::match_citations(tokenizer::tokenize(&self.canon, text, locale));

        let mut citations = Vec::with_capacity(candidates.len());
        let mut rejected = Vec::new();
        for candidate in candidates {
            match reference::validate(&self.canon, &candidate) {
                Ok(reference) => citations.push(Citation {
                    reference,
                    span: candidate.span,
                }),
                Err(reason) => {
                    debug!(
                        siglum = candidate.span.slice(text),
                        start = candidate.span.start,
                        %reason,
                        "Rejected citation"
                    );
                    rejected.push(Rejection { candidate, reason });
                }
            }
        }

        let found = citations.len();
        let citations = dedupe::dedupe(citations, &self.config.dedupe);
        info!(
            locale = ?locale,
            citations = citations.len(),
            duplicates = found - citations.len(),
            rejected = rejected.len(),
            "Extracted sigla"
        );

        Extraction {
            citations,
            rejected,
            locale,
        }
    }

    /// [`SiglaEngine::extract`] over many pages in parallel. Output order matches input.
    pub fn extract_batch<S: AsRef<str> + Sync>(&self, pages: &[S]) -> Vec<Extraction> {
        pages.par_iter().map(|page| self.extract(page.as_ref())).collect()
    }

    /// Extract a page and look up the text of every citation.
    pub async fn process(&self, text: &str, resolver: &VerseResolver) -> ResolvedPage {
        let Extraction {
            citations,
            rejected,
            locale,
        } = self.extract(text);
        let citations = resolver.resolve_page(citations).await;
        ResolvedPage {
            citations,
            rejected,
            locale,
        }
    }
}

impl Default for SiglaEngine {
    fn default() -> Self {
        Self::new(SiglaConfig::default())
    }
}

/// Text around a span, widened to whole ASCII words and with whitespace collapsed.
pub fn extract_context(text: &str, span: Span, context_chars: usize) -> String {
    let text_len = text.len();
    let bytes = text.as_bytes();

    let mut start = span.start.min(text_len).saturating_sub(context_chars);
    while start < text_len && !text.is_char_boundary(start) {
        start += 1;
    }
    while start > 0 && bytes[start - 1].is_ascii_alphanumeric() {
        start -= 1;
    }

    let mut end = span.end.saturating_add(context_chars).min(text_len);
    while end < text_len && !text.is_char_boundary(end) {
        end += 1;
    }
    while end < text_len && bytes[end].is_ascii_alphanumeric() {
        end += 1;
    }

    if start >= end {
        return String::new();
    }

    let mut context = String::new();
    if start > 0 {
        context.push_str("...");
    }
    context.push_str(&text[start..end]);
    if end < text_len {
        context.push_str("...");
    }
    context.split_whitespace().collect::<Vec<_>>().join(" ")
}
