//! Verse text lookup against an external verse service.
//!
//! Lookups for one page run concurrently, bounded by a semaphore, and each
//! call has its own timeout. A timeout or a missing verse is `NotFound`; only
//! outright service failures are reported as errors, and those are attached
//! to the citation instead of failing the page.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::canon::BookId;
use crate::config::ResolverConfig;
use crate::error::LookupError;
use crate::reference::Reference;
use crate::{Citation, Span};

/// A source of verse text, typically a remote Bible API or a database.
#[async_trait]
pub trait VerseSource: Send + Sync {
    /// Text of one verse, `None` if the translation has no such verse.
    async fn get_verse(&self, book: BookId, chapter: u32, verse: u32) -> Result<Option<String>, LookupError>;

    /// Text of a whole reference. Ranges are numbered per verse
    /// (`16. text 17. text`); verses the source lacks are skipped.
    async fn get_range(&self, reference: &Reference) -> Result<Option<String>, LookupError> {
        let (book, chapter) = (reference.book(), reference.chapter());
        if !reference.is_range() {
            return self.get_verse(book, chapter, reference.verse_start()).await;
        }
        let mut parts = Vec::new();
        for verse in reference.verses() {
            if let Some(text) = self.get_verse(book, chapter, verse).await? {
                parts.push(format!("{}. {}", verse, text));
            }
        }
        Ok((!parts.is_empty()).then(|| parts.join(" ")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum VerseLookupResult {
    Found(String),
    NotFound,
}

/// Final output unit: a citation and whatever text was found for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedCitation {
    pub reference: Reference,
    pub span: Span,
    /// `None` when the verse is absent or the lookup failed.
    pub verse_text: Option<String>,
    pub failure: Option<LookupError>,
}

impl ResolvedCitation {
    pub fn is_found(&self) -> bool {
        self.verse_text.is_some()
    }
}

#[derive(Clone)]
pub struct VerseResolver {
    source: Arc<dyn VerseSource>,
    permits: Arc<Semaphore>,
    timeout: Duration,
}

impl VerseResolver {
    pub fn new(source: Arc<dyn VerseSource>, config: &ResolverConfig) -> Self {
        Self {
            source,
            permits: Arc::new(Semaphore::new(config.max_concurrency.max(1))),
            timeout: Duration::from_millis(config.timeout_ms),
        }
    }

    /// Look up one reference.
    pub async fn resolve(&self, reference: &Reference) -> Result<VerseLookupResult, LookupError> {
        match timeout(self.timeout, self.source.get_range(reference)).await {
            Ok(Ok(Some(text))) => Ok(VerseLookupResult::Found(text)),
            Ok(Ok(None)) => {
                debug!(?reference, "Verse not found");
                Ok(VerseLookupResult::NotFound)
            }
            Ok(Err(e)) => Err(e),
            Err(_) => {
                warn!(?reference, timeout_ms = self.timeout.as_millis() as u64, "Verse lookup timed out");
                Ok(VerseLookupResult::NotFound)
            }
        }
    }

    /// Look up every citation of a page. Output order matches input order and
    /// no citation is dropped.
    pub async fn resolve_page(&self, citations: Vec<Citation>) -> Vec<ResolvedCitation> {
        let mut tasks = JoinSet::new();
        for (index, citation) in citations.iter().enumerate() {
            let resolver = self.clone();
            let reference = citation.reference;
            tasks.spawn(async move {
                // The semaphore is never closed.
                let _permit = resolver.permits.clone().acquire_owned().await.ok();
                (index, resolver.resolve(&reference).await)
            });
        }

        let mut outcomes: Vec<Option<Result<VerseLookupResult, LookupError>>> = vec![None; citations.len()];
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, outcome)) => outcomes[index] = Some(outcome),
                Err(e) => warn!(error = %e, "Verse lookup task failed"),
            }
        }

        citations
            .into_iter()
            .zip(outcomes)
            .map(|(citation, outcome)| {
                let outcome = outcome.unwrap_or_else(|| Err(LookupError::Unavailable("lookup task failed".to_string())));
                let (verse_text, failure) = match outcome {
                    Ok(VerseLookupResult::Found(text)) => (Some(text), None),
                    Ok(VerseLookupResult::NotFound) => (None, None),
                    Err(e) => {
                        warn!(reference = ?citation.reference, error = %e, "Verse lookup failed");
                        (None, Some(e))
                    }
                };
                ResolvedCitation {
                    reference: citation.reference,
                    span: citation.span,
                    verse_text,
                    failure,
                }
            })
            .collect()
    }
}
