//! Python bindings for the web front end.

use std::sync::OnceLock;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::{Citation, Extraction, Locale, SiglaEngine, extract_context};

/// Characters of surrounding text returned with each siglum.
const CONTEXT_CHARS: usize = 40;

static ENGINE: OnceLock<SiglaEngine> = OnceLock::new();

fn engine() -> &'static SiglaEngine {
    ENGINE.get_or_init(SiglaEngine::default)
}

fn parse_locale(locale: Option<String>) -> PyResult<Option<Locale>> {
    locale
        .map(|code| code.parse::<Locale>().map_err(PyValueError::new_err))
        .transpose()
}

/// One citation found in a page
#[pyclass]
#[derive(Clone)]
struct SiglumInfo {
    /// Text as it appears on the page
    #[pyo3(get)]
    siglum: String,
    /// Book identifier, e.g. `SAMUEL_1`
    #[pyo3(get)]
    book: String,
    #[pyo3(get)]
    chapter: u32,
    #[pyo3(get)]
    verse_start: u32,
    #[pyo3(get)]
    verse_end: u32,
    /// `Matthew 5:1-3`
    #[pyo3(get)]
    label: String,
    /// Label in the page's own convention, `Mt 5,1-3` for Polish
    #[pyo3(get)]
    local_label: String,
    #[pyo3(get)]
    start: usize,
    #[pyo3(get)]
    end: usize,
    #[pyo3(get)]
    context: String,
}

impl SiglumInfo {
    fn new(engine: &SiglaEngine, text: &str, locale: Locale, citation: &Citation) -> Self {
        let reference = citation.reference;
        Self {
            siglum: citation.span.slice(text).to_string(),
            book: serde_json::to_value(reference.book())
                .ok()
                .and_then(|v| v.as_str().map(str::to_string))
                .unwrap_or_default(),
            chapter: reference.chapter(),
            verse_start: reference.verse_start(),
            verse_end: reference.verse_end(),
            label: reference.label(engine.canon(), Locale::English),
            local_label: reference.label(engine.canon(), locale),
            start: citation.span.start,
            end: citation.span.end,
            context: extract_context(text, citation.span, CONTEXT_CHARS),
        }
    }
}

#[pymethods]
impl SiglumInfo {
    fn __repr__(&self) -> String {
        format!("SiglumInfo({:?} -> {})", self.siglum, self.label)
    }
}

fn to_info(engine: &SiglaEngine, text: &str, extraction: &Extraction) -> Vec<SiglumInfo> {
    let locale = extraction.locale.unwrap_or(Locale::Polish);
    extraction
        .citations
        .iter()
        .map(|c| SiglumInfo::new(engine, text, locale, c))
        .collect()
}

/// Find the sigla of one OCR page. `locale` ("pl" or "en") overrides detection.
#[pyfunction]
#[pyo3(signature = (text, locale=None))]
fn find_sigla(text: String, locale: Option<String>) -> PyResult<Vec<SiglumInfo>> {
    let extraction = match parse_locale(locale)? {
        Some(locale) => engine().extract_with_locale(&text, Some(locale)),
        None => engine().extract(&text),
    };
    Ok(to_info(engine(), &text, &extraction))
}

/// Find the sigla of many pages in parallel
#[pyfunction]
fn find_sigla_batch(texts: Vec<String>) -> PyResult<Vec<Vec<SiglumInfo>>> {
    let engine = engine();
    let extractions = engine.extract_batch(&texts);
    Ok(texts
        .iter()
        .zip(&extractions)
        .map(|(text, extraction)| to_info(engine, text, extraction))
        .collect())
}

/// Canonical English title for a book spelling, or None if it is not a book
#[pyfunction]
#[pyo3(signature = (spelling, locale=None))]
fn normalize_book(spelling: String, locale: Option<String>) -> PyResult<Option<String>> {
    let canon = engine().canon();
    let book = canon.lookup_book(&spelling, parse_locale(locale)?);
    Ok(book.map(|book| canon.title(book, Locale::English)))
}

#[pymodule]
fn sigla(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(find_sigla, m)?)?;
    m.add_function(wrap_pyfunction!(find_sigla_batch, m)?)?;
    m.add_function(wrap_pyfunction!(normalize_book, m)?)?;
    m.add_class::<SiglumInfo>()?;
    Ok(())
}
