use std::sync::Arc;

use async_trait::async_trait;
use sigla::{
    BookId, Citation, InMemoryVerseStore, Locale, LookupError, RejectReason, ResolverConfig, SiglaConfig,
    SiglaEngine, VerseResolver, VerseSource,
};

fn engine() -> SiglaEngine {
    SiglaEngine::default()
}

fn triples(citations: &[Citation]) -> Vec<(BookId, u32, u32, u32)> {
    citations
        .iter()
        .map(|c| {
            let r = c.reference;
            (r.book(), r.chapter(), r.verse_start(), r.verse_end())
        })
        .collect()
}

#[test]
fn test_polish_sigla_page() {
    let engine = engine();
    let text = "Plan spotkania: Mt 5,1-3; Åk 2,8-14; 1 Kor 13,1-3.";
    let extraction = engine.extract(text);
    assert_eq!(
        triples(&extraction.citations),
        vec![
            (BookId::Matthew, 5, 1, 3),
            (BookId::Luke, 2, 8, 14),
            (BookId::Corinthians1, 13, 1, 3),
        ]
    );
    let labels: Vec<String> = extraction
        .citations
        .iter()
        .map(|c| c.reference.label(engine.canon(), Locale::English))
        .collect();
    assert_eq!(labels, vec!["Matthew 5:1-3", "Luke 2:8-14", "1 Corinthians 13:1-3"]);
}

#[test]
fn test_range() {
    let extraction = engine().extract("Rdz 1:1-3");
    assert_eq!(triples(&extraction.citations), vec![(BookId::Genesis, 1, 1, 3)]);
}

#[test]
fn test_verse_list() {
    let extraction = engine().extract("Rdz 1:1,3");
    assert_eq!(
        triples(&extraction.citations),
        vec![(BookId::Genesis, 1, 1, 1), (BookId::Genesis, 1, 3, 3)]
    );
}

#[test]
fn test_bare_chapter_verse_inherits_book() {
    let extraction = engine().extract("Jn 3:16. Kontynuacja w 3:17");
    assert_eq!(
        triples(&extraction.citations),
        vec![(BookId::John, 3, 16, 16), (BookId::John, 3, 17, 17)]
    );
}

#[test]
fn test_bare_chapter_verse_does_not_cross_lines() {
    let extraction = engine().extract("Jn 3:16.\nKontynuacja w 3:17");
    assert_eq!(triples(&extraction.citations), vec![(BookId::John, 3, 16, 16)]);
}

#[test]
fn test_verse_range_in_single_chapter_book() {
    let engine = engine();
    assert_eq!(triples(&engine.extract("Jud 5-7").citations), vec![(BookId::Jude, 1, 5, 7)]);
    assert_eq!(triples(&engine.extract("Flm 10-12").citations), vec![(BookId::Philemon, 1, 10, 12)]);
    assert_eq!(triples(&engine.extract("Ab 1-4").citations), vec![(BookId::Obadiah, 1, 1, 4)]);
}

#[test]
fn test_chapter_range_cites_first_chapter() {
    assert_eq!(triples(&engine().extract("Ps 23-25").citations), vec![(BookId::Psalms, 23, 1, 6)]);
}

#[test]
fn test_range_over_three_chapters_keeps_middle_chapter() {
    let extraction = engine().extract("Mt 5,1-7,3");
    assert_eq!(
        triples(&extraction.citations),
        vec![
            (BookId::Matthew, 5, 1, 48),
            (BookId::Matthew, 6, 1, 34),
            (BookId::Matthew, 7, 1, 3),
        ]
    );
    assert!(extraction.rejected.is_empty());
}

#[test]
fn test_out_of_range_does_not_abort_page() {
    let extraction = engine().extract("Jn 3:999, potem Rdz 1:1");
    assert_eq!(triples(&extraction.citations), vec![(BookId::Genesis, 1, 1, 1)]);
    assert_eq!(extraction.rejected.len(), 1);
    assert_eq!(extraction.rejected[0].reason, RejectReason::VerseOutOfRange);
}

#[test]
fn test_ocr_spacing_is_normalized() {
    let engine = engine();
    let spaced = engine.extract("J n 3 : 16");
    let tight = engine.extract("Jn3:16");
    assert_eq!(spaced.citations.len(), 1);
    assert_eq!(tight.citations.len(), 1);
    assert_eq!(spaced.citations[0].reference, tight.citations[0].reference);
    assert_eq!(triples(&tight.citations), vec![(BookId::John, 3, 16, 16)]);
}

#[test]
fn test_ocr_digit_confusions() {
    let extraction = engine().extract("1 Kor l3,l-3");
    assert_eq!(triples(&extraction.citations), vec![(BookId::Corinthians1, 13, 1, 3)]);
}

#[test]
fn test_unknown_book_rejected() {
    let extraction = engine().extract("Xyz 3:16 i Mk 1,1");
    assert_eq!(triples(&extraction.citations), vec![(BookId::Mark, 1, 1, 1)]);
    assert_eq!(extraction.rejected[0].reason, RejectReason::UnknownBook);
}

#[test]
fn test_repeated_citation_collapse() {
    let text = "Jn 3:16 ... Jn 3:16";
    assert_eq!(engine().extract(text).citations.len(), 2);

    let mut config = SiglaConfig::default();
    config.dedupe.collapse_repeats = true;
    assert_eq!(SiglaEngine::new(config).extract(text).citations.len(), 1);
}

#[test]
fn test_output_spans_do_not_overlap() {
    let extraction = engine().extract("Mt 5,1-6,3; Jn 3:16,18; Ps 23");
    let spans: Vec<_> = extraction.citations.iter().map(|c| c.span).collect();
    for (i, a) in spans.iter().enumerate() {
        for b in &spans[i + 1..] {
            assert!(!a.overlaps(b), "{:?} overlaps {:?}", a, b);
        }
    }
    assert!(spans.windows(2).all(|w| w[0].start <= w[1].start));
}

fn verse_store() -> Arc<InMemoryVerseStore> {
    let mut store = InMemoryVerseStore::new();
    store.insert(BookId::John, 3, 16, "For God so loved the world");
    store.insert(BookId::Genesis, 1, 1, "In the beginning God created the heaven and the earth.");
    Arc::new(store)
}

#[tokio::test]
async fn test_process_keeps_missing_verses() {
    let engine = engine();
    let resolver = VerseResolver::new(verse_store(), &ResolverConfig::default());
    let page = engine.process("Jn 3:16; Rdz 1:1; Ap 22:21", &resolver).await;

    assert_eq!(page.citations.len(), 3);
    assert_eq!(page.citations[0].verse_text.as_deref(), Some("For God so loved the world"));
    assert!(page.citations[1].is_found());
    assert_eq!(page.citations[2].reference.book(), BookId::Revelation);
    assert_eq!(page.citations[2].verse_text, None);
    assert_eq!(page.citations[2].failure, None);
}

#[tokio::test]
async fn test_process_rejects_but_resolves_the_rest() {
    let engine = engine();
    let resolver = VerseResolver::new(verse_store(), &ResolverConfig::default());
    let page = engine.process("Jn 3:999 oraz Jn 3:16", &resolver).await;

    assert_eq!(page.rejected.len(), 1);
    assert_eq!(page.citations.len(), 1);
    assert!(page.citations[0].is_found());
}

struct DownService;

#[async_trait]
impl VerseSource for DownService {
    async fn get_verse(&self, _: BookId, _: u32, _: u32) -> Result<Option<String>, LookupError> {
        Err(LookupError::Unavailable("503 Service Unavailable".to_string()))
    }
}

#[tokio::test]
async fn test_service_failure_marks_citations() {
    let engine = engine();
    let resolver = VerseResolver::new(Arc::new(DownService), &ResolverConfig::default());
    let page = engine.process("Rdz 1:1-3 i Jn 3:16", &resolver).await;

    assert_eq!(page.citations.len(), 2);
    assert!(page
        .citations
        .iter()
        .all(|c| matches!(c.failure, Some(LookupError::Unavailable(_))) && c.verse_text.is_none()));
}
