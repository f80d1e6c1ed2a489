//! Removes duplicate and conflicting citations found on one page.

use std::cmp::Reverse;

use crate::config::DedupeConfig;
use crate::{Citation, Span};

/// Deduplicate citations, returning them ordered by span start.
///
/// Citations of the same reference whose spans overlap by more than
/// `min_overlap` (as a fraction of the shorter span) are duplicates; the
/// earlier one stays. Overlapping citations of different references conflict.
/// Conflicts are settled longest span first, ties by start, so a dropped
/// citation never evicts anything. Running this twice changes nothing the
/// second time.
pub fn dedupe(mut citations: Vec<Citation>, config: &DedupeConfig) -> Vec<Citation> {
    citations.sort_by_key(|c| c.span.start);

    let mut unique: Vec<Citation> = Vec::with_capacity(citations.len());
    for citation in citations {
        if config.collapse_repeats && unique.iter().any(|k| k.reference == citation.reference) {
            continue;
        }
        if unique.iter().any(|k| {
            k.reference == citation.reference && overlap_fraction(k.span, citation.span) > config.min_overlap
        }) {
            continue;
        }
        unique.push(citation);
    }

    unique.sort_by_key(|c| (Reverse(c.span.len()), c.span.start));
    let mut kept: Vec<Citation> = Vec::with_capacity(unique.len());
    for citation in unique {
        if kept
            .iter()
            .any(|k| k.reference != citation.reference && k.span.overlaps(&citation.span))
        {
            continue;
        }
        kept.push(citation);
    }
    kept.sort_by_key(|c| c.span.start);
    kept
}

/// Overlap length divided by the length of the shorter span.
fn overlap_fraction(a: Span, b: Span) -> f64 {
    let shorter = a.len().min(b.len());
    if shorter == 0 {
        return 0.0;
    }
    a.overlap(&b) as f64 / shorter as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canon::{BookId, Canon};
    use crate::reference::Reference;
    use proptest::prelude::*;

    fn cite(canon: &Canon, chapter: u32, verse: u32, start: usize, end: usize) -> Citation {
        Citation {
            reference: Reference::new(canon, BookId::John, chapter, verse, verse).unwrap(),
            span: Span::new(start, end),
        }
    }

    #[test]
    fn test_same_reference_overlap_is_dropped() {
        let canon = Canon::embedded();
        let out = dedupe(
            vec![cite(&canon, 3, 16, 0, 7), cite(&canon, 3, 16, 3, 7)],
            &DedupeConfig::default(),
        );
        assert_eq!(out, vec![cite(&canon, 3, 16, 0, 7)]);
    }

    #[test]
    fn test_disjoint_repeats_are_kept() {
        let canon = Canon::embedded();
        let input = vec![cite(&canon, 3, 16, 0, 7), cite(&canon, 3, 16, 20, 27)];
        assert_eq!(dedupe(input.clone(), &DedupeConfig::default()), input);
    }

    #[test]
    fn test_collapse_repeats() {
        let canon = Canon::embedded();
        let config = DedupeConfig {
            collapse_repeats: true,
            ..DedupeConfig::default()
        };
        let out = dedupe(
            vec![cite(&canon, 3, 16, 20, 27), cite(&canon, 3, 16, 0, 7)],
            &config,
        );
        assert_eq!(out, vec![cite(&canon, 3, 16, 0, 7)]);
    }

    #[test]
    fn test_conflict_longer_span_wins() {
        let canon = Canon::embedded();
        let out = dedupe(
            vec![cite(&canon, 3, 1, 0, 4), cite(&canon, 3, 16, 2, 10)],
            &DedupeConfig::default(),
        );
        assert_eq!(out, vec![cite(&canon, 3, 16, 2, 10)]);

        let out = dedupe(
            vec![cite(&canon, 3, 16, 0, 10), cite(&canon, 3, 1, 6, 8)],
            &DedupeConfig::default(),
        );
        assert_eq!(out, vec![cite(&canon, 3, 16, 0, 10)]);
    }

    #[test]
    fn test_conflict_tie_keeps_earlier() {
        let canon = Canon::embedded();
        let out = dedupe(
            vec![cite(&canon, 3, 1, 0, 4), cite(&canon, 3, 16, 2, 6)],
            &DedupeConfig::default(),
        );
        assert_eq!(out, vec![cite(&canon, 3, 1, 0, 4)]);
    }

    #[test]
    fn test_dropped_citation_does_not_evict() {
        let canon = Canon::embedded();
        // 0..10 loses to 8..20, so 5..7 no longer conflicts with anything.
        let out = dedupe(
            vec![
                cite(&canon, 3, 1, 0, 10),
                cite(&canon, 3, 2, 5, 7),
                cite(&canon, 3, 3, 8, 20),
            ],
            &DedupeConfig::default(),
        );
        assert_eq!(out, vec![cite(&canon, 3, 2, 5, 7), cite(&canon, 3, 3, 8, 20)]);
    }

    #[test]
    fn test_min_overlap_threshold() {
        let canon = Canon::embedded();
        let config = DedupeConfig {
            min_overlap: 0.5,
            ..DedupeConfig::default()
        };
        // Overlap of 1 over a shorter span of 4.
        let input = vec![cite(&canon, 3, 16, 0, 4), cite(&canon, 3, 16, 3, 10)];
        assert_eq!(dedupe(input.clone(), &config), input);
        // Overlap of 3 over 4.
        let out = dedupe(
            vec![cite(&canon, 3, 16, 0, 4), cite(&canon, 3, 16, 1, 10)],
            &config,
        );
        assert_eq!(out, vec![cite(&canon, 3, 16, 0, 4)]);
    }

    #[test]
    fn test_output_sorted_by_start() {
        let canon = Canon::embedded();
        let out = dedupe(
            vec![cite(&canon, 3, 17, 30, 35), cite(&canon, 3, 16, 0, 7)],
            &DedupeConfig::default(),
        );
        assert_eq!(out[0].span.start, 0);
        assert_eq!(out[1].span.start, 30);
    }

    proptest! {
        #[test]
        fn prop_dedupe_is_idempotent(
            raw in proptest::collection::vec((1u32..4, 0usize..40, 1usize..12), 0..12),
            min_overlap in prop_oneof![Just(0.0), Just(0.5)],
            collapse_repeats in any::<bool>(),
        ) {
            let canon = Canon::embedded();
            let config = DedupeConfig { min_overlap, collapse_repeats };
            let citations: Vec<Citation> = raw
                .into_iter()
                .map(|(verse, start, len)| cite(&canon, 3, verse, start, start + len))
                .collect();
            let once = dedupe(citations, &config);
            let twice = dedupe(once.clone(), &config);
            prop_assert_eq!(once, twice);
        }
    }
}
