//! Citation grammar: turns the token stream into candidate references.
//!
//! The matcher is a finite-state machine that consumes one token per step and
//! peeks at most two tokens ahead. All context (the last book and separator
//! style seen) is scoped to one line of text.
//!
//! Ambiguity rules, in the order they apply:
//!
//! * `Book N` opens a citation with chapter `N`. A separator and a number
//!   give the verse; the separator fixes the citation's style (`:` or `,`).
//!   A second bare number (`Jn 3 16`) is also read as the verse.
//! * `V-E` is a verse range. When `E` is followed by the style's separator and
//!   a number and `E` is past the current chapter, it is a cross-chapter range,
//!   split into `C:V` to the end of the chapter and `E:1-W`, with every
//!   chapter in between cited whole.
//! * After a verse, `,` or `.` continues a verse list, unless the next number
//!   is followed by the style's separator, which starts a new chapter.
//! * After `;`, `N sep M` is a new chapter of the same book; a lone `N` is a
//!   verse of the current chapter, or a chapter if the citation had no verse.
//! * A bare `N:M` outside any citation belongs to the nearest book earlier on
//!   the same line (`N,M` only if that citation used `,`). Without such a book
//!   it is discarded.
//! * `Book N-M` keeps both numbers in one candidate with no start verse. For
//!   single-chapter books that is a verse range (`Jud 5-7`); elsewhere it is a
//!   chapter range, of which only the first chapter is cited.

use std::collections::VecDeque;

use serde::Serialize;
use tracing::debug;

use crate::Span;
use crate::tokenizer::{BookRef, RawToken, TokenKind};

/// No book has more chapters; longer cross-chapter ranges are OCR noise.
const MAX_CHAPTERS: u32 = 150;

/// An unvalidated citation. Chapter and verse numbers may be out of range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateReference {
    pub book: BookRef,
    /// `None` when the chapter number was lost (`Jn :16`).
    pub chapter: Option<u32>,
    /// `None` for a whole-chapter citation (`Ps 23`).
    pub verse_start: Option<u32>,
    /// Defaults to `verse_start`. Without `verse_start` it is the end of
    /// a `Book N-M` range.
    pub verse_end: Option<u32>,
    /// First half of a cross-chapter range: runs to the last verse of the chapter.
    pub to_chapter_end: bool,
    pub span: Span,
}

#[derive(Debug, Clone)]
struct Cite {
    book: BookRef,
    chapter: Option<u32>,
    style: char,
}

impl Cite {
    fn with_chapter(&self, chapter: u32) -> Cite {
        Cite {
            chapter: Some(chapter),
            ..self.clone()
        }
    }
}

#[derive(Debug)]
enum State {
    /// Outside any citation, waiting for a book.
    ExpectBook,
    /// `Jn`
    ExpectChapter { book: BookRef, start: usize },
    /// `Jn 3`. `from_start` marks the second half of a cross-chapter range.
    ExpectSeparator {
        cite: Cite,
        span: Span,
        from_start: bool,
    },
    /// `Jud 5-`, `Ps 23-`
    ExpectNumberRangeEnd { cite: Cite, span: Span },
    /// `Jn 3:`
    ExpectVerse {
        cite: Cite,
        span: Span,
        from_start: bool,
    },
    /// `Jn 3:16`
    ExpectRangeSeparator { cite: Cite, verse: u32, span: Span },
    /// `Jn 3:16-`
    ExpectVerseEnd { cite: Cite, verse: u32, span: Span },
    /// `Jn 3:16,` with a number ahead
    ExpectListItem { cite: Cite },
    /// `Jn 3:16-18`: a completed range that a list may continue.
    AfterRange { cite: Cite },
    /// `Jn 3:16;`
    AfterSemicolon { cite: Cite, verse_level: bool },
}

/// Run the matcher over a token stream.
pub fn match_citations<'a>(tokens: impl IntoIterator<Item = RawToken<'a>>) -> Vec<CandidateReference> {
    Matcher {
        tokens: tokens.into_iter(),
        buffer: VecDeque::new(),
        line: 0,
        last_book: None,
        last_style: None,
        out: Vec::new(),
    }
    .run()
}

struct Matcher<'a, I: Iterator<Item = RawToken<'a>>> {
    tokens: I,
    buffer: VecDeque<RawToken<'a>>,
    line: usize,
    /// Most recent book cited on the current line.
    last_book: Option<BookRef>,
    last_style: Option<char>,
    out: Vec<CandidateReference>,
}

impl<'a, I: Iterator<Item = RawToken<'a>>> Matcher<'a, I> {
    fn run(mut self) -> Vec<CandidateReference> {
        let mut state = State::ExpectBook;
        while let Some(token) = self.next_token() {
            if token.line != self.line {
                self.finish(state);
                state = State::ExpectBook;
                self.line = token.line;
                self.last_book = None;
                self.last_style = None;
            }
            state = self.step(state, token);
        }
        self.finish(state);
        self.out
    }

    fn next_token(&mut self) -> Option<RawToken<'a>> {
        self.buffer.pop_front().or_else(|| self.tokens.next())
    }

    /// Kind of the `n`-th token ahead, if it is on the current line.
    fn peek(&mut self, n: usize) -> Option<TokenKind> {
        while self.buffer.len() <= n {
            let token = self.tokens.next()?;
            self.buffer.push_back(token);
        }
        let token = self.buffer.get(n)?;
        (token.line == self.line).then(|| token.kind.clone())
    }

    fn number_ahead(&mut self) -> bool {
        matches!(self.peek(0), Some(TokenKind::Number(_)))
    }

    /// Separator of an `sep N` pair directly ahead.
    fn separator_ahead(&mut self) -> Option<char> {
        match self.peek(0) {
            Some(TokenKind::ChapterVerseSeparator(sep)) if matches!(self.peek(1), Some(TokenKind::Number(_))) => {
                Some(sep)
            }
            _ => None,
        }
    }

    fn step(&mut self, state: State, token: RawToken<'a>) -> State {
        let span = token.span;
        match (state, token.kind.clone()) {
            (State::ExpectBook, _) => self.expect_book(token),

            (State::ExpectChapter { book, start }, TokenKind::Number(chapter)) => State::ExpectSeparator {
                cite: Cite {
                    book,
                    chapter: Some(chapter),
                    style: ':',
                },
                span: Span::new(start, span.end),
                from_start: false,
            },
            (State::ExpectChapter { book, start }, TokenKind::ChapterVerseSeparator(sep))
                if self.number_ahead() =>
            {
                State::ExpectVerse {
                    cite: Cite {
                        book,
                        chapter: None,
                        style: sep,
                    },
                    span: Span::new(start, span.end),
                    from_start: false,
                }
            }

            (
                State::ExpectSeparator {
                    cite,
                    span: cited,
                    from_start,
                },
                TokenKind::ChapterVerseSeparator(sep),
            ) if self.number_ahead() => State::ExpectVerse {
                cite: Cite { style: sep, ..cite },
                span: cited.to(span),
                from_start,
            },
            (
                State::ExpectSeparator {
                    cite,
                    span: cited,
                    from_start: false,
                },
                TokenKind::Number(verse),
            ) => State::ExpectRangeSeparator {
                cite,
                verse,
                span: cited.to(span),
            },
            (
                State::ExpectSeparator {
                    cite,
                    span: cited,
                    from_start: false,
                },
                TokenKind::RangeSeparator,
            ) if self.number_ahead() => State::ExpectNumberRangeEnd {
                cite,
                span: cited.to(span),
            },
            (
                State::ExpectSeparator {
                    cite,
                    span: cited,
                    from_start: false,
                },
                TokenKind::ListSeparator,
            ) => {
                self.emit(&cite, None, None, false, cited);
                State::AfterSemicolon {
                    cite,
                    verse_level: false,
                }
            }

            (State::ExpectNumberRangeEnd { cite, span: cited }, TokenKind::Number(end)) => {
                self.emit(&cite, None, Some(end), false, cited.to(span));
                State::ExpectBook
            }

            (
                State::ExpectVerse {
                    cite,
                    span: cited,
                    from_start: true,
                },
                TokenKind::Number(verse),
            ) => {
                self.emit(&cite, Some(1), Some(verse), false, cited.to(span));
                State::AfterRange { cite }
            }
            (
                State::ExpectVerse {
                    cite,
                    span: cited,
                    from_start: false,
                },
                TokenKind::Number(verse),
            ) => State::ExpectRangeSeparator {
                cite,
                verse,
                span: cited.to(span),
            },

            (State::ExpectRangeSeparator { cite, verse, span: cited }, TokenKind::RangeSeparator)
                if self.number_ahead() =>
            {
                State::ExpectVerseEnd {
                    cite,
                    verse,
                    span: cited.to(span),
                }
            }
            (
                State::ExpectRangeSeparator { cite, verse, span: cited },
                TokenKind::ChapterVerseSeparator(',' | '.'),
            ) if self.number_ahead() => {
                self.emit(&cite, Some(verse), None, false, cited);
                State::ExpectListItem { cite }
            }
            (State::ExpectRangeSeparator { cite, verse, span: cited }, TokenKind::ListSeparator) => {
                self.emit(&cite, Some(verse), None, false, cited);
                State::AfterSemicolon {
                    cite,
                    verse_level: true,
                }
            }

            (State::ExpectVerseEnd { cite, verse, span: cited }, TokenKind::Number(end))
                if self.crosses_chapter(&cite, end) =>
            {
                self.emit(&cite, Some(verse), None, true, cited);
                self.emit_between(&cite, end, Span::new(cited.end, cited.end));
                State::ExpectSeparator {
                    cite: cite.with_chapter(end),
                    span,
                    from_start: true,
                }
            }
            (State::ExpectVerseEnd { cite, verse, span: cited }, TokenKind::Number(end)) => {
                self.emit(&cite, Some(verse), Some(end), false, cited.to(span));
                State::AfterRange { cite }
            }

            (State::ExpectListItem { cite }, TokenKind::Number(n)) => {
                if self.separator_ahead() == Some(cite.style) {
                    State::ExpectSeparator {
                        cite: cite.with_chapter(n),
                        span,
                        from_start: false,
                    }
                } else {
                    State::ExpectRangeSeparator {
                        cite,
                        verse: n,
                        span,
                    }
                }
            }

            (State::AfterRange { cite }, TokenKind::ChapterVerseSeparator(',' | '.'))
                if self.number_ahead() =>
            {
                State::ExpectListItem { cite }
            }
            (State::AfterRange { cite }, TokenKind::ListSeparator) => State::AfterSemicolon {
                cite,
                verse_level: true,
            },

            (State::AfterSemicolon { cite, verse_level }, TokenKind::Number(n)) => {
                if verse_level && self.separator_ahead().is_none() {
                    State::ExpectRangeSeparator {
                        cite,
                        verse: n,
                        span,
                    }
                } else {
                    State::ExpectSeparator {
                        cite: cite.with_chapter(n),
                        span,
                        from_start: false,
                    }
                }
            }

            (state, _) => {
                self.finish(state);
                self.expect_book(token)
            }
        }
    }

    fn expect_book(&mut self, token: RawToken<'a>) -> State {
        match token.kind {
            TokenKind::BookName(book) => State::ExpectChapter {
                book,
                start: token.span.start,
            },
            TokenKind::Number(chapter) => self.bare_reference(chapter, token.span),
            _ => State::ExpectBook,
        }
    }

    /// `3:17` with no book: continue the last book on this line.
    fn bare_reference(&mut self, chapter: u32, span: Span) -> State {
        let Some(sep) = self.separator_ahead() else {
            return State::ExpectBook;
        };
        if sep != ':' && Some(sep) != self.last_style {
            return State::ExpectBook;
        }
        match self.last_book.clone() {
            Some(book) => State::ExpectSeparator {
                cite: Cite {
                    book,
                    chapter: Some(chapter),
                    style: sep,
                },
                span,
                from_start: false,
            },
            None => {
                debug!(line = self.line, start = span.start, "Discarding reference without a book");
                State::ExpectBook
            }
        }
    }

    fn crosses_chapter(&mut self, cite: &Cite, end: u32) -> bool {
        cite.chapter.is_some_and(|chapter| end > chapter) && self.separator_ahead() == Some(cite.style)
    }

    /// Whole-chapter candidates for the chapters strictly inside a
    /// cross-chapter range. They get the empty span `at`, so they never
    /// overlap the two halves.
    fn emit_between(&mut self, cite: &Cite, end: u32, at: Span) {
        let Some(start) = cite.chapter else { return };
        if end > MAX_CHAPTERS {
            debug!(line = self.line, start = at.start, end, "Not filling chapters of an implausible range");
            return;
        }
        for chapter in start + 1..end {
            self.emit(&cite.with_chapter(chapter), None, None, false, at);
        }
    }

    /// Close whatever citation `state` holds.
    fn finish(&mut self, state: State) {
        match state {
            State::ExpectSeparator {
                cite,
                span,
                from_start: false,
            }
            | State::ExpectNumberRangeEnd { cite, span } => self.emit(&cite, None, None, false, span),
            State::ExpectRangeSeparator { cite, verse, span } | State::ExpectVerseEnd { cite, verse, span } => {
                self.emit(&cite, Some(verse), None, false, span)
            }
            _ => {}
        }
    }

    fn emit(
        &mut self,
        cite: &Cite,
        verse_start: Option<u32>,
        verse_end: Option<u32>,
        to_chapter_end: bool,
        span: Span,
    ) {
        if matches!(cite.book, BookRef::Known(_)) {
            self.last_book = Some(cite.book.clone());
            self.last_style = Some(cite.style);
        }
        self.out.push(CandidateReference {
            book: cite.book.clone(),
            chapter: cite.chapter,
            verse_start,
            verse_end,
            to_chapter_end,
            span,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canon::{BookId, Canon};
    use crate::tokenizer::tokenize;

    fn candidates(text: &str) -> Vec<CandidateReference> {
        let canon = Canon::embedded();
        match_citations(tokenize(&canon, text, None))
    }

    /// (book, chapter, verse_start, verse_end, to_chapter_end)
    fn shape(text: &str) -> Vec<(BookRef, Option<u32>, Option<u32>, Option<u32>, bool)> {
        candidates(text)
            .into_iter()
            .map(|c| (c.book, c.chapter, c.verse_start, c.verse_end, c.to_chapter_end))
            .collect()
    }

    fn known(id: BookId) -> BookRef {
        BookRef::Known(id)
    }

    #[test]
    fn test_single_verse() {
        assert_eq!(
            shape("Jn 3:16"),
            vec![(known(BookId::John), Some(3), Some(16), None, false)]
        );
    }

    #[test]
    fn test_range() {
        assert_eq!(
            shape("Rdz 1:1-3"),
            vec![(known(BookId::Genesis), Some(1), Some(1), Some(3), false)]
        );
    }

    #[test]
    fn test_comma_list_in_colon_style() {
        assert_eq!(
            shape("Rdz 1:1,3"),
            vec![
                (known(BookId::Genesis), Some(1), Some(1), None, false),
                (known(BookId::Genesis), Some(1), Some(3), None, false),
            ]
        );
    }

    #[test]
    fn test_dot_list_in_comma_style() {
        assert_eq!(
            shape("J 3,16.18"),
            vec![
                (known(BookId::John), Some(3), Some(16), None, false),
                (known(BookId::John), Some(3), Some(18), None, false),
            ]
        );
    }

    #[test]
    fn test_list_spans_do_not_overlap() {
        let found = candidates("Rdz 1:1,3");
        assert_eq!(found[0].span, Span::new(0, 7));
        assert_eq!(found[1].span, Span::new(8, 9));
    }

    #[test]
    fn test_range_without_end_keeps_single_verse() {
        assert_eq!(
            shape("Jn 3:16- dalej"),
            vec![(known(BookId::John), Some(3), Some(16), None, false)]
        );
    }

    #[test]
    fn test_chapter_inheritance_on_same_line() {
        assert_eq!(
            shape("Jn 3:16. Kontynuacja w 3:17"),
            vec![
                (known(BookId::John), Some(3), Some(16), None, false),
                (known(BookId::John), Some(3), Some(17), None, false),
            ]
        );
    }

    #[test]
    fn test_bare_reference_without_book_is_discarded() {
        assert!(shape("Zobacz 3:17").is_empty());
    }

    #[test]
    fn test_bare_reference_does_not_cross_lines() {
        assert_eq!(
            shape("Jn 3:16\nKontynuacja w 3:17"),
            vec![(known(BookId::John), Some(3), Some(16), None, false)]
        );
    }

    #[test]
    fn test_bare_comma_reference_needs_comma_style() {
        // A colon-style citation does not claim "3,5" (a decimal number).
        assert_eq!(shape("Jn 3:16 i 3,5 kg").len(), 1);
        // A comma-style citation does.
        assert_eq!(
            shape("J 3,16 oraz 3,18")[1],
            (known(BookId::John), Some(3), Some(18), None, false)
        );
    }

    #[test]
    fn test_semicolon_new_chapter_same_book() {
        assert_eq!(
            shape("Mt 5,1-3; 6,2"),
            vec![
                (known(BookId::Matthew), Some(5), Some(1), Some(3), false),
                (known(BookId::Matthew), Some(6), Some(2), None, false),
            ]
        );
    }

    #[test]
    fn test_semicolon_lone_number_is_verse_or_chapter() {
        assert_eq!(
            shape("Jn 3:16; 18")[1],
            (known(BookId::John), Some(3), Some(18), None, false)
        );
        assert_eq!(
            shape("Ps 23; 24"),
            vec![
                (known(BookId::Psalms), Some(23), None, None, false),
                (known(BookId::Psalms), Some(24), None, None, false),
            ]
        );
    }

    #[test]
    fn test_list_item_with_separator_starts_new_chapter() {
        assert_eq!(
            shape("Jn 3:16, 4:2"),
            vec![
                (known(BookId::John), Some(3), Some(16), None, false),
                (known(BookId::John), Some(4), Some(2), None, false),
            ]
        );
        assert_eq!(
            shape("Jn 3:16-18, 4:1")[1],
            (known(BookId::John), Some(4), Some(1), None, false)
        );
    }

    #[test]
    fn test_cross_chapter_range() {
        assert_eq!(
            shape("Mt 5,1-6,3"),
            vec![
                (known(BookId::Matthew), Some(5), Some(1), None, true),
                (known(BookId::Matthew), Some(6), Some(1), Some(3), false),
            ]
        );
        let found = candidates("Mt 5,1-6,3");
        assert!(!found[0].span.overlaps(&found[1].span));
    }

    #[test]
    fn test_cross_chapter_range_cites_chapters_between() {
        assert_eq!(
            shape("Mt 5,1-7,3"),
            vec![
                (known(BookId::Matthew), Some(5), Some(1), None, true),
                (known(BookId::Matthew), Some(6), None, None, false),
                (known(BookId::Matthew), Some(7), Some(1), Some(3), false),
            ]
        );
        let found = candidates("Mt 5,1-7,3");
        assert!(found[1].span.is_empty());
        assert_eq!(found[1].span.start, found[0].span.end);
        for (i, a) in found.iter().enumerate() {
            for b in &found[i + 1..] {
                assert!(!a.span.overlaps(&b.span));
            }
        }
    }

    #[test]
    fn test_implausible_cross_chapter_range_is_not_filled() {
        assert_eq!(shape("Mt 5,1-999,3").len(), 2);
    }

    #[test]
    fn test_colon_style_range_followed_by_comma_list() {
        assert_eq!(
            shape("Jn 3:16-18,20"),
            vec![
                (known(BookId::John), Some(3), Some(16), Some(18), false),
                (known(BookId::John), Some(3), Some(20), None, false),
            ]
        );
    }

    #[test]
    fn test_chapter_only_and_missing_separator() {
        assert_eq!(
            shape("Ps 23"),
            vec![(known(BookId::Psalms), Some(23), None, None, false)]
        );
        assert_eq!(
            shape("Jn 3 16"),
            vec![(known(BookId::John), Some(3), Some(16), None, false)]
        );
    }

    #[test]
    fn test_missing_chapter() {
        assert_eq!(
            shape("Jn :16"),
            vec![(known(BookId::John), None, Some(16), None, false)]
        );
    }

    #[test]
    fn test_chapter_range_is_not_expanded() {
        assert_eq!(
            shape("Ps 23-25"),
            vec![(known(BookId::Psalms), Some(23), None, Some(25), false)]
        );
        assert_eq!(shape("Ps 23-25, 27").len(), 1);
    }

    #[test]
    fn test_number_range_in_single_chapter_book() {
        assert_eq!(
            shape("Jud 5-7"),
            vec![(known(BookId::Jude), Some(5), None, Some(7), false)]
        );
        let found = candidates("Jud 5-7");
        assert_eq!(found[0].span, Span::new(0, 7));
    }

    #[test]
    fn test_multiple_books_in_one_line() {
        let found = shape("Plan spotkania: Mt 5,1-3; Łk 2,8-14; 1 Kor 13,1-3.");
        assert_eq!(
            found,
            vec![
                (known(BookId::Matthew), Some(5), Some(1), Some(3), false),
                (known(BookId::Luke), Some(2), Some(8), Some(14), false),
                (known(BookId::Corinthians1), Some(13), Some(1), Some(3), false),
            ]
        );
    }

    #[test]
    fn test_unknown_book_is_kept_for_validation() {
        assert_eq!(
            shape("Xyz 3:1"),
            vec![(BookRef::Unknown("Xyz".into()), Some(3), Some(1), None, false)]
        );
    }

    #[test]
    fn test_book_without_number_is_ignored() {
        assert!(shape("Ewangelia wg Mt mówi").is_empty());
    }
}
