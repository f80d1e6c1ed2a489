//! Validated references. A [`Reference`] only exists inside canon bounds.

use serde::Serialize;
use thiserror::Error;

use crate::canon::{BookId, Canon, Locale};
use crate::matcher::CandidateReference;
use crate::tokenizer::BookRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    #[error("unknown book")]
    UnknownBook,
    #[error("chapter out of range")]
    ChapterOutOfRange,
    #[error("verse out of range")]
    VerseOutOfRange,
    #[error("missing chapter")]
    MissingChapter,
    #[error("range end precedes its start")]
    InvertedRange,
}

/// A canonical book/chapter/verse-range reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Reference {
    book: BookId,
    chapter: u32,
    verse_start: u32,
    verse_end: u32,
}

impl Reference {
    /// Build a reference, checking every number against the canon.
    pub fn new(
        canon: &Canon,
        book: BookId,
        chapter: u32,
        verse_start: u32,
        verse_end: u32,
    ) -> Result<Self, RejectReason> {
        let verses = canon.bounds(book, chapter).ok_or(RejectReason::ChapterOutOfRange)?;
        if verse_start == 0 || verse_start > verses || verse_end > verses {
            return Err(RejectReason::VerseOutOfRange);
        }
        if verse_end < verse_start {
            return Err(RejectReason::InvertedRange);
        }
        Ok(Self {
            book,
            chapter,
            verse_start,
            verse_end,
        })
    }

    pub fn book(&self) -> BookId {
        self.book
    }

    pub fn chapter(&self) -> u32 {
        self.chapter
    }

    pub fn verse_start(&self) -> u32 {
        self.verse_start
    }

    pub fn verse_end(&self) -> u32 {
        self.verse_end
    }

    pub fn is_range(&self) -> bool {
        self.verse_end > self.verse_start
    }

    pub fn verses(&self) -> std::ops::RangeInclusive<u32> {
        self.verse_start..=self.verse_end
    }

    /// Human-readable form: `John 3:16-18` in English, `J 3,16-18` in Polish.
    pub fn label(&self, canon: &Canon, locale: Locale) -> String {
        let sep = match locale {
            Locale::Polish => ',',
            Locale::English => ':',
        };
        let mut label = format!(
            "{} {}{}{}",
            canon.title(self.book, locale),
            self.chapter,
            sep,
            self.verse_start
        );
        if self.is_range() {
            label.push_str(&format!("-{}", self.verse_end));
        }
        label
    }
}

/// Turn a matcher candidate into a [`Reference`].
///
/// A whole-chapter candidate covers every verse of the chapter; a chapter range
/// (`Ps 23-25`) keeps only its first chapter. For books with a single chapter a
/// lone number is the verse (`Jud 5`, `Jud 5-7`), and a missing chapter is
/// chapter 1.
pub fn validate(canon: &Canon, candidate: &CandidateReference) -> Result<Reference, RejectReason> {
    let book = match &candidate.book {
        BookRef::Known(book) => *book,
        BookRef::Unknown(_) => return Err(RejectReason::UnknownBook),
    };
    let single_chapter = canon.chapter_count(book) == 1;

    let (chapter, verse_start, verse_end) = match (candidate.chapter, candidate.verse_start) {
        (Some(verse), None) if single_chapter && !candidate.to_chapter_end => (1, Some(verse), candidate.verse_end),
        (Some(chapter), start) => (chapter, start, candidate.verse_end),
        (None, start) if single_chapter => (1, start, candidate.verse_end),
        (None, _) => return Err(RejectReason::MissingChapter),
    };

    let verses = canon.bounds(book, chapter).ok_or(RejectReason::ChapterOutOfRange)?;
    let (start, end) = match verse_start {
        None => (1, verses),
        Some(start) if candidate.to_chapter_end => (start, verses),
        Some(start) => (start, verse_end.unwrap_or(start)),
    };
    Reference::new(canon, book, chapter, start, end)
}
