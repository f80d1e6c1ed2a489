//! Canon table: book spellings in Polish and English and per-chapter verse counts.
//!
//! Spellings are matched on a normalized key (no diacritics, dots or spaces,
//! uppercase). Exact spellings win over abbreviation prefixes, and explicit
//! spellings win over generated roman-ordinal variants (`II Kor`).

mod data;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;
use whatlang::Lang;

/// Shortest key accepted for abbreviation-prefix matching.
const MIN_PREFIX_LEN: usize = 3;

/// Stable book identifier in canon order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookId {
    Genesis,
    Exodus,
    Leviticus,
    Numbers,
    Deuteronomy,
    Joshua,
    Judges,
    Ruth,
    #[serde(rename = "SAMUEL_1")]
    Samuel1,
    #[serde(rename = "SAMUEL_2")]
    Samuel2,
    #[serde(rename = "KINGS_1")]
    Kings1,
    #[serde(rename = "KINGS_2")]
    Kings2,
    #[serde(rename = "CHRONICLES_1")]
    Chronicles1,
    #[serde(rename = "CHRONICLES_2")]
    Chronicles2,
    Ezra,
    Nehemiah,
    Esther,
    Job,
    Psalms,
    Proverbs,
    Ecclesiastes,
    SongOfSongs,
    Isaiah,
    Jeremiah,
    Lamentations,
    Ezekiel,
    Daniel,
    Hosea,
    Joel,
    Amos,
    Obadiah,
    Jonah,
    Micah,
    Nahum,
    Habakkuk,
    Zephaniah,
    Haggai,
    Zechariah,
    Malachi,
    Matthew,
    Mark,
    Luke,
    John,
    Acts,
    Romans,
    #[serde(rename = "CORINTHIANS_1")]
    Corinthians1,
    #[serde(rename = "CORINTHIANS_2")]
    Corinthians2,
    Galatians,
    Ephesians,
    Philippians,
    Colossians,
    #[serde(rename = "THESSALONIANS_1")]
    Thessalonians1,
    #[serde(rename = "THESSALONIANS_2")]
    Thessalonians2,
    #[serde(rename = "TIMOTHY_1")]
    Timothy1,
    #[serde(rename = "TIMOTHY_2")]
    Timothy2,
    Titus,
    Philemon,
    Hebrews,
    James,
    #[serde(rename = "PETER_1")]
    Peter1,
    #[serde(rename = "PETER_2")]
    Peter2,
    #[serde(rename = "JOHN_1")]
    John1,
    #[serde(rename = "JOHN_2")]
    John2,
    #[serde(rename = "JOHN_3")]
    John3,
    Jude,
    Revelation,
    Tobit,
    Wisdom,
    Sirach,
    #[serde(rename = "MACCABEES_1")]
    Maccabees1,
    #[serde(rename = "MACCABEES_2")]
    Maccabees2,
}

/// Languages whose abbreviation sets the canon knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "pl")]
    Polish,
    #[serde(rename = "en")]
    English,
}

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::Polish => "pl",
            Locale::English => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pl" | "pol" | "polish" => Ok(Locale::Polish),
            "en" | "eng" | "english" => Ok(Locale::English),
            other => Err(format!("unsupported locale: {}", other)),
        }
    }
}

/// One book of the canon.
#[derive(Debug, Clone)]
pub struct CanonEntry {
    pub book_id: BookId,
    /// Verse count of each chapter; index 0 is chapter 1.
    pub chapters: Vec<u32>,
    pub spellings: Vec<(Locale, String)>,
    pub title_pl: String,
    pub title_en: String,
}

impl CanonEntry {
    pub fn title(&self, locale: Locale) -> &str {
        match locale {
            Locale::Polish => &self.title_pl,
            Locale::English => &self.title_en,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Spelling {
    book: BookId,
    locale: Locale,
    generated: bool,
}

/// Immutable book table. Build once and share by reference.
#[derive(Debug, Clone)]
pub struct Canon {
    entries: Vec<CanonEntry>,
    spellings: BTreeMap<String, Vec<Spelling>>,
}

impl Canon {
    /// The embedded 71-book canon.
    pub fn embedded() -> Self {
        let entries = data::BOOKS
            .iter()
            .map(|book| {
                let spellings = book
                    .polish
                    .iter()
                    .map(|s| (Locale::Polish, s.to_string()))
                    .chain(book.english.iter().map(|s| (Locale::English, s.to_string())))
                    .collect();
                CanonEntry {
                    book_id: book.id,
                    chapters: book.chapters.iter().map(|&n| u32::from(n)).collect(),
                    spellings,
                    title_pl: book.title_pl.to_string(),
                    title_en: book.title_en.to_string(),
                }
            })
            .collect();
        Self::from_entries(entries)
    }

    /// Build a canon from explicit entries. Entries are kept in the given order.
    pub fn from_entries(entries: Vec<CanonEntry>) -> Self {
        let mut spellings: BTreeMap<String, Vec<Spelling>> = BTreeMap::new();

        for entry in &entries {
            for (locale, raw) in &entry.spellings {
                let key = normalize_key(raw);
                if key.is_empty() {
                    continue;
                }
                if let Some(roman) = roman_variant(&key) {
                    spellings.entry(roman).or_default().push(Spelling {
                        book: entry.book_id,
                        locale: *locale,
                        generated: true,
                    });
                }
                spellings.entry(key).or_default().push(Spelling {
                    book: entry.book_id,
                    locale: *locale,
                    generated: false,
                });
            }
        }

        Self { entries, spellings }
    }

    /// Resolve a spelling to a book.
    ///
    /// Without a hint every locale is tried. An exact spelling always beats an
    /// abbreviation prefix; a prefix must be unambiguous to count.
    pub fn lookup_book(&self, spelling: &str, locale_hint: Option<Locale>) -> Option<BookId> {
        let key = normalize_key(spelling);
        if key.is_empty() {
            return None;
        }
        if let Some(book) = self.lookup_key(&key, locale_hint) {
            return Some(book);
        }
        if key.chars().count() < MIN_PREFIX_LEN {
            return None;
        }
        self.lookup_prefix(&key, locale_hint)
    }

    /// Like [`Canon::lookup_book`] but without abbreviation-prefix matching.
    pub fn lookup_exact(&self, spelling: &str, locale_hint: Option<Locale>) -> Option<BookId> {
        self.lookup_key(&normalize_key(spelling), locale_hint)
    }

    fn lookup_key(&self, key: &str, locale_hint: Option<Locale>) -> Option<BookId> {
        self.spellings
            .get(key)?
            .iter()
            .min_by_key(|s| (s.generated, Some(s.locale) != locale_hint, s.book))
            .map(|s| s.book)
    }

    fn lookup_prefix(&self, key: &str, locale_hint: Option<Locale>) -> Option<BookId> {
        let matches: Vec<Spelling> = self
            .spellings
            .range(key.to_string()..)
            .take_while(|(k, _)| k.starts_with(key))
            .flat_map(|(_, found)| found.iter().copied())
            .filter(|s| !s.generated)
            .collect();

        if let Some(book) = unique_book(matches.iter()) {
            return Some(book);
        }
        let hint = locale_hint?;
        unique_book(matches.iter().filter(|s| s.locale == hint))
    }

    /// Locales in which the spelling is an exact known form.
    pub fn spelling_locales(&self, spelling: &str) -> Vec<Locale> {
        let mut locales = Vec::new();
        if let Some(found) = self.spellings.get(&normalize_key(spelling)) {
            for s in found {
                if !locales.contains(&s.locale) {
                    locales.push(s.locale);
                }
            }
        }
        locales
    }

    /// Verse count of `chapter` (1-based), or `None` if the chapter does not exist.
    pub fn bounds(&self, book: BookId, chapter: u32) -> Option<u32> {
        let index = usize::try_from(chapter).ok()?.checked_sub(1)?;
        self.entry(book)?.chapters.get(index).copied()
    }

    pub fn chapter_count(&self, book: BookId) -> u32 {
        self.entry(book)
            .map(|e| e.chapters.len() as u32)
            .unwrap_or(0)
    }

    pub fn entry(&self, book: BookId) -> Option<&CanonEntry> {
        self.entries.iter().find(|e| e.book_id == book)
    }

    pub fn entries(&self) -> &[CanonEntry] {
        &self.entries
    }

    /// Display title for a book, falling back to its debug name.
    pub fn title(&self, book: BookId, locale: Locale) -> String {
        match self.entry(book) {
            Some(entry) => entry.title(locale).to_string(),
            None => format!("{:?}", book),
        }
    }

    pub fn stats(&self) -> String {
        let chapters: usize = self.entries.iter().map(|e| e.chapters.len()).sum();
        format!(
            "Canon loaded: books={}, chapters={}, spellings={}",
            self.entries.len(),
            chapters,
            self.spellings.len()
        )
    }
}

fn unique_book<'a>(mut spellings: impl Iterator<Item = &'a Spelling>) -> Option<BookId> {
    let first = spellings.next()?.book;
    spellings.all(|s| s.book == first).then_some(first)
}

/// `1KOR` -> `IKOR`, `2SM` -> `IISM`, `3J` -> `IIIJ`.
fn roman_variant(key: &str) -> Option<String> {
    let mut chars = key.chars();
    let numeral = match chars.next()? {
        '1' => "I",
        '2' => "II",
        '3' => "III",
        _ => return None,
    };
    let rest = chars.as_str();
    if rest.is_empty() {
        return None;
    }
    Some(format!("{}{}", numeral, rest))
}

/// Lookup key for a spelling: diacritics, whitespace and dots removed, uppercased.
///
/// `Ł` has no decomposition and is folded explicitly. OCR engines commonly
/// read `Ł` as `Å`, so that glyph folds to `L` as well.
pub fn normalize_key(raw: &str) -> String {
    raw.chars()
        .map(|c| match c {
            'Å' | 'Ł' => 'L',
            'å' | 'ł' => 'l',
            c => c,
        })
        .nfkd()
        .filter(|c| !is_combining_mark(*c) && !c.is_whitespace() && *c != '.')
        .flat_map(char::to_uppercase)
        .collect()
}

/// Guess the page language. Only reliable Polish or English detections count.
pub fn detect_locale(text: &str) -> Option<Locale> {
    let info = whatlang::detect(text)?;
    if !info.is_reliable() {
        return None;
    }
    match info.lang() {
        Lang::Pol => Some(Locale::Polish),
        Lang::Eng => Some(Locale::English),
        _ => None,
    }
}
