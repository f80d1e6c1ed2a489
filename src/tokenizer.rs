//! Lazy tokenizer for OCR text.
//!
//! One pre-compiled pattern splits the text into lexemes (numbers, letter
//! runs, whitespace, single characters). A small lookahead buffer then
//! classifies them, merging book names that OCR split apart (`J n`, `1 Kor`)
//! and reading `l`/`I`/`O` as digits where a number is expected.

use std::collections::VecDeque;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::Span;
use crate::canon::{BookId, Canon, Locale};

lazy_static! {
    // Numeric runs may contain l/I/| (read as 1) and O/o (read as 0) but need one real digit.
    static ref LEXEME_PATTERN: Regex =
        Regex::new(r"[0-9lIO|o]*[0-9][0-9lIO|o]*|\p{L}[\p{L}\p{M}]*|\s+|.").unwrap();
}

/// Longest run of fragments considered for one book name.
const MAX_FRAGMENTS: usize = 4;
/// Fragments longer than this end a split book name.
const MAX_SPLIT_FRAGMENT: usize = 2;
/// Numbers with more digits are years, page numbers and the like.
const MAX_NUMBER_DIGITS: usize = 3;

/// Book reference as read from the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BookRef {
    Known(BookId),
    /// Abbreviation-shaped word followed by a number that no canon spelling matches.
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    BookName(BookRef),
    Number(u32),
    /// `-`, `–` or `—`
    RangeSeparator,
    /// `:`, `,` or a `.` squeezed between two digits
    ChapterVerseSeparator(char),
    /// `;`
    ListSeparator,
    Junk,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Span,
    /// 0-based line of the source text.
    pub line: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexKind {
    Number,
    Word,
    Space,
    Punct,
}

#[derive(Debug, Clone, Copy)]
struct Lexeme<'a> {
    kind: LexKind,
    text: &'a str,
    start: usize,
    end: usize,
}

impl<'a> Lexeme<'a> {
    fn is_inline_space(&self) -> bool {
        self.kind == LexKind::Space && !self.text.contains('\n')
    }

    fn is_punct(&self, c: char) -> bool {
        self.kind == LexKind::Punct && self.text.starts_with(c)
    }
}

/// What the previously emitted token was, for context-dependent readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Last {
    Start,
    Separator,
    Other,
}

/// A candidate spelling made of one or more fragments.
struct Merge {
    /// Buffered lexemes to consume after the head.
    consumed: usize,
    spelling: String,
    end: usize,
}

/// Tokenize `text`. The returned iterator is lazy and can be recreated at will.
pub fn tokenize<'a>(canon: &'a Canon, text: &'a str, locale_hint: Option<Locale>) -> Tokens<'a> {
    Tokens {
        canon,
        locale_hint,
        text,
        lexemes: LEXEME_PATTERN.find_iter(text),
        buffer: VecDeque::new(),
        before: None,
        current: None,
        line: 0,
        last: Last::Start,
    }
}

pub struct Tokens<'a> {
    canon: &'a Canon,
    locale_hint: Option<Locale>,
    text: &'a str,
    lexemes: regex::Matches<'static, 'a>,
    buffer: VecDeque<Lexeme<'a>>,
    /// Lexeme consumed before `current`.
    before: Option<Lexeme<'a>>,
    current: Option<Lexeme<'a>>,
    line: usize,
    last: Last,
}

impl<'a> Tokens<'a> {
    fn lex(&mut self) -> Option<Lexeme<'a>> {
        let m = self.lexemes.next()?;
        let text = m.as_str();
        let kind = match text.chars().next() {
            _ if text.bytes().any(|b| b.is_ascii_digit()) => LexKind::Number,
            Some(c) if c.is_whitespace() => LexKind::Space,
            Some(c) if c.is_alphabetic() => LexKind::Word,
            _ => LexKind::Punct,
        };
        Some(Lexeme {
            kind,
            text,
            start: m.start(),
            end: m.end(),
        })
    }

    fn peek(&mut self, n: usize) -> Option<Lexeme<'a>> {
        while self.buffer.len() <= n {
            let lexeme = self.lex()?;
            self.buffer.push_back(lexeme);
        }
        self.buffer.get(n).copied()
    }

    fn bump(&mut self) -> Option<Lexeme<'a>> {
        let lexeme = match self.buffer.pop_front() {
            Some(l) => l,
            None => self.lex()?,
        };
        if lexeme.kind == LexKind::Space {
            self.line += lexeme.text.matches('\n').count();
        }
        self.before = self.current.replace(lexeme);
        Some(lexeme)
    }

    fn skip(&mut self, n: usize) {
        for _ in 0..n {
            self.bump();
        }
    }

    fn token(&self, kind: TokenKind, start: usize, end: usize) -> RawToken<'a> {
        RawToken {
            kind,
            text: &self.text[start..end],
            span: Span::new(start, end),
            line: self.line,
        }
    }

    fn number(&mut self, lex: Lexeme<'a>) -> RawToken<'a> {
        if let Some(book) = self.ordinal_book(lex) {
            return book;
        }

        let mut end = lex.end;
        // Verse parts: "16a", "3b"
        if let Some(next) = self.peek(0) {
            if next.kind == LexKind::Word && next.start == lex.end && is_verse_part(next.text) {
                end = next.end;
                self.bump();
            }
        }

        let kind = match parse_ocr_number(lex.text) {
            Some(n) => TokenKind::Number(n),
            None => TokenKind::Junk,
        };
        self.token(kind, lex.start, end)
    }

    /// `1 Kor`, `2Sm`: a single ordinal digit fused with the following book name.
    ///
    /// A digit that directly follows a separator is a verse, so it only takes
    /// part in a book name when no space separates the two ("1,1Kor" is rare,
    /// "5,1 J 3,16" is not).
    fn ordinal_book(&mut self, lex: Lexeme<'a>) -> Option<RawToken<'a>> {
        if !matches!(lex.text, "1" | "2" | "3") {
            return None;
        }
        let adjacent = matches!(self.peek(0), Some(next) if next.kind == LexKind::Word && next.start == lex.end);
        if self.last == Last::Separator && !adjacent {
            return None;
        }
        self.book(lex, true)
    }

    fn word(&mut self, lex: Lexeme<'a>) -> RawToken<'a> {
        if starts_uppercase(lex.text) {
            if let Some(book) = self.book(lex, false) {
                return book;
            }
        }

        if self.last == Last::Separator {
            if let Some(n) = confusable_digit(lex.text) {
                return self.token(TokenKind::Number(n), lex.start, lex.end);
            }
        }

        if self.is_unknown_abbreviation(lex) {
            let end = self.absorb_dot(lex.end);
            let kind = TokenKind::BookName(BookRef::Unknown(lex.text.to_string()));
            return self.token(kind, lex.start, end);
        }

        self.token(TokenKind::Junk, lex.start, lex.end)
    }

    /// Resolve the longest fragment run starting at `head` to a book.
    fn book(&mut self, head: Lexeme<'a>, ordinal: bool) -> Option<RawToken<'a>> {
        let merges = self.merges(head, ordinal);
        for (i, merge) in merges.iter().enumerate().rev() {
            // Abbreviation prefixes only for a single word (plus its ordinal).
            let found = if i == 0 {
                self.canon.lookup_book(&merge.spelling, self.locale_hint)
            } else {
                self.canon.lookup_exact(&merge.spelling, self.locale_hint)
            };
            if let Some(book) = found {
                self.skip(merge.consumed);
                let end = self.absorb_dot(merge.end);
                return Some(self.token(TokenKind::BookName(BookRef::Known(book)), head.start, end));
            }
        }
        None
    }

    /// Candidate spellings from `head` and the words after it, joined across
    /// same-line spaces and dots. A split continues only while the previous
    /// fragment is short; an ordinal always takes the following word.
    fn merges(&mut self, head: Lexeme<'a>, ordinal: bool) -> Vec<Merge> {
        let mut merges = Vec::new();
        let mut spelling = head.text.to_string();
        let mut last_len = if ordinal { 0 } else { head.text.chars().count() };
        if !ordinal {
            merges.push(Merge {
                consumed: 0,
                spelling: spelling.clone(),
                end: head.end,
            });
        }

        let mut at = 0;
        while merges.len() < MAX_FRAGMENTS && last_len <= MAX_SPLIT_FRAGMENT {
            let mut j = at;
            if matches!(self.peek(j), Some(l) if l.is_punct('.')) {
                j += 1;
            }
            if matches!(self.peek(j), Some(l) if l.is_inline_space()) {
                j += 1;
            }
            let Some(word) = self.peek(j) else { break };
            if word.kind != LexKind::Word {
                break;
            }
            spelling.push_str(word.text);
            last_len = word.text.chars().count();
            merges.push(Merge {
                consumed: j + 1,
                spelling: spelling.clone(),
                end: word.end,
            });
            at = j + 1;
        }
        merges
    }

    /// Capitalized 2-5 letter word followed by a number on the same line.
    fn is_unknown_abbreviation(&mut self, lex: Lexeme<'a>) -> bool {
        let len = lex.text.chars().count();
        if !starts_uppercase(lex.text) || !(2..=5).contains(&len) {
            return false;
        }
        let mut j = 0;
        if matches!(self.peek(j), Some(l) if l.is_punct('.') && l.start == lex.end) {
            j += 1;
        }
        if matches!(self.peek(j), Some(l) if l.is_inline_space()) {
            j += 1;
        }
        matches!(self.peek(j), Some(l) if l.kind == LexKind::Number)
    }

    fn absorb_dot(&mut self, end: usize) -> usize {
        match self.peek(0) {
            Some(next) if next.is_punct('.') && next.start == end => {
                self.bump();
                next.end
            }
            _ => end,
        }
    }

    fn punct(&mut self, lex: Lexeme<'a>) -> RawToken<'a> {
        let kind = match lex.text.chars().next() {
            Some(c @ (':' | ',')) => TokenKind::ChapterVerseSeparator(c),
            Some('.') if self.dot_between_digits(lex) => TokenKind::ChapterVerseSeparator('.'),
            Some('-' | '–' | '—' | '‒' | '−') => TokenKind::RangeSeparator,
            Some(';') => TokenKind::ListSeparator,
            _ => TokenKind::Junk,
        };
        self.token(kind, lex.start, lex.end)
    }

    fn dot_between_digits(&mut self, dot: Lexeme<'a>) -> bool {
        let after_digit = matches!(self.before, Some(b) if b.kind == LexKind::Number && b.end == dot.start);
        let before_digit = matches!(self.peek(0), Some(n) if n.kind == LexKind::Number && n.start == dot.end);
        after_digit && before_digit
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = RawToken<'a>;

    fn next(&mut self) -> Option<RawToken<'a>> {
        loop {
            let lex = self.bump()?;
            let token = match lex.kind {
                LexKind::Space => continue,
                LexKind::Number => self.number(lex),
                LexKind::Word => self.word(lex),
                LexKind::Punct => self.punct(lex),
            };
            self.last = match token.kind {
                TokenKind::ChapterVerseSeparator(_) | TokenKind::RangeSeparator => Last::Separator,
                _ => Last::Other,
            };
            return Some(token);
        }
    }
}

/// Read a numeric run, mapping the usual OCR confusions. `None` for runs too long
/// to be a chapter or verse.
pub fn parse_ocr_number(raw: &str) -> Option<u32> {
    let mut value: u32 = 0;
    let mut digits = 0;
    for c in raw.chars() {
        let d = match c {
            '0'..='9' => c as u32 - '0' as u32,
            'l' | 'I' | '|' => 1,
            'O' | 'o' => 0,
            _ => return None,
        };
        digits += 1;
        if digits > MAX_NUMBER_DIGITS {
            return None;
        }
        value = value * 10 + d;
    }
    (digits > 0).then_some(value)
}

fn confusable_digit(word: &str) -> Option<u32> {
    match word {
        "l" | "I" => Some(1),
        "O" | "o" => Some(0),
        _ => None,
    }
}

fn is_verse_part(word: &str) -> bool {
    matches!(word, "a" | "b" | "c" | "d" | "e")
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<TokenKind> {
        let canon = Canon::embedded();
        tokenize(&canon, text, None).map(|t| t.kind).collect()
    }

    fn book(id: BookId) -> TokenKind {
        TokenKind::BookName(BookRef::Known(id))
    }

    #[test]
    fn test_basic_siglum() {
        assert_eq!(
            kinds("Jn 3:16"),
            vec![
                book(BookId::John),
                TokenKind::Number(3),
                TokenKind::ChapterVerseSeparator(':'),
                TokenKind::Number(16),
            ]
        );
    }

    #[test]
    fn test_no_spaces_and_spurious_spaces_agree() {
        assert_eq!(kinds("Jn3:16"), kinds("Jn 3:16"));
        assert_eq!(kinds("J n 3 : 16"), kinds("Jn 3:16"));
    }

    #[test]
    fn test_offsets_and_lines() {
        let canon = Canon::embedded();
        let text = "Zob.\nRdz 1,1";
        let tokens: Vec<_> = tokenize(&canon, text, None).collect();
        let rdz = tokens
            .iter()
            .find(|t| t.kind == book(BookId::Genesis))
            .unwrap();
        assert_eq!(rdz.span, Span::new(5, 8));
        assert_eq!(rdz.text, "Rdz");
        assert_eq!(rdz.line, 1);
        assert_eq!(tokens[0].line, 0);
    }

    #[test]
    fn test_ordinal_books() {
        assert_eq!(kinds("1 Kor 13")[0], book(BookId::Corinthians1));
        assert_eq!(kinds("2Kor 5")[0], book(BookId::Corinthians2));
        assert_eq!(kinds("II Kor 5")[0], book(BookId::Corinthians2));
        assert_eq!(kinds("3 J 4")[0], book(BookId::John3));
    }

    #[test]
    fn test_verse_digit_is_not_an_ordinal() {
        // "1" closes "5,1"; "J" is John, not 1 John.
        assert_eq!(
            kinds("Mt 5,1 J 3,16")[4],
            book(BookId::John)
        );
    }

    #[test]
    fn test_book_absorbs_trailing_dot() {
        let canon = Canon::embedded();
        let tokens: Vec<_> = tokenize(&canon, "Rdz. 1", None).collect();
        assert_eq!(tokens[0].text, "Rdz.");
        assert_eq!(tokens[1].kind, TokenKind::Number(1));
    }

    #[test]
    fn test_ocr_digit_confusions() {
        assert_eq!(kinds("Jn 3:l6")[3], TokenKind::Number(16));
        assert_eq!(kinds("Mt 1O")[1], TokenKind::Number(10));
        assert_eq!(kinds("Mt 5,l-3")[3], TokenKind::Number(1));
        assert_eq!(kinds("Ps 23:O")[3], TokenKind::Number(0));
    }

    #[test]
    fn test_dot_as_separator_only_between_digits() {
        assert_eq!(kinds("Jn 3.16")[2], TokenKind::ChapterVerseSeparator('.'));
        assert_eq!(kinds("Jn 3:16. 4")[4], TokenKind::Junk);
    }

    #[test]
    fn test_range_and_list_separators() {
        assert_eq!(
            kinds("Mt 5,1–3; Łk 2"),
            vec![
                book(BookId::Matthew),
                TokenKind::Number(5),
                TokenKind::ChapterVerseSeparator(','),
                TokenKind::Number(1),
                TokenKind::RangeSeparator,
                TokenKind::Number(3),
                TokenKind::ListSeparator,
                book(BookId::Luke),
                TokenKind::Number(2),
            ]
        );
    }

    #[test]
    fn test_long_numbers_are_junk() {
        assert_eq!(kinds("Rok 2023"), vec![TokenKind::BookName(BookRef::Unknown("Rok".into())), TokenKind::Junk]);
    }

    #[test]
    fn test_verse_part_suffix() {
        let canon = Canon::embedded();
        let tokens: Vec<_> = tokenize(&canon, "J 3,16a", None).collect();
        assert_eq!(tokens[3].kind, TokenKind::Number(16));
        assert_eq!(tokens[3].text, "16a");
    }

    #[test]
    fn test_words_and_lowercase_are_junk() {
        assert_eq!(
            kinds("Kontynuacja w"),
            vec![TokenKind::Junk, TokenKind::Junk]
        );
        // Lowercase abbreviations are ordinary words.
        assert_eq!(kinds("na 3"), vec![TokenKind::Junk, TokenKind::Number(3)]);
    }

    #[test]
    fn test_unknown_abbreviation() {
        assert_eq!(
            kinds("Xyz 3:1")[0],
            TokenKind::BookName(BookRef::Unknown("Xyz".into()))
        );
        // Not followed by a number
        assert_eq!(kinds("Xyz abc")[0], TokenKind::Junk);
    }

    #[test]
    fn test_split_words_need_exact_spelling() {
        // "Mt i Mk" must not fuse into one book.
        let k = kinds("Mt i Mk 1");
        assert_eq!(k[0], book(BookId::Matthew));
        assert_eq!(k[1], TokenKind::Junk);
        assert_eq!(k[2], book(BookId::Mark));
    }

    #[test]
    fn test_restartable() {
        let canon = Canon::embedded();
        let text = "Rdz 1:1";
        let first: Vec<_> = tokenize(&canon, text, None).collect();
        let second: Vec<_> = tokenize(&canon, text, None).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_ocr_number() {
        assert_eq!(parse_ocr_number("16"), Some(16));
        assert_eq!(parse_ocr_number("l6"), Some(16));
        assert_eq!(parse_ocr_number("1O"), Some(10));
        assert_eq!(parse_ocr_number("2023"), None);
        assert_eq!(parse_ocr_number(""), None);
    }
}
