//! In-memory verse store, for tests, the CLI and small deployments.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use crate::canon::BookId;
use crate::error::{LookupError, Result};
use crate::resolver::VerseSource;

/// One verse as stored in a JSON verse file.
#[derive(Debug, Clone, Deserialize)]
pub struct VerseRecord {
    pub book: BookId,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryVerseStore {
    verses: HashMap<(BookId, u32, u32), String>,
}

impl InMemoryVerseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, book: BookId, chapter: u32, verse: u32, text: impl Into<String>) {
        self.verses.insert((book, chapter, verse), text.into());
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    /// Load a JSON array of `{"book", "chapter", "verse", "text"}` objects.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let store = Self::from_json_str(&content)?;
        info!(path = %path.display(), verses = store.len(), "Loaded verse store");
        Ok(store)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<VerseRecord> = serde_json::from_str(json)?;
        Ok(records.into_iter().collect())
    }
}

impl FromIterator<VerseRecord> for InMemoryVerseStore {
    fn from_iter<T: IntoIterator<Item = VerseRecord>>(records: T) -> Self {
        let mut store = Self::new();
        for record in records {
            store.insert(record.book, record.chapter, record.verse, record.text);
        }
        store
    }
}

#[async_trait]
impl VerseSource for InMemoryVerseStore {
    async fn get_verse(
        &self,
        book: BookId,
        chapter: u32,
        verse: u32,
    ) -> std::result::Result<Option<String>, LookupError> {
        Ok(self.verses.get(&(book, chapter, verse)).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiglaError;
    use std::io::Write;

    const VERSES: &str = r#"[
        {"book": "JOHN", "chapter": 3, "verse": 16, "text": "For God so loved the world"},
        {"book": "SAMUEL_1", "chapter": 3, "verse": 10, "text": "Speak; for thy servant heareth."}
    ]"#;

    #[tokio::test]
    async fn test_load_and_lookup() {
        let store = InMemoryVerseStore::from_json_str(VERSES).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(
            store.get_verse(BookId::John, 3, 16).await,
            Ok(Some("For God so loved the world".to_string()))
        );
        assert_eq!(
            store.get_verse(BookId::Samuel1, 3, 10).await,
            Ok(Some("Speak; for thy servant heareth.".to_string()))
        );
        assert_eq!(store.get_verse(BookId::John, 3, 17).await, Ok(None));
    }

    #[test]
    fn test_bad_book_name_is_json_error() {
        let result = InMemoryVerseStore::from_json_str(r#"[{"book": "JOHNNY", "chapter": 1, "verse": 1, "text": ""}]"#);
        assert!(matches!(result, Err(SiglaError::Json(_))));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(VERSES.as_bytes()).unwrap();
        let store = InMemoryVerseStore::from_json_file(file.path()).unwrap();
        assert!(!store.is_empty());
    }
}
