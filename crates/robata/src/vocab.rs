//! # Vocabulary
//!
//! A bidirectional mapping between caption words and token indices,
//! loaded once at startup and shared read-only across decode calls.
//!
//! The persisted form is the JSON word-to-index mapping produced when
//! the caption model was trained (`{"startseq": 1, "endseq": 2, ...}`).
//! Index `0` is reserved for padding and must not map to any word.
//!
//! Lookups are total: an index the model produces that has no mapping
//! is reported as `None` and dropped by the renderer, never raised as
//! an error.

use std::collections::HashMap;
use std::path::Path;

use crate::constant::{END_TOKEN, PAD_INDEX, START_TOKEN};
use crate::error::{CaptionError, Result};

/// Immutable word↔index mapping with reserved start/end markers.
///
/// Construction validates the mapping once; after that every accessor
/// is infallible or returns `Option`, so a `Vocabulary` reference can
/// be shared freely between concurrent decode calls.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    word_to_index: HashMap<String, u32>,
    index_to_word: HashMap<u32, String>,
    start: u32,
    end: u32,
}

impl Vocabulary {
    /// Builds a vocabulary from `(word, index)` entries.
    ///
    /// # Errors
    ///
    /// Returns [`CaptionError::Vocab`] when the start or end marker is
    /// missing, when two words share an index, or when a word maps to
    /// the reserved pad index.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut word_to_index = HashMap::new();
        let mut index_to_word = HashMap::new();

        for (word, index) in entries {
            let word = word.into();
            if index == PAD_INDEX {
                return Err(CaptionError::Vocab(format!(
                    "word {:?} maps to reserved pad index {}",
                    word, PAD_INDEX
                )));
            }
            if let Some(existing) = index_to_word.insert(index, word.clone()) {
                return Err(CaptionError::Vocab(format!(
                    "index {} maps to both {:?} and {:?}",
                    index, existing, word
                )));
            }
            word_to_index.insert(word, index);
        }

        let start = *word_to_index
            .get(START_TOKEN)
            .ok_or_else(|| CaptionError::Vocab(format!("missing {:?} marker", START_TOKEN)))?;
        let end = *word_to_index
            .get(END_TOKEN)
            .ok_or_else(|| CaptionError::Vocab(format!("missing {:?} marker", END_TOKEN)))?;

        Ok(Self {
            word_to_index,
            index_to_word,
            start,
            end,
        })
    }

    /// Parses the persisted JSON word-to-index mapping.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let entries: HashMap<String, u32> = serde_json::from_slice(bytes)?;
        Self::from_entries(entries)
    }

    /// Reads and parses a persisted vocabulary file.
    ///
    /// Intended to run once at process start; the loaded vocabulary is
    /// then reused across all decode calls.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path.as_ref()).await?;
        Self::from_json_slice(&bytes)
    }

    /// Looks up the index for a word.
    pub fn index_of(&self, word: &str) -> Option<u32> {
        self.word_to_index.get(word).copied()
    }

    /// Looks up the word for an index.
    ///
    /// Returns `None` for unmapped indices, including the pad index.
    pub fn word_of(&self, index: u32) -> Option<&str> {
        self.index_to_word.get(&index).map(String::as_str)
    }

    /// Whether an index has a word mapping.
    pub fn contains_index(&self, index: u32) -> bool {
        self.index_to_word.contains_key(&index)
    }

    /// Stable index of the start marker, used to seed the beam.
    pub fn start_index(&self) -> u32 {
        self.start
    }

    /// Stable index of the end marker, used to detect terminal hypotheses.
    pub fn end_index(&self) -> u32 {
        self.end
    }

    /// Number of mapped words (the pad index is not counted).
    pub fn len(&self) -> usize {
        self.index_to_word.len()
    }

    /// Whether the vocabulary has no mapped words.
    pub fn is_empty(&self) -> bool {
        self.index_to_word.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_vocab() -> Vocabulary {
        Vocabulary::from_entries([
            (START_TOKEN, 1),
            (END_TOKEN, 2),
            ("cat", 3),
            ("sat", 4),
        ])
        .unwrap()
    }

    #[test]
    fn test_lookups_round_trip() {
        let vocab = small_vocab();
        assert_eq!(vocab.index_of("cat"), Some(3));
        assert_eq!(vocab.word_of(4), Some("sat"));
        assert_eq!(vocab.start_index(), 1);
        assert_eq!(vocab.end_index(), 2);
        assert_eq!(vocab.len(), 4);
        assert!(!vocab.is_empty());
    }

    #[test]
    fn test_absent_lookups_are_none() {
        let vocab = small_vocab();
        assert_eq!(vocab.index_of("dog"), None);
        assert_eq!(vocab.word_of(99), None);
        assert_eq!(vocab.word_of(PAD_INDEX), None);
        assert!(!vocab.contains_index(99));
    }

    #[test]
    fn test_missing_start_marker_rejected() {
        let result = Vocabulary::from_entries([(END_TOKEN, 2), ("cat", 3)]);
        assert!(matches!(result, Err(CaptionError::Vocab(_))));
    }

    #[test]
    fn test_missing_end_marker_rejected() {
        let result = Vocabulary::from_entries([(START_TOKEN, 1), ("cat", 3)]);
        assert!(matches!(result, Err(CaptionError::Vocab(_))));
    }

    #[test]
    fn test_duplicate_index_rejected() {
        let result = Vocabulary::from_entries([
            (START_TOKEN, 1),
            (END_TOKEN, 2),
            ("cat", 3),
            ("dog", 3),
        ]);
        assert!(matches!(result, Err(CaptionError::Vocab(_))));
    }

    #[test]
    fn test_pad_index_rejected() {
        let result =
            Vocabulary::from_entries([(START_TOKEN, 1), (END_TOKEN, 2), ("cat", PAD_INDEX)]);
        assert!(matches!(result, Err(CaptionError::Vocab(_))));
    }

    #[test]
    fn test_from_json_slice() {
        let json = br#"{"startseq": 1, "endseq": 2, "cat": 3}"#;
        let vocab = Vocabulary::from_json_slice(json).unwrap();
        assert_eq!(vocab.index_of("cat"), Some(3));
    }

    #[test]
    fn test_from_json_slice_rejects_malformed() {
        let result = Vocabulary::from_json_slice(b"not json");
        assert!(matches!(result, Err(CaptionError::Parse(_))));
    }

    #[tokio::test]
    async fn test_load_missing_file_is_io_error() {
        let result = Vocabulary::load("/definitely/not/a/vocab.json").await;
        assert!(matches!(result, Err(CaptionError::Io(_))));
    }
}
