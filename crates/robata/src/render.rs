//! # Sequence-to-Text Rendering
//!
//! Turns a finished token-index sequence back into a human-readable
//! caption. Rendering is deterministic and total: control markers are
//! stripped, unmapped indices are dropped, and nothing here can fail a
//! decode that already succeeded.

use crate::vocab::Vocabulary;

/// Renders a token-index sequence as a caption string.
///
/// Tokens are visited in order: the start marker and any index without
/// a word mapping are skipped, iteration stops before the first end
/// marker, and the remaining words are joined with single spaces.
/// Tokens after an end marker are never rendered. A sequence that ran
/// to the length bound without an end marker renders in full.
pub fn render(vocab: &Vocabulary, tokens: &[u32]) -> String {
    let mut words = Vec::new();
    for &index in tokens {
        if index == vocab.end_index() {
            break;
        }
        if index == vocab.start_index() {
            continue;
        }
        if let Some(word) = vocab.word_of(index) {
            words.push(word);
        }
    }
    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::{END_TOKEN, PAD_INDEX, START_TOKEN};

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
    fn test_markers_stripped_and_tail_ignored() {
        let vocab = small_vocab();
        // tokens after the end marker are never rendered
        assert_eq!(render(&vocab, &[1, 3, 4, 2, 3]), "cat sat");
    }

    #[test]
    fn test_absent_index_dropped() {
        let vocab = small_vocab();
        assert_eq!(render(&vocab, &[1, 99, 4, 2]), "sat");
        assert_eq!(render(&vocab, &[1, PAD_INDEX, 3, 2]), "cat");
    }

    #[test]
    fn test_sequence_without_end_marker_renders_in_full() {
        let vocab = small_vocab();
        assert_eq!(render(&vocab, &[1, 3, 4, 3]), "cat sat cat");
    }

    #[test]
    fn test_empty_and_markers_only() {
        let vocab = small_vocab();
        assert_eq!(render(&vocab, &[]), "");
        assert_eq!(render(&vocab, &[1, 2]), "");
    }
}
