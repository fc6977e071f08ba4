use crate::constant::{PAD_INDEX, PROB_FLOOR};

/// One candidate caption: an ordered token-index sequence starting with
/// the start marker, paired with its cumulative score.
///
/// The score is the sum of `-ln(p + PROB_FLOOR)` over the chosen
/// tokens, so lower is better and a zero-probability token still
/// contributes a finite penalty.
///
/// Hypotheses are never mutated in place: [`extended`](Self::extended)
/// produces a new value, and a finished hypothesis passes through
/// expansion steps unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Hypothesis {
    tokens: Vec<u32>,
    score: f32,
}

impl Hypothesis {
    /// The single hypothesis a beam is seeded with: just the start
    /// marker, score zero.
    pub(crate) fn seed(start_index: u32) -> Self {
        Self {
            tokens: vec![start_index],
            score: 0.0,
        }
    }

    /// The token-index sequence, in generation order.
    pub fn tokens(&self) -> &[u32] {
        &self.tokens
    }

    /// Cumulative negative-log-likelihood score; lower is better.
    pub fn score(&self) -> f32 {
        self.score
    }

    /// Consumes the hypothesis, yielding its token sequence.
    pub fn into_tokens(self) -> Vec<u32> {
        self.tokens
    }

    /// The most recently appended token. Never panics: a hypothesis
    /// holds at least its seed token.
    pub fn last_token(&self) -> u32 {
        *self.tokens.last().unwrap_or(&PAD_INDEX)
    }

    /// Whether the hypothesis ends with the end marker and must not be
    /// expanded further.
    pub(crate) fn is_terminal(&self, end_index: u32) -> bool {
        self.last_token() == end_index
    }

    /// A new hypothesis with `index` appended and the score increased
    /// by that token's negative log-probability.
    pub(crate) fn extended(&self, index: u32, probability: f32) -> Self {
        let mut tokens = Vec::with_capacity(self.tokens.len() + 1);
        tokens.extend_from_slice(&self.tokens);
        tokens.push(index);
        Self {
            tokens,
            score: self.score - (probability + PROB_FLOOR).ln(),
        }
    }

    /// The sequence right-padded with the pad index to `width`, the
    /// fixed-width model input. A sequence already at or past `width`
    /// keeps its most recent `width` tokens.
    pub(crate) fn padded(&self, width: usize) -> Vec<u32> {
        let start = self.tokens.len().saturating_sub(width);
        let mut padded = Vec::with_capacity(width);
        padded.extend_from_slice(&self.tokens[start..]);
        padded.resize(width, PAD_INDEX);
        padded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed() {
        let hypothesis = Hypothesis::seed(1);
        assert_eq!(hypothesis.tokens(), &[1]);
        assert_eq!(hypothesis.score(), 0.0);
        assert_eq!(hypothesis.last_token(), 1);
    }

    #[test]
    fn test_extended_is_a_new_value() {
        let seed = Hypothesis::seed(1);
        let extended = seed.extended(3, 0.5);

        assert_eq!(seed.tokens(), &[1]);
        assert_eq!(extended.tokens(), &[1, 3]);
        assert_eq!(extended.last_token(), 3);
    }

    #[test]
    fn test_extended_accumulates_negative_log_probability() {
        let hypothesis = Hypothesis::seed(1).extended(3, 0.5).extended(4, 0.25);
        let expected = -(0.5f32 + PROB_FLOOR).ln() - (0.25f32 + PROB_FLOOR).ln();
        assert!((hypothesis.score() - expected).abs() < 1e-6);
    }

    #[test]
    fn test_zero_probability_score_is_finite() {
        let hypothesis = Hypothesis::seed(1).extended(3, 0.0);
        assert!(hypothesis.score().is_finite());
        assert!(hypothesis.score() > 0.0);
    }

    #[test]
    fn test_is_terminal() {
        let live = Hypothesis::seed(1).extended(3, 0.5);
        let finished = live.extended(2, 0.5);
        assert!(!live.is_terminal(2));
        assert!(finished.is_terminal(2));
    }

    #[test]
    fn test_padded_right_pads_with_pad_index() {
        let hypothesis = Hypothesis::seed(1).extended(3, 0.5);
        assert_eq!(hypothesis.padded(5), vec![1, 3, PAD_INDEX, PAD_INDEX, PAD_INDEX]);
    }

    #[test]
    fn test_padded_keeps_most_recent_tokens_when_over_width() {
        let hypothesis = Hypothesis::seed(1)
            .extended(3, 0.5)
            .extended(4, 0.5)
            .extended(5, 0.5);
        assert_eq!(hypothesis.padded(2), vec![4, 5]);
    }

    #[test]
    fn test_padded_exact_width_is_unchanged() {
        let hypothesis = Hypothesis::seed(1).extended(3, 0.5);
        assert_eq!(hypothesis.padded(2), vec![1, 3]);
    }

    #[test]
    fn test_into_tokens() {
        let hypothesis = Hypothesis::seed(1).extended(3, 0.5);
        assert_eq!(hypothesis.into_tokens(), vec![1, 3]);
    }
}
