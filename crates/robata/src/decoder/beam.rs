use futures::future;
use log::{debug, warn};
use uuid::Uuid;

use super::config::DecoderConfig;
use super::hypothesis::Hypothesis;
use crate::error::{CaptionError, Result};
use crate::feature::FeatureVector;
use crate::model::CaptionModel;
use crate::vocab::Vocabulary;

/// The beam-search loop over one decode call.
///
/// A decoder holds only configuration; all per-call state lives on the
/// stack of [`decode`](Self::decode), so one decoder can serve
/// concurrent decode calls against shared read-only model and
/// vocabulary state.
pub struct BeamSearchDecoder {
    config: DecoderConfig,
}

impl BeamSearchDecoder {
    /// Creates a decoder, validating the configuration bounds.
    pub fn new(config: DecoderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this decoder runs with.
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Runs the search and returns the winning hypothesis.
    ///
    /// The beam is seeded with the vocabulary's start marker, expanded
    /// exactly `max_length` times, and the lowest-score survivor wins.
    /// Termination is driven purely by the step bound, so the result
    /// may lack an end marker; the renderer handles that case and a
    /// warning is logged.
    ///
    /// # Errors
    ///
    /// [`CaptionError::Inference`] if the model fails or returns a
    /// malformed distribution at any step. No partial result is
    /// returned.
    pub async fn decode<M>(
        &self,
        model: &M,
        vocab: &Vocabulary,
        features: &FeatureVector,
    ) -> Result<Hypothesis>
    where
        M: CaptionModel,
    {
        let request = Uuid::new_v4();
        let end_index = vocab.end_index();
        let mut beam = vec![Hypothesis::seed(vocab.start_index())];

        for _ in 0..self.config.max_length {
            // Hypotheses within one step are independent reads of
            // shared state; score them concurrently, then pool.
            let expansions = beam
                .iter()
                .map(|hypothesis| self.expand(model, features, hypothesis, end_index));
            let mut pool: Vec<Hypothesis> = future::try_join_all(expansions)
                .await?
                .into_iter()
                .flatten()
                .collect();

            pool.sort_by(|a, b| a.score().total_cmp(&b.score()));
            pool.truncate(self.config.beam_width);
            beam = pool;
        }

        // The pool is never empty: a terminal hypothesis carries itself
        // forward and a live one contributes at least one extension.
        let best = beam
            .into_iter()
            .next()
            .ok_or_else(|| CaptionError::Inference("beam emptied during decode".into()))?;

        if !best.is_terminal(end_index) {
            warn!(
                "decode {}: hit the {}-step bound without an end marker",
                request, self.config.max_length
            );
        }
        debug!(
            "decode {}: {} tokens, score {:.3}",
            request,
            best.tokens().len(),
            best.score()
        );

        Ok(best)
    }

    /// Produces the candidate set one hypothesis contributes to the
    /// step's pool: itself if finished, otherwise its `beam_width`
    /// most probable extensions.
    async fn expand<M>(
        &self,
        model: &M,
        features: &FeatureVector,
        hypothesis: &Hypothesis,
        end_index: u32,
    ) -> Result<Vec<Hypothesis>>
    where
        M: CaptionModel,
    {
        if hypothesis.is_terminal(end_index) {
            // Finished hypotheses still compete on score against live
            // ones and may be pruned by better competitors.
            return Ok(vec![hypothesis.clone()]);
        }

        let padded = hypothesis.padded(self.config.max_length);
        let distribution = model.next_token_distribution(features, &padded).await?;
        validate_distribution(&distribution)?;

        let k = self.config.beam_width.min(distribution.len());
        Ok(top_indices(&distribution, k)
            .into_iter()
            .map(|index| hypothesis.extended(index as u32, distribution[index]))
            .collect())
    }
}

fn validate_distribution(distribution: &[f32]) -> Result<()> {
    if distribution.is_empty() {
        return Err(CaptionError::Inference(
            "model returned an empty distribution".into(),
        ));
    }
    for (index, &probability) in distribution.iter().enumerate() {
        if !probability.is_finite() || probability < 0.0 {
            return Err(CaptionError::Inference(format!(
                "malformed probability {} at index {}",
                probability, index
            )));
        }
    }
    Ok(())
}

/// Indices of the `k` highest-probability entries, most probable first.
/// The sort is stable, so equal probabilities keep ascending index
/// order.
fn top_indices(distribution: &[f32], k: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..distribution.len()).collect();
    indices.sort_by(|&a, &b| distribution[b].total_cmp(&distribution[a]));
    indices.truncate(k);
    indices
}
