//! # Sequence Model Interface
//!
//! The trait boundary between the beam-search decoder and whatever
//! pretrained model actually scores next tokens. The decoder only ever
//! asks one question: given this image and this partial sequence, how
//! likely is each vocabulary index to come next?

use async_trait::async_trait;

use crate::error::Result;
use crate::feature::FeatureVector;

/// # CaptionModel
///
/// A trait for pretrained sequence models that predict the next caption
/// token from an image embedding and the tokens generated so far.
///
/// ## Input Contract
///
/// * `features` - The fixed-length image embedding, identical across
///   every call within one decode.
/// * `padded_tokens` - The hypothesis's token indices, right-padded
///   with the pad index to the decoder's configured fixed width. The
///   padding is semantically null; models are expected to assign it
///   negligible probability.
///
/// ## Output Contract
///
/// A dense distribution over the vocabulary: one non-negative entry per
/// vocabulary index, summing to approximately one. The decoder rejects
/// empty distributions and non-finite or negative entries, aborting
/// that decode call with
/// [`CaptionError::Inference`](crate::error::CaptionError::Inference).
///
/// ## Usage Context
///
/// The decoder calls this up to `max_length * beam_width` times per
/// decode, concurrently for independent hypotheses within one
/// expansion step. Implementations must therefore be `Send + Sync` and
/// safe to invoke many times against shared read-only weights.
///
/// ## Async Behavior
///
/// The method is asynchronous to allow for non-blocking execution,
/// which matters for models backed by remote calls or significant
/// compute that should not block the executor.
#[async_trait]
pub trait CaptionModel: Send + Sync {
    /// Returns the next-token probability distribution for one
    /// partial sequence.
    ///
    /// # Errors
    ///
    /// Any failure aborts the whole decode call; implementations
    /// should report model faults as
    /// [`CaptionError::Inference`](crate::error::CaptionError::Inference).
    async fn next_token_distribution(
        &self,
        features: &FeatureVector,
        padded_tokens: &[u32],
    ) -> Result<Vec<f32>>;
}
