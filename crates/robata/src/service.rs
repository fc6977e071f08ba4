//! # Caption Service
//!
//! The read-only context object callers hold for the lifetime of the
//! process: model, vocabulary, and decoder bundled together, loaded
//! once at startup and shared across concurrent decode calls.
//!
//! Startup is allowed to fail without crashing the process. A service
//! built from failed load results degrades to "unavailable": the
//! failures are logged and every caption attempt fails fast with
//! [`CaptionError::Unavailable`] instead of running against null state.

use std::path::Path;

use log::error;

use crate::decoder::{BeamSearchDecoder, DecoderConfig};
use crate::error::{CaptionError, Result};
use crate::feature::{FeatureExtractor, FeatureVector};
use crate::model::CaptionModel;
use crate::render::render;
use crate::vocab::Vocabulary;

/// A loaded model, vocabulary, and decoder, ready to caption feature
/// vectors.
///
/// All fields are read-only after construction, so a `Captioner` can
/// be shared behind an `Arc` by concurrent callers; each decode call
/// keeps its own beam state.
pub struct Captioner<M> {
    model: M,
    vocab: Vocabulary,
    decoder: BeamSearchDecoder,
}

impl<M> Captioner<M>
where
    M: CaptionModel,
{
    /// Bundles a loaded model and vocabulary with a decoder.
    ///
    /// # Errors
    ///
    /// [`CaptionError::Config`] if the decoder configuration is out of
    /// range.
    pub fn new(model: M, vocab: Vocabulary, config: DecoderConfig) -> Result<Self> {
        Ok(Self {
            model,
            vocab,
            decoder: BeamSearchDecoder::new(config)?,
        })
    }

    /// The vocabulary this captioner decodes against.
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Decodes a caption for an already-extracted feature vector.
    pub async fn caption(&self, features: &FeatureVector) -> Result<String> {
        let best = self
            .decoder
            .decode(&self.model, &self.vocab, features)
            .await?;
        Ok(render(&self.vocab, best.tokens()))
    }
}

/// The full image-to-caption pipeline: feature extraction in front of
/// a [`Captioner`], with startup-failure degradation.
pub struct CaptionService<M, X> {
    captioner: Option<Captioner<M>>,
    extractor: X,
}

impl<M, X> CaptionService<M, X>
where
    M: CaptionModel,
    X: FeatureExtractor,
{
    /// A fully loaded service.
    pub fn new(extractor: X, captioner: Captioner<M>) -> Self {
        Self {
            captioner: Some(captioner),
            extractor,
        }
    }

    /// A service whose resources never loaded; every caption attempt
    /// fails fast with [`CaptionError::Unavailable`].
    pub fn degraded(extractor: X) -> Self {
        Self {
            captioner: None,
            extractor,
        }
    }

    /// Consumes the startup load results, logging any failure and
    /// degrading the service rather than propagating it.
    ///
    /// Intended to wrap process start: the embedding application loads
    /// the model artifact and the vocabulary file however it likes and
    /// hands both results here.
    pub fn from_load_results(
        extractor: X,
        model: Result<M>,
        vocab: Result<Vocabulary>,
        config: DecoderConfig,
    ) -> Self {
        let captioner = match (model, vocab) {
            (Ok(model), Ok(vocab)) => match Captioner::new(model, vocab, config) {
                Ok(captioner) => Some(captioner),
                Err(err) => {
                    error!("captioner construction failed: {}", err);
                    None
                }
            },
            (model, vocab) => {
                if let Err(err) = &model {
                    error!("caption model failed to load: {}", err);
                }
                if let Err(err) = &vocab {
                    error!("vocabulary failed to load: {}", err);
                }
                None
            }
        };
        Self {
            captioner,
            extractor,
        }
    }

    /// Whether the service loaded its resources and can decode.
    pub fn is_available(&self) -> bool {
        self.captioner.is_some()
    }

    /// Captions the image at `path`: extract features, then decode.
    ///
    /// # Errors
    ///
    /// * [`CaptionError::Unavailable`] if resources never loaded; the
    ///   extractor is not invoked.
    /// * [`CaptionError::FeatureExtraction`] if the extractor fails;
    ///   the model is not invoked.
    /// * [`CaptionError::Inference`] if the model fails mid-decode.
    ///
    /// Per-call failures leave the service usable for subsequent calls.
    pub async fn caption_image(&self, path: &Path) -> Result<String> {
        let captioner = self.captioner.as_ref().ok_or_else(|| {
            CaptionError::Unavailable("model or vocabulary failed to load".into())
        })?;
        let features = self.extractor.extract(path).await?;
        captioner.caption(&features).await
    }
}
