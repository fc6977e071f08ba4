//! # Robata
//!
//! A beam-search caption decoding library for driving pretrained
//! image captioning models.
//!
//! ## Overview
//!
//! This library turns an already-extracted image feature vector into a
//! natural-language caption by managing a bounded set of
//! partial-sequence hypotheses, scoring them with log-probabilities
//! against a sequence model, and terminating at a fixed step bound.
//!
//! Key components include:
//!
//! - A vocabulary mapping caption words to token indices, with
//!   reserved start/end markers
//! - A trait boundary for pretrained next-token models
//! - A beam-search decoder over hypotheses scored by cumulative
//!   negative log-likelihood
//! - A renderer turning winning token sequences into caption strings
//! - A service layer that degrades to "unavailable" when resources
//!   fail to load at startup
//!
//! ## Architecture
//!
//! ### Assumptions
//!
//! Regardless of model used, robata reserves two vocabulary meanings:
//!  - Index `0` is reserved for padding and never maps to a word
//!  - The `startseq`/`endseq` markers bound every decoded sequence
//!
//! ### Model Trait
//!
//! The [`model::CaptionModel`] trait defines the interface any
//! pretrained sequence model must satisfy. The decoder stays
//! independent of how the model is actually executed; the optional
//! `candle` feature ships adapters for models backed by Candle
//! tensors.
//!
//! ### Decoding
//!
//! The [`decoder::BeamSearchDecoder`] holds only configuration; all
//! per-call search state is local to the call, so one decoder serves
//! concurrent captions against shared read-only model and vocabulary
//! state.
//!
//! ## Features
//!
//! - **candle** - Enables Candle tensor adapters
//!
//! # Example
//!
//! ```rust
//! use robata::decoder::DecoderConfig;
//! use robata::error::Result;
//! use robata::feature::FeatureVector;
//! use robata::model::CaptionModel;
//! use robata::service::Captioner;
//! use robata::vocab::Vocabulary;
//! use async_trait::async_trait;
//!
//! struct Model {}
//!
//! #[async_trait]
//! impl CaptionModel for Model {
//!     async fn next_token_distribution(
//!         &self,
//!         _features: &FeatureVector,
//!         padded_tokens: &[u32],
//!     ) -> Result<Vec<f32>> {
//!         let last = padded_tokens
//!             .iter()
//!             .rev()
//!             .find(|&&token| token != 0)
//!             .copied()
//!             .unwrap_or(0);
//!         // predict "dog" after the start marker, then stop
//!         let mut distribution = vec![0.0f32; 4];
//!         if last == 1 {
//!             distribution[3] = 0.9;
//!             distribution[2] = 0.1;
//!         } else {
//!             distribution[2] = 0.9;
//!             distribution[3] = 0.1;
//!         }
//!         Ok(distribution)
//!     }
//! }
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! let vocab = Vocabulary::from_entries([
//!     ("startseq", 1),
//!     ("endseq", 2),
//!     ("dog", 3),
//! ])?;
//! let captioner = Captioner::new(Model {}, vocab, DecoderConfig::default())?;
//!
//! let features = FeatureVector::new(vec![0.0; 2048]);
//! let caption = captioner.caption(&features).await?;
//! assert_eq!(caption, "dog");
//! # Ok(())
//! # }
//! ```
//!
//! ## Implementation Details
//!
//! The decoder expands the beam exactly `max_length` times. Hypotheses
//! that reach the end marker are carried through later steps unchanged
//! and still compete on cumulative score, so a short confident caption
//! can be pruned by better competitors. After the final step the
//! lowest-score hypothesis wins whether or not it terminated, and the
//! renderer strips markers and drops unmapped indices.
//!
//! Model and vocabulary state is read-only after load and shared
//! across concurrent decode calls; per-call failures never corrupt or
//! block subsequent calls.

pub mod constant;
pub mod decoder;
pub mod error;
pub mod feature;
pub mod model;
pub mod render;
pub mod service;
pub mod vocab;

#[cfg_attr(docsrs, doc(cfg(feature = "candle")))]
#[cfg(feature = "candle")]
pub mod backend;
