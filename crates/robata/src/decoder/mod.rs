//! # Beam Search Decoding
//!
//! A module for decoding caption token sequences from a pretrained
//! sequence model with beam search.
//!
//! ## Overview
//!
//! Beam search maintains a bounded set of partial-sequence hypotheses
//! and expands them token-by-token against the model's next-token
//! distribution. Each hypothesis carries a cumulative score (the sum of
//! negative log-probabilities along its chosen tokens; lower is
//! better), so summing logs keeps the search numerically stable where
//! multiplying probabilities would underflow.
//!
//! ## Key Components
//!
//! * [`Hypothesis`] - One candidate partial-or-complete sequence with
//!   its cumulative score
//! * [`DecoderConfig`] - Beam width and fixed length bound
//! * [`BeamSearchDecoder`] - The search loop itself
//!
//! ## Algorithm
//!
//! 1. **Seed**: one hypothesis holding only the start marker, score 0.
//! 2. **Expand**, `max_length` times: every hypothesis whose last token
//!    is the end marker is carried into the candidate pool unchanged;
//!    every other hypothesis queries the model with its right-padded
//!    sequence and contributes its `beam_width` most probable
//!    extensions. The pool is sorted by ascending score and truncated
//!    to `beam_width`.
//! 3. **Finalize**: after exactly `max_length` steps the lowest-score
//!    hypothesis wins, whether or not it ever reached the end marker.
//!
//! Carrying finished hypotheses through the pool means a short,
//! confident sequence still competes on cumulative score against live
//! ones and can be pruned by better competitors; comparison is by
//! score, not length.
//!
//! ## Concurrency
//!
//! Expansion steps are sequential by data dependency, but hypotheses
//! within one step are independent reads of shared read-only state and
//! are scored concurrently. Pooling and truncation remain the single
//! synchronization point before the next step.

mod beam;
mod config;
mod hypothesis;

pub use beam::BeamSearchDecoder;
pub use config::DecoderConfig;
pub use hypothesis::Hypothesis;
