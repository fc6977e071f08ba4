//! # Tensor Backend Adapters
//!
//! Conversions between tensor-library types and the plain vectors the
//! decoder works with, so a model implementation backed by a tensor
//! framework only has to shuttle data across the trait boundary.
//!
//! ## Feature Flags
//!
//! - `candle`: Enables adapters for the Candle tensor library

/// Candle tensor adapter implementation.
///
/// This module is only available when the `candle` feature flag is
/// enabled. It converts between `candle_core::Tensor` and the crate's
/// feature-vector and distribution representations.
pub mod candle;
