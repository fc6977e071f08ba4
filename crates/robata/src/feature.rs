//! # Feature Boundary
//!
//! The decoder never sees raw images. An upstream extractor maps an
//! image to a fixed-length numeric embedding once per decode call, and
//! the decoder borrows that embedding for the whole search.
//!
//! The extractor itself is opaque to this crate: implementations may
//! wrap a convolutional backbone, a remote service, or a lookup table
//! in tests. A failed extraction surfaces as
//! [`CaptionError::FeatureExtraction`](crate::error::CaptionError::FeatureExtraction)
//! and decoding is never attempted.

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;

/// A fixed-length numeric embedding summarizing one input image.
///
/// Produced once per decode call, treated as immutable input, and
/// passed by reference for the whole search.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Vec<f32>);

impl FeatureVector {
    /// Wraps an already-extracted embedding.
    pub fn new(values: Vec<f32>) -> Self {
        Self(values)
    }

    /// The embedding values.
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Embedding dimensionality.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the embedding is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<f32>> for FeatureVector {
    fn from(values: Vec<f32>) -> Self {
        Self::new(values)
    }
}

/// # FeatureExtractor
///
/// A trait for the opaque image-to-feature function supplied by the
/// embedding application.
///
/// ## Implementation Notes
///
/// - The returned vector must have the dimensionality the caption
///   model was trained against; this crate does not check it.
/// - Failures (unreadable image, I/O error) should be reported as
///   [`CaptionError::FeatureExtraction`](crate::error::CaptionError::FeatureExtraction)
///   so the service layer can surface them without invoking the model.
#[async_trait]
pub trait FeatureExtractor: Send + Sync {
    /// Extracts a feature vector from the image at `path`.
    async fn extract(&self, path: &Path) -> Result<FeatureVector>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_vector_accessors() {
        let features = FeatureVector::new(vec![0.5, -1.0, 2.0]);
        assert_eq!(features.len(), 3);
        assert!(!features.is_empty());
        assert_eq!(features.as_slice(), &[0.5, -1.0, 2.0]);
    }

    #[test]
    fn test_from_vec() {
        let features: FeatureVector = vec![1.0f32].into();
        assert_eq!(features.as_slice(), &[1.0]);
    }
}
