//! # Error Types

/// Errors from caption decoding and the resources it depends on.
#[derive(Debug, thiserror::Error)]
pub enum CaptionError {
    /// The service was started without a usable model or vocabulary;
    /// every decode attempt fails fast with this variant.
    #[error("captioning unavailable: {0}")]
    Unavailable(String),

    /// A persisted resource (vocabulary or model artifact) failed to load.
    #[error("resource load failed: {0}")]
    ResourceLoad(String),

    /// Vocabulary data is inconsistent (missing markers, duplicate indices).
    #[error("invalid vocabulary: {0}")]
    Vocab(String),

    /// Decoder configuration is out of range.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The upstream image-to-feature step failed; decoding is never attempted.
    #[error("feature extraction failed: {0}")]
    FeatureExtraction(String),

    /// The sequence model failed or returned a malformed distribution
    /// mid-decode; the whole decode call is aborted.
    #[error("inference failed: {0}")]
    Inference(String),

    /// I/O error while reading a persisted resource.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Deserialization error while parsing a persisted resource.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for robata operations.
pub type Result<T> = std::result::Result<T, CaptionError>;
