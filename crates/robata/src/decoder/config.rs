use serde::{Deserialize, Serialize};

use crate::constant::{DEFAULT_BEAM_WIDTH, DEFAULT_MAX_LENGTH};
use crate::error::{CaptionError, Result};

/// Configuration for one [`BeamSearchDecoder`](super::BeamSearchDecoder).
///
/// Both values are configuration, not computed: `max_length` must match
/// the fixed input width the caption model was trained with, and
/// `beam_width` trades caption quality against up to
/// `max_length * beam_width` model calls per decode.
///
/// Serde support lets the embedding application read the config from
/// its own configuration files; missing fields fall back to the crate
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoderConfig {
    /// Number of hypotheses retained at each decoding step.
    #[serde(default = "default_beam_width")]
    pub beam_width: usize,

    /// Fixed model input width and upper bound on expansion steps.
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

fn default_beam_width() -> usize {
    DEFAULT_BEAM_WIDTH
}

fn default_max_length() -> usize {
    DEFAULT_MAX_LENGTH
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            beam_width: DEFAULT_BEAM_WIDTH,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl DecoderConfig {
    /// Checks that both bounds are at least one.
    pub fn validate(&self) -> Result<()> {
        if self.beam_width == 0 {
            return Err(CaptionError::Config("beam_width must be >= 1".into()));
        }
        if self.max_length == 0 {
            return Err(CaptionError::Config("max_length must be >= 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DecoderConfig::default();
        assert_eq!(config.beam_width, 3);
        assert_eq!(config.max_length, 84);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_bounds_rejected() {
        let config = DecoderConfig {
            beam_width: 0,
            max_length: 84,
        };
        assert!(matches!(config.validate(), Err(CaptionError::Config(_))));

        let config = DecoderConfig {
            beam_width: 3,
            max_length: 0,
        };
        assert!(matches!(config.validate(), Err(CaptionError::Config(_))));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: DecoderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, DecoderConfig::default());

        let config: DecoderConfig = serde_json::from_str(r#"{"beam_width": 5}"#).unwrap();
        assert_eq!(config.beam_width, 5);
        assert_eq!(config.max_length, 84);
    }
}
