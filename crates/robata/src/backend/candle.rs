use candle_core::{DType, Device, Tensor};

use crate::error::{CaptionError, Result};
use crate::feature::FeatureVector;

/// Flattens a tensor of image-embedding values into a [`FeatureVector`].
///
/// Accepts any shape (extractors commonly emit `(1, dim)`); conversion
/// failures map to [`CaptionError::FeatureExtraction`].
pub fn feature_vector(tensor: &Tensor) -> Result<FeatureVector> {
    let values = tensor
        .flatten_all()
        .and_then(|t| t.to_dtype(DType::F32))
        .and_then(|t| t.to_vec1::<f32>())
        .map_err(|err| CaptionError::FeatureExtraction(err.to_string()))?;
    Ok(FeatureVector::new(values))
}

/// Flattens a tensor of next-token probabilities into the dense
/// distribution the decoder expects.
///
/// Conversion failures map to [`CaptionError::Inference`], which aborts
/// the decode the same way a model fault would.
pub fn distribution(tensor: &Tensor) -> Result<Vec<f32>> {
    tensor
        .flatten_all()
        .and_then(|t| t.to_dtype(DType::F32))
        .and_then(|t| t.to_vec1::<f32>())
        .map_err(|err| CaptionError::Inference(err.to_string()))
}

/// Builds the model-input token tensor from a padded index sequence.
pub fn token_tensor(padded_tokens: &[u32], device: &Device) -> Result<Tensor> {
    Tensor::new(padded_tokens, device).map_err(|err| CaptionError::Inference(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_vector_flattens_batch_dim() {
        let device = Device::Cpu;
        let tensor = Tensor::from_slice(&[1.0f32, 2.0, 3.0, 4.0], (1, 4), &device).unwrap();
        let features = feature_vector(&tensor).unwrap();
        assert_eq!(features.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_distribution_round_trip() {
        let device = Device::Cpu;
        let tensor = Tensor::from_slice(&[0.1f32, 0.7, 0.2], (3,), &device).unwrap();
        assert_eq!(distribution(&tensor).unwrap(), vec![0.1, 0.7, 0.2]);
    }

    #[test]
    fn test_token_tensor_shape() {
        let device = Device::Cpu;
        let tensor = token_tensor(&[1, 3, 0, 0], &device).unwrap();
        assert_eq!(tensor.dims(), &[4]);
        assert_eq!(tensor.to_vec1::<u32>().unwrap(), vec![1, 3, 0, 0]);
    }
}
