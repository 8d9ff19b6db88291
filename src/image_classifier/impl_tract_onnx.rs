use crate::error::{ClassifyError, LoadError};
use crate::image_classifier::interface::ImageClassifier;
use crate::ripeness::RawPrediction;
use async_trait::async_trait;
use std::path::Path;
use tract_onnx::prelude::*;

pub struct ImageClassifierTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
}

impl ImageClassifierTractOnnx {
    pub fn new(model_path: &Path, input_size: u32) -> Result<Self, LoadError> {
        let side = input_size as usize;
        let model = tract_onnx::onnx()
            .model_for_path(model_path)
            .and_then(|model| {
                model.with_input_fact(
                    0,
                    InferenceFact::dt_shape(f32::datum_type(), tvec!(1, side, side, 3)),
                )
            })
            .and_then(|model| model.into_optimized())
            .and_then(|model| model.into_runnable())
            .map_err(|e| LoadError::Model {
                path: model_path.to_path_buf(),
                reason: e.to_string(),
            })?;

        Ok(Self { model })
    }
}

#[async_trait]
impl ImageClassifier for ImageClassifierTractOnnx {
    async fn predict(&self, input: Tensor) -> Result<RawPrediction, ClassifyError> {
        let outputs = self
            .model
            .run(tvec!(input.into_tvalue()))
            .map_err(|e| ClassifyError::Inference(e.to_string()))?;

        let output = outputs
            .first()
            .ok_or_else(|| ClassifyError::Inference("model produced no outputs".to_string()))?
            .to_array_view::<f32>()
            .map_err(|e| ClassifyError::Inference(e.to_string()))?;

        Ok(RawPrediction::new(output.iter().copied().collect()))
    }

    fn name(&self) -> &'static str {
        "tract-onnx"
    }
}
