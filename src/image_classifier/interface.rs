use crate::error::ClassifyError;
use crate::ripeness::RawPrediction;
use async_trait::async_trait;
use tract_onnx::prelude::Tensor;

/// Inference handle. Only the length of the returned score vector is interpreted.
#[async_trait]
pub trait ImageClassifier {
    /// Takes ownership of the input tensor so it is released on every exit path.
    async fn predict(&self, input: Tensor) -> Result<RawPrediction, ClassifyError>;

    fn name(&self) -> &'static str;
}
