use crate::error::ClassifyError;
use crate::image_classifier::interface::ImageClassifier;
use crate::ripeness::RawPrediction;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use tract_onnx::prelude::Tensor;

/// Returns scripted scores, or a scripted failure.
pub struct ImageClassifierFake {
    outcome: Result<Vec<f32>, String>,
    calls: AtomicUsize,
}

impl ImageClassifierFake {
    pub fn new(scores: Vec<f32>) -> Self {
        Self {
            outcome: Ok(scores),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            outcome: Err(reason.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageClassifier for ImageClassifierFake {
    async fn predict(&self, input: Tensor) -> Result<RawPrediction, ClassifyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        drop(input);

        match &self.outcome {
            Ok(scores) => Ok(RawPrediction::new(scores.clone())),
            Err(reason) => Err(ClassifyError::Inference(reason.clone())),
        }
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}
