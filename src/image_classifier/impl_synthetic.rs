use crate::error::ClassifyError;
use crate::image_classifier::interface::ImageClassifier;
use crate::ripeness::{RawPrediction, RipenessCategory};
use async_trait::async_trait;
use rand::Rng;
use tract_onnx::prelude::Tensor;

/// Stand-in used when no model artifact could be loaded. Produces four-way scores with one
/// randomly chosen category dominant so downstream stages keep running.
pub struct ImageClassifierSynthetic {}

impl ImageClassifierSynthetic {
    pub fn new() -> Self {
        Self {}
    }

    pub fn biased_scores(&self, favored: RipenessCategory) -> Vec<f32> {
        let mut rng = rand::rng();

        let dominant: f32 = rng.random_range(0.55..0.95);
        let mut rest: Vec<f32> = (0..3).map(|_| rng.random_range(0.01..1.0)).collect();
        let total: f32 = rest.iter().sum();
        for share in rest.iter_mut() {
            *share = *share / total * (1.0 - dominant);
        }

        let mut rest = rest.into_iter();
        RipenessCategory::ALL
            .iter()
            .map(|category| {
                if *category == favored {
                    dominant
                } else {
                    rest.next().unwrap_or(0.0)
                }
            })
            .collect()
    }
}

impl Default for ImageClassifierSynthetic {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageClassifier for ImageClassifierSynthetic {
    async fn predict(&self, input: Tensor) -> Result<RawPrediction, ClassifyError> {
        drop(input);

        let favored = {
            let mut rng = rand::rng();
            RipenessCategory::ALL[rng.random_range(0..RipenessCategory::ALL.len())]
        };

        Ok(RawPrediction::new(self.biased_scores(favored)))
    }

    fn name(&self) -> &'static str {
        "synthetic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ripeness::map_prediction;

    #[test]
    fn test_biased_scores_favor_category() {
        let classifier = ImageClassifierSynthetic::new();

        for category in RipenessCategory::ALL {
            let scores = classifier.biased_scores(category);
            assert_eq!(scores.len(), 4);
            assert!((scores.iter().sum::<f32>() - 1.0).abs() < 1e-4);

            let mapped = map_prediction(&RawPrediction::new(scores)).unwrap();
            assert_eq!(mapped.ripeness, category);
        }
    }

    #[tokio::test]
    async fn test_predict_yields_four_scores() {
        let classifier = ImageClassifierSynthetic::new();
        let input = Tensor::zero::<f32>(&[1, 224, 224, 3]).unwrap();

        let prediction = classifier.predict(input).await.unwrap();

        assert_eq!(prediction.scores.len(), 4);
    }
}
