use crate::config::Config;
use crate::image_classifier::impl_synthetic::ImageClassifierSynthetic;
use crate::image_classifier::impl_tract_onnx::ImageClassifierTractOnnx;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use std::sync::Arc;

/// Never fails: a missing or corrupt artifact degrades to the synthetic classifier.
pub fn load_image_classifier(
    config: &Config,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Arc<dyn ImageClassifier + Send + Sync> {
    let logger = logger.with_namespace("image_classifier");

    if config.force_synthetic {
        let _ = logger.info("Synthetic classifier requested");
        return Arc::new(ImageClassifierSynthetic::new());
    }

    let _ = logger.info(&format!("Loading model from {}", config.model_path.display()));

    match ImageClassifierTractOnnx::new(&config.model_path, config.input_size) {
        Ok(classifier) => {
            let _ = logger.info("Model loaded");
            Arc::new(classifier)
        }
        Err(e) => {
            let _ = logger.warn(&format!("{}. Falling back to synthetic classifier", e));
            Arc::new(ImageClassifierSynthetic::new())
        }
    }
}
