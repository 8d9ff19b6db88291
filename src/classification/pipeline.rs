use crate::catalog::{Catalog, MetadataEnricher};
use crate::classification::assembler::assemble;
use crate::classification::history::HistoryBuffer;
use crate::classification::notifier::Notifier;
use crate::classification::result::ClassificationResult;
use crate::config::Config;
use crate::error::ClassifyError;
use crate::image_classifier::interface::ImageClassifier;
use crate::image_classifier::load::load_image_classifier;
use crate::image_classifier::tract::image::{decode_image, normalize_image};
use crate::library::logger::interface::Logger;
use crate::ripeness::map_prediction;
use image::DynamicImage;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::Receiver;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifyStage {
    Idle,
    Preprocessing,
    Inferring,
    Mapping,
    Enriching,
    Emitted,
}

impl fmt::Display for ClassifyStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClassifyStage::Idle => "idle",
            ClassifyStage::Preprocessing => "preprocessing",
            ClassifyStage::Inferring => "inferring",
            ClassifyStage::Mapping => "mapping",
            ClassifyStage::Enriching => "enriching",
            ClassifyStage::Emitted => "emitted",
        };
        f.write_str(name)
    }
}

/// Everything a classification call needs, owned by the caller instead of living in globals.
/// Calls may overlap; only the history, notifier and catalog cache are shared between them.
pub struct FruitPipeline {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    enricher: MetadataEnricher,
    notifier: Notifier,
    history: HistoryBuffer,
    next_call: AtomicU64,
}

impl FruitPipeline {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
        catalog: Catalog,
    ) -> Self {
        let history = HistoryBuffer::new(config.history_capacity);
        Self {
            logger: logger.with_namespace("pipeline"),
            image_classifier,
            enricher: MetadataEnricher::new(catalog),
            notifier: Notifier::new(),
            history,
            next_call: AtomicU64::new(1),
            config,
        }
    }

    /// Loads the model and catalog named in the config. Both degrade instead of failing.
    pub fn load(config: Config, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        let image_classifier = load_image_classifier(&config, Arc::clone(&logger));

        let catalog_logger = logger.with_namespace("catalog");
        let catalog = Catalog::load(&config.catalog_path, catalog_logger.as_ref());
        catalog.check_model_metadata(config.input_size, catalog_logger.as_ref());

        Self::new(config, logger, image_classifier, catalog)
    }

    pub fn subscribe(&self) -> Receiver<ClassificationResult> {
        self.notifier.subscribe()
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn enricher(&self) -> &MetadataEnricher {
        &self.enricher
    }

    pub fn classifier_name(&self) -> &'static str {
        self.image_classifier.name()
    }

    pub async fn classify_bytes(
        &self,
        bytes: &[u8],
        source: Option<&str>,
    ) -> Result<ClassificationResult, ClassifyError> {
        let logger = self.call_logger();

        let outcome = match decode_image(bytes) {
            Ok(image) => self.run(&image, source, logger.as_ref()).await,
            Err(e) => Err((ClassifyStage::Preprocessing, e)),
        };

        self.finish(outcome, logger.as_ref())
    }

    pub async fn classify_image(
        &self,
        image: &DynamicImage,
        source: Option<&str>,
    ) -> Result<ClassificationResult, ClassifyError> {
        let logger = self.call_logger();

        let outcome = self.run(image, source, logger.as_ref()).await;

        self.finish(outcome, logger.as_ref())
    }

    fn call_logger(&self) -> Arc<dyn Logger + Send + Sync> {
        let call = self.next_call.fetch_add(1, Ordering::SeqCst);
        self.logger.with_namespace(&format!("call-{}", call))
    }

    /// Records and broadcasts a success. A failure emits nothing and only returns the error.
    fn finish(
        &self,
        outcome: Result<ClassificationResult, (ClassifyStage, ClassifyError)>,
        logger: &(dyn Logger + Send + Sync),
    ) -> Result<ClassificationResult, ClassifyError> {
        match outcome {
            Ok(result) => {
                self.history.append(result.clone());
                let reached = self.notifier.broadcast(&result);
                let _ = logger.info(&format!(
                    "{}: {} (notified {} listeners)",
                    ClassifyStage::Emitted,
                    result.summary(),
                    reached
                ));
                Ok(result)
            }
            Err((stage, e)) => {
                let _ = logger.error(&format!("Failed while {}: {}", stage, e));
                let _ = logger.info(&format!("Back to {}", ClassifyStage::Idle));
                Err(e)
            }
        }
    }

    async fn run(
        &self,
        image: &DynamicImage,
        source: Option<&str>,
        logger: &(dyn Logger + Send + Sync),
    ) -> Result<ClassificationResult, (ClassifyStage, ClassifyError)> {
        let _ = logger.info(&format!(
            "{} {}x{} image from {}",
            ClassifyStage::Preprocessing,
            image.width(),
            image.height(),
            source.unwrap_or("<unnamed>")
        ));
        let input = normalize_image(image, self.config.input_size)
            .map_err(|e| (ClassifyStage::Preprocessing, e))?;

        let _ = logger.info(&format!(
            "{} with {} classifier",
            ClassifyStage::Inferring,
            self.image_classifier.name()
        ));
        let prediction = self
            .image_classifier
            .predict(input)
            .await
            .map_err(|e| (ClassifyStage::Inferring, e))?;

        let _ = logger.info(&format!("{} {:?}", ClassifyStage::Mapping, prediction.scores));
        let mapped = map_prediction(&prediction).map_err(|e| (ClassifyStage::Mapping, e))?;

        let fruit_type = self.enricher.detect_fruit_type(source);
        let _ = logger.info(&format!("{} as {}", ClassifyStage::Enriching, fruit_type));

        Ok(assemble(mapped, fruit_type, &self.enricher))
    }
}
