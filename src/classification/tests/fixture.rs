use crate::catalog::Catalog;
use crate::classification::pipeline::FruitPipeline;
use crate::config::Config;
use crate::image_classifier::impl_fake::ImageClassifierFake;
use crate::library::logger::impl_fake::LoggerFake;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use std::io::Cursor;
use std::sync::Arc;

pub const CATALOG: &str = r#"{
    "fruits": [
        {
            "name": "apple",
            "displayName": "Apple",
            "qualityIndicators": { "fresh": "Firm, bright skin", "rotten": "Wrinkled skin with brown spots" },
            "storageRecommendations": { "fresh": "Store refrigerated", "rotten": "Remove from shelf and compost" },
            "variants": ["gala", "fuji"]
        },
        {
            "name": "banana",
            "displayName": "Banana",
            "qualityIndicators": { "fresh": "Yellow peel", "rotten": "Black peel" },
            "storageRecommendations": { "fresh": "Keep at room temperature", "rotten": "Use for baking or discard" },
            "variants": ["cavendish"]
        }
    ],
    "metadata": { "inputSize": [224, 224] }
}"#;

pub struct Fixture {
    pub logger: LoggerFake,
    pub image_classifier: Arc<ImageClassifierFake>,
    pub pipeline: FruitPipeline,
}

impl Fixture {
    pub fn new(scores: Vec<f32>) -> Self {
        Self::build(ImageClassifierFake::new(scores), catalog(), 10)
    }

    pub fn failing(reason: &str) -> Self {
        Self::build(ImageClassifierFake::failing(reason), catalog(), 10)
    }

    pub fn build(image_classifier: ImageClassifierFake, catalog: Catalog, capacity: usize) -> Self {
        let config = Config {
            history_capacity: capacity,
            ..Config::default()
        };
        let logger = LoggerFake::new();
        let image_classifier = Arc::new(image_classifier);
        let pipeline = FruitPipeline::new(
            config,
            Arc::new(logger.clone()),
            image_classifier.clone(),
            catalog,
        );

        Self {
            logger,
            image_classifier,
            pipeline,
        }
    }
}

pub fn catalog() -> Catalog {
    Catalog::from_json(CATALOG).unwrap()
}

pub fn image() -> DynamicImage {
    let mut img = ImageBuffer::new(64, 48);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = Rgb([(x * 4) as u8, (y * 5) as u8, 90]);
    }
    DynamicImage::ImageRgb8(img)
}

pub fn png_bytes() -> Vec<u8> {
    let mut bytes = Vec::new();
    image()
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {} got {}",
        expected,
        actual
    );
}
