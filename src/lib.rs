pub mod catalog;
pub mod classification;
pub mod config;
pub mod error;
pub mod image_classifier;
pub mod library;
pub mod ripeness;

pub use classification::{ClassificationResult, FruitPipeline};
pub use config::Config;
pub use error::{ClassifyError, LoadError};
pub use ripeness::RipenessCategory;
