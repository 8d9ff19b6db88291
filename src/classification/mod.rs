pub mod assembler;
pub mod history;
pub mod notifier;
pub mod pipeline;
pub mod result;
#[cfg(test)]
mod tests;

pub use history::HistoryBuffer;
pub use notifier::Notifier;
pub use pipeline::{ClassifyStage, FruitPipeline};
pub use result::ClassificationResult;
