pub mod category;
pub mod mapper;

pub use category::{ConfidenceEntry, QualityAxis, RawPrediction, RipenessCategory};
pub use mapper::{map_prediction, MappedRipeness};
