pub mod enricher;
pub mod fallback;
pub mod load;
pub mod model;

pub use enricher::{MetadataEnricher, UNKNOWN_FRUIT};
pub use model::{Catalog, FruitCatalogEntry, ModelMetadata, QualityText};
