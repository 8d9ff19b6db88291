use crate::ripeness::QualityAxis;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Text for the two-valued quality axis. Either side may be missing from the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityText {
    #[serde(default)]
    pub fresh: Option<String>,
    #[serde(default)]
    pub rotten: Option<String>,
}

impl QualityText {
    pub fn get(&self, axis: QualityAxis) -> Option<&str> {
        let text = match axis {
            QualityAxis::Fresh => self.fresh.as_deref(),
            QualityAxis::Rotten => self.rotten.as_deref(),
        };
        text.filter(|text| !text.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FruitCatalogEntry {
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub quality_indicators: QualityText,
    #[serde(default)]
    pub storage_recommendations: QualityText,
    #[serde(default)]
    pub variants: Vec<String>,
}

/// Describes the model the catalog was written for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelMetadata {
    #[serde(default)]
    pub input_size: Option<[u32; 2]>,
    /// Output index (as a string key) to category name.
    #[serde(default)]
    pub class_mapping: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub fruits: Vec<FruitCatalogEntry>,
    #[serde(default)]
    pub metadata: Option<ModelMetadata>,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.fruits.is_empty()
    }

    /// Keys are matched lowercase.
    pub fn find(&self, name: &str) -> Option<&FruitCatalogEntry> {
        let name = name.trim().to_lowercase();
        self.fruits
            .iter()
            .find(|entry| entry.name.to_lowercase() == name)
    }
}
