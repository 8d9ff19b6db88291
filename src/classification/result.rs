use crate::ripeness::{ConfidenceEntry, RipenessCategory};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One successful classification. Built once by the assembler and only shared afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    pub fruit_type: String,
    pub fruit_display_name: String,
    pub ripeness: RipenessCategory,
    pub confidence: f32,
    pub all_confidences: [ConfidenceEntry; 4],
    pub recommended_action: String,
    pub ripeness_indicators: String,
    pub timestamp: DateTime<Utc>,
}

impl ClassificationResult {
    pub fn summary(&self) -> String {
        format!(
            "{} is {} ({:.1}%): {}",
            self.fruit_display_name, self.ripeness, self.confidence, self.recommended_action
        )
    }
}
