use serde::{Deserialize, Serialize};
use std::fmt;

/// The pipeline's output domain. Order matches the model's four-way output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RipenessCategory {
    Unripe,
    Ripe,
    Overripe,
    Spoiled,
}

impl RipenessCategory {
    pub const ALL: [RipenessCategory; 4] = [
        RipenessCategory::Unripe,
        RipenessCategory::Ripe,
        RipenessCategory::Overripe,
        RipenessCategory::Spoiled,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        match self {
            RipenessCategory::Unripe => 0,
            RipenessCategory::Ripe => 1,
            RipenessCategory::Overripe => 2,
            RipenessCategory::Spoiled => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RipenessCategory::Unripe => "unripe",
            RipenessCategory::Ripe => "ripe",
            RipenessCategory::Overripe => "overripe",
            RipenessCategory::Spoiled => "spoiled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == value.trim().to_lowercase())
    }

    /// Catalog text only distinguishes fresh from rotten.
    pub fn quality_axis(&self) -> QualityAxis {
        match self {
            RipenessCategory::Unripe | RipenessCategory::Ripe => QualityAxis::Fresh,
            RipenessCategory::Overripe | RipenessCategory::Spoiled => QualityAxis::Rotten,
        }
    }
}

impl fmt::Display for RipenessCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityAxis {
    Fresh,
    Rotten,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceEntry {
    pub category: RipenessCategory,
    /// 0 to 100.
    pub percentage: f32,
}

/// Unprocessed runtime output: one rottenness score, or one score per category.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPrediction {
    pub scores: Vec<f32>,
}

impl RawPrediction {
    pub fn new(scores: Vec<f32>) -> Self {
        Self { scores }
    }
}
