use crate::error::ClassifyError;
use crate::ripeness::category::{ConfidenceEntry, RawPrediction, RipenessCategory};

const RIPE_BELOW: f32 = 0.3;
const OVERRIPE_BELOW: f32 = 0.7;

#[derive(Debug, Clone, PartialEq)]
pub struct MappedRipeness {
    pub ripeness: RipenessCategory,
    pub confidence: f32,
    /// Canonical order, one entry per category.
    pub all_confidences: [ConfidenceEntry; 4],
}

pub fn map_prediction(prediction: &RawPrediction) -> Result<MappedRipeness, ClassifyError> {
    if let Some(bad) = prediction.scores.iter().find(|score| !score.is_finite()) {
        return Err(ClassifyError::Inference(format!(
            "model produced a non-finite score ({})",
            bad
        )));
    }

    match prediction.scores.as_slice() {
        [unripe, ripe, overripe, spoiled] => Ok(map_four_way([*unripe, *ripe, *overripe, *spoiled])),
        [score] => Ok(map_rottenness(*score)),
        scores => Err(ClassifyError::Inference(format!(
            "expected 1 or 4 scores, model produced {}",
            scores.len()
        ))),
    }
}

fn map_four_way(scores: [f32; 4]) -> MappedRipeness {
    // Strict comparison keeps the lowest index on ties.
    let mut best = 0;
    for (index, score) in scores.iter().enumerate().skip(1) {
        if *score > scores[best] {
            best = index;
        }
    }

    let ripeness = RipenessCategory::ALL[best];
    build(ripeness, scores.map(|score| score * 100.0))
}

/// Single rottenness score. Unripe can show up in the distribution but is never selected.
/// The distribution is a display heuristic and does not sum to 100.
fn map_rottenness(score: f32) -> MappedRipeness {
    let s = score.clamp(0.0, 1.0);

    if s < RIPE_BELOW {
        build(
            RipenessCategory::Ripe,
            [(RIPE_BELOW - s).max(0.0) * 100.0, (1.0 - s) * 100.0, 0.0, 0.0],
        )
    } else if s < OVERRIPE_BELOW {
        let band = OVERRIPE_BELOW - RIPE_BELOW;
        build(
            RipenessCategory::Overripe,
            [
                0.0,
                (OVERRIPE_BELOW - s) / band * 100.0,
                (s - RIPE_BELOW) / band * 100.0,
                0.0,
            ],
        )
    } else {
        build(
            RipenessCategory::Spoiled,
            [0.0, 0.0, (1.0 - s) * 100.0 * 0.5, s * 100.0],
        )
    }
}

fn build(ripeness: RipenessCategory, percentages: [f32; 4]) -> MappedRipeness {
    let all_confidences = RipenessCategory::ALL.map(|category| ConfidenceEntry {
        category,
        percentage: percentages[category.index()],
    });

    MappedRipeness {
        ripeness,
        confidence: all_confidences[ripeness.index()].percentage,
        all_confidences,
    }
}
