use crate::catalog::MetadataEnricher;
use crate::classification::result::ClassificationResult;
use crate::ripeness::MappedRipeness;
use chrono::Utc;

pub fn assemble(
    mapped: MappedRipeness,
    fruit_type: String,
    enricher: &MetadataEnricher,
) -> ClassificationResult {
    ClassificationResult {
        fruit_display_name: enricher.display_name(&fruit_type),
        recommended_action: enricher.recommendation(mapped.ripeness, &fruit_type),
        ripeness_indicators: enricher.indicators(mapped.ripeness, &fruit_type),
        ripeness: mapped.ripeness,
        confidence: mapped.confidence,
        all_confidences: mapped.all_confidences,
        fruit_type,
        timestamp: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::ripeness::{map_prediction, RawPrediction, RipenessCategory};

    #[test]
    fn test_assemble_stamps_time_and_copies_mapping() {
        let enricher = MetadataEnricher::new(Catalog::empty());
        let mapped = map_prediction(&RawPrediction::new(vec![0.8])).unwrap();
        let before = Utc::now();

        let result = assemble(mapped.clone(), "pear".to_string(), &enricher);

        assert_eq!(result.fruit_type, "pear");
        assert_eq!(result.fruit_display_name, "Pear");
        assert_eq!(result.ripeness, RipenessCategory::Spoiled);
        assert_eq!(result.confidence, mapped.confidence);
        assert_eq!(result.all_confidences, mapped.all_confidences);
        assert_eq!(result.recommended_action, "Remove from inventory");
        assert!(result.timestamp >= before);
    }

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let enricher = MetadataEnricher::new(Catalog::empty());
        let mapped = map_prediction(&RawPrediction::new(vec![0.1])).unwrap();
        let result = assemble(mapped, "unknown".to_string(), &enricher);

        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["fruitType"], "unknown");
        assert_eq!(json["ripeness"], "ripe");
        assert_eq!(json["allConfidences"].as_array().unwrap().len(), 4);
        assert_eq!(json["allConfidences"][0]["category"], "unripe");
        assert!(json["recommendedAction"].is_string());
    }
}
