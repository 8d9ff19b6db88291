use crate::catalog::{Catalog, MetadataEnricher};
use crate::classification::assembler::assemble;
use crate::classification::notifier::Notifier;
use crate::ripeness::{map_prediction, RawPrediction};

#[test]
fn test_dropped_listeners_are_forgotten() {
    let enricher = MetadataEnricher::new(Catalog::empty());
    let mapped = map_prediction(&RawPrediction::new(vec![0.2])).unwrap();
    let result = assemble(mapped, "lemon".to_string(), &enricher);
    let notifier = Notifier::new();

    let kept = notifier.subscribe();
    let dropped = notifier.subscribe();
    drop(dropped);

    assert_eq!(notifier.broadcast(&result), 1);
    assert_eq!(notifier.broadcast(&result), 1);
    assert_eq!(kept.try_recv().unwrap(), result);
    assert_eq!(kept.try_recv().unwrap(), result);
}

#[test]
fn test_broadcast_without_listeners_is_fine() {
    let enricher = MetadataEnricher::new(Catalog::empty());
    let mapped = map_prediction(&RawPrediction::new(vec![0.9])).unwrap();
    let result = assemble(mapped, "unknown".to_string(), &enricher);

    assert_eq!(Notifier::new().broadcast(&result), 0);
}
