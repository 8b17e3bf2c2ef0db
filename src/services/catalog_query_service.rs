//! Motor de consultas del catálogo
//!
//! Punto de entrada único de búsqueda, filtrado y ordenación que usan todos
//! los listados. Es puro y síncrono: toma prestada la colección del llamador,
//! no guarda estado entre llamadas y nunca muta los registros.

use tracing::debug;

use crate::models::catalog_query::QueryDescriptor;
use crate::models::vehicle::VehicleRecord;
use crate::services::filter_predicate::build_predicate;
use crate::services::sort_comparator::sort_records;

/// Filtrar y ordenar `records` según `descriptor`.
///
/// 1. construir el predicado compuesto (filtros + búsqueda)
/// 2. filtrar conservando el orden relativo
/// 3. ordenar de forma estable por `sort_key`
///
/// El shaping de cada resultado lo aplica quien presenta los datos.
pub fn query<'a>(records: &'a [VehicleRecord], descriptor: &QueryDescriptor) -> Vec<&'a VehicleRecord> {
    let predicate = build_predicate(descriptor);

    let mut results: Vec<&VehicleRecord> = records.iter().filter(|record| predicate(*record)).collect();
    sort_records(&mut results, descriptor.sort_key);

    debug!(
        "🔍 Catálogo: {} de {} vehículos (orden: {})",
        results.len(),
        records.len(),
        descriptor.sort_key
    );

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehicle::VehicleCondition;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    fn vehicle(id: &str, make: &str, price: Option<i64>, created: Option<i64>) -> VehicleRecord {
        let mut record = VehicleRecord::new(id, make, "Model");
        record.price = price.map(Decimal::from);
        record.created_at = created.and_then(|secs| Utc.timestamp_opt(secs, 0).single());
        record
    }

    fn ids(records: &[&VehicleRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    fn toyota_and_bmw() -> Vec<VehicleRecord> {
        vec![
            vehicle("toyota", "Toyota", Some(20_000), Some(1)),
            vehicle("bmw", "BMW", Some(60_000), Some(2)),
        ]
    }

    #[test]
    fn test_default_sort_is_newest() {
        let records = toyota_and_bmw();
        let results = query(&records, &QueryDescriptor::default().with_sort("newest"));
        assert_eq!(ids(&results), ["bmw", "toyota"]);
    }

    #[test]
    fn test_price_bucket_filter() {
        let records = toyota_and_bmw();
        let results = query(&records, &QueryDescriptor::default().with_price_range("0-25000"));
        assert_eq!(ids(&results), ["toyota"]);
    }

    #[test]
    fn test_price_low_puts_price_on_request_first() {
        let mut records = toyota_and_bmw();
        records.push(vehicle("on-request", "Lexus", None, Some(3)));

        let results = query(&records, &QueryDescriptor::default().with_sort("price-low"));
        assert_eq!(ids(&results), ["on-request", "toyota", "bmw"]);
    }

    #[test]
    fn test_lowercase_search_matches_uppercase_make() {
        let records = toyota_and_bmw();
        let results = query(&records, &QueryDescriptor::default().with_search("bmw"));
        assert_eq!(ids(&results), ["bmw"]);
    }

    #[test]
    fn test_unknown_bucket_returns_nothing() {
        let records = toyota_and_bmw();
        let descriptor = QueryDescriptor::default()
            .with_price_range("unknown-bucket")
            .with_search("bmw");
        assert!(query(&records, &descriptor).is_empty());
    }

    #[test]
    fn test_unknown_sort_key_behaves_as_newest() {
        let records = toyota_and_bmw();
        let unknown = query(&records, &QueryDescriptor::default().with_sort("not-a-real-key"));
        let newest = query(&records, &QueryDescriptor::default());
        assert_eq!(ids(&unknown), ids(&newest));
        assert_eq!(ids(&unknown), ["bmw", "toyota"]);
    }

    #[test]
    fn test_records_are_not_mutated() {
        let mut records = toyota_and_bmw();
        records[0].condition = Some(VehicleCondition::Good);
        let before = records.clone();

        let _ = query(&records, &QueryDescriptor::default().with_sort("price-high"));
        assert_eq!(records, before);
    }

    #[test]
    fn test_empty_collection() {
        assert!(query(&[], &QueryDescriptor::default()).is_empty());
    }
}
