//! Ordenación del listado
//!
//! Todas las ordenaciones son estables: los empates conservan el orden de
//! entrada.

use std::cmp::Ordering;

use rust_decimal::Decimal;

use crate::models::catalog_query::SortKey;
use crate::models::vehicle::VehicleRecord;

/// Comparador para una clave de orden.
///
/// - `newest`: `created_at` descendente, sin fecha al final
/// - `price-*`: precio ausente cuenta como 0
/// - `year-*`: año ausente cuenta como 0
pub fn compare(sort_key: SortKey, a: &VehicleRecord, b: &VehicleRecord) -> Ordering {
    match sort_key {
        // `None < Some(_)`, así que en descendente los registros sin fecha quedan al final
        SortKey::Newest => b.created_at.cmp(&a.created_at),
        SortKey::PriceLow => price_of(a).cmp(&price_of(b)),
        SortKey::PriceHigh => price_of(b).cmp(&price_of(a)),
        SortKey::YearNew => year_of(b).cmp(&year_of(a)),
        SortKey::YearOld => year_of(a).cmp(&year_of(b)),
    }
}

fn price_of(record: &VehicleRecord) -> Decimal {
    record.price.unwrap_or(Decimal::ZERO)
}

fn year_of(record: &VehicleRecord) -> i32 {
    record.year.unwrap_or(0)
}

pub fn sort_records(records: &mut [&VehicleRecord], sort_key: SortKey) {
    records.sort_by(|a, b| compare(sort_key, a, b));
}
