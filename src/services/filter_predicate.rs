//! Construcción del predicado de filtrado
//!
//! Compone en una sola función los filtros activos del descriptor (marca,
//! rango de precio, condición) junto con la búsqueda de texto libre.

use crate::models::catalog_query::{CatalogFilters, PriceRange, QueryDescriptor};
use crate::models::vehicle::VehicleRecord;
use crate::services::search_matcher::matches_search;

pub fn matches_make(record: &VehicleRecord, filters: &CatalogFilters) -> bool {
    filters.active_make().map_or(true, |make| record.make == make)
}

/// Igualdad exacta con el nombre de la condición; un vehículo sin condición
/// no pasa un filtro activo
pub fn matches_condition(record: &VehicleRecord, filters: &CatalogFilters) -> bool {
    filters
        .active_condition()
        .map_or(true, |condition| record.condition.map(|c| c.as_str()) == Some(condition))
}

pub fn matches_price_range(record: &VehicleRecord, filters: &CatalogFilters) -> bool {
    filters
        .active_price_range()
        .map_or(true, |range| range.contains(record.price))
}

/// Predicado compuesto: AND de todos los filtros activos y de la búsqueda
pub fn build_predicate(descriptor: &QueryDescriptor) -> impl Fn(&VehicleRecord) -> bool + '_ {
    let filters = &descriptor.filters;
    let price_range: Option<PriceRange> = filters.active_price_range();
    let term = descriptor.search_term.as_deref();

    move |record: &VehicleRecord| {
        matches_make(record, filters)
            && matches_condition(record, filters)
            && price_range.as_ref().map_or(true, |range| range.contains(record.price))
            && matches_search(record, term)
    }
}
