//! Opciones de filtrado del catálogo
//!
//! Deriva del inventario las opciones de los desplegables de los listados:
//! marcas, condiciones presentes, rangos de precio y claves de orden.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::models::catalog_query::{PriceRange, SortKey};
use crate::models::vehicle::{VehicleCondition, VehicleRecord};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogFacets {
    pub makes: Vec<String>,
    pub conditions: Vec<VehicleCondition>,
    pub price_ranges: Vec<&'static str>,
    pub sort_keys: Vec<SortKey>,
}

pub fn facets(records: &[VehicleRecord]) -> CatalogFacets {
    let makes: BTreeSet<&str> = records
        .iter()
        .map(|r| r.make.as_str())
        .filter(|make| !make.trim().is_empty())
        .collect();

    let present: BTreeSet<VehicleCondition> = records.iter().filter_map(|r| r.condition).collect();

    CatalogFacets {
        makes: makes.into_iter().map(str::to_string).collect(),
        conditions: VehicleCondition::ALL
            .into_iter()
            .filter(|c| present.contains(c))
            .collect(),
        price_ranges: PriceRange::BUCKETS.to_vec(),
        sort_keys: SortKey::ALL.to_vec(),
    }
}
