//! Descriptor de consulta del catálogo
//!
//! Término de búsqueda, filtros y clave de orden que describen una petición
//! de listado. Los valores inválidos nunca son un error: la clave de orden
//! desconocida cae a `newest` y un rango de precio desconocido no deja pasar
//! ningún vehículo.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Clave de orden del listado
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    #[default]
    Newest,
    PriceLow,
    PriceHigh,
    YearNew,
    YearOld,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Newest,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::YearNew,
        SortKey::YearOld,
    ];

    /// Interpretar la clave recibida; cualquier valor desconocido es `Newest`
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "price-low" => SortKey::PriceLow,
            "price-high" => SortKey::PriceHigh,
            "year-new" => SortKey::YearNew,
            "year-old" => SortKey::YearOld,
            _ => SortKey::Newest,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::YearNew => "year-new",
            SortKey::YearOld => "year-old",
        }
    }
}

impl From<String> for SortKey {
    fn from(value: String) -> Self {
        SortKey::parse(&value)
    }
}

impl From<&str> for SortKey {
    fn from(value: &str) -> Self {
        SortKey::parse(value)
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        key.as_str().to_string()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rango de precio (bucket) de los filtros
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceRange {
    /// `0-25000`: price ≤ 25000
    UpTo25k,
    /// `25000-50000`: 25000 < price ≤ 50000
    From25kTo50k,
    /// `50000-100000`: 50000 < price ≤ 100000
    From50kTo100k,
    /// `100000+`: price > 100000
    Over100k,
    /// Identificador no reconocido: no coincide con nada
    Unrecognized(String),
}

impl PriceRange {
    pub const BUCKETS: [&'static str; 4] = ["0-25000", "25000-50000", "50000-100000", "100000+"];

    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "0-25000" => PriceRange::UpTo25k,
            "25000-50000" => PriceRange::From25kTo50k,
            "50000-100000" => PriceRange::From50kTo100k,
            "100000+" => PriceRange::Over100k,
            other => PriceRange::Unrecognized(other.to_string()),
        }
    }

    /// Un precio ausente nunca pertenece a un rango concreto
    pub fn contains(&self, price: Option<Decimal>) -> bool {
        let Some(price) = price else {
            return false;
        };

        let (low, high) = match self {
            PriceRange::UpTo25k => (None, Some(25_000)),
            PriceRange::From25kTo50k => (Some(25_000), Some(50_000)),
            PriceRange::From50kTo100k => (Some(50_000), Some(100_000)),
            PriceRange::Over100k => (Some(100_000), None),
            PriceRange::Unrecognized(_) => return false,
        };

        low.map_or(true, |low| price > Decimal::from(low))
            && high.map_or(true, |high| price <= Decimal::from(high))
    }
}

/// Filtros categóricos. Un valor ausente o en blanco es un filtro inactivo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogFilters {
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub price_range: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
}

impl CatalogFilters {
    pub fn active_make(&self) -> Option<&str> {
        active(&self.make)
    }

    pub fn active_price_range(&self) -> Option<PriceRange> {
        active(&self.price_range).map(PriceRange::parse)
    }

    pub fn active_condition(&self) -> Option<&str> {
        active(&self.condition)
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Descriptor completo de una petición de listado
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryDescriptor {
    #[serde(default)]
    pub search_term: Option<String>,
    #[serde(default)]
    pub filters: CatalogFilters,
    #[serde(default)]
    pub sort_key: SortKey,
}

impl QueryDescriptor {
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    pub fn with_make(mut self, make: impl Into<String>) -> Self {
        self.filters.make = Some(make.into());
        self
    }

    pub fn with_price_range(mut self, bucket: impl Into<String>) -> Self {
        self.filters.price_range = Some(bucket.into());
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.filters.condition = Some(condition.into());
        self
    }

    pub fn with_sort(mut self, sort_key: impl Into<SortKey>) -> Self {
        self.sort_key = sort_key.into();
        self
    }
}
