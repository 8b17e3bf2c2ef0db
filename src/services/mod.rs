//! Services module
//!
//! Este módulo contiene la lógica de negocio del catálogo: el motor de
//! consultas (búsqueda, filtros, orden), el shaping de resultados y las
//! opciones de filtrado derivadas del inventario.

pub mod catalog_facets;
pub mod catalog_query_service;
pub mod filter_predicate;
pub mod result_shaper;
pub mod search_matcher;
pub mod sort_comparator;

pub use catalog_facets::{facets, CatalogFacets};
pub use catalog_query_service::query;
pub use result_shaper::{ResultShaper, ShapedVehicle};
