//! Repositorio de inventario
//!
//! `InventoryRepository` es el único punto por el que el catálogo obtiene
//! vehículos. Hay dos implementaciones: PostgreSQL (producción) y memoria
//! (tests y demos con un fichero JSON de inventario).

use std::cmp::Ordering;
use std::collections::HashSet;
use std::path::Path;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, info, warn};
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::{VehicleRecord, VehicleRow};
use crate::utils::errors::{not_found_error, AppError, AppResult};

#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Página `page` (empieza en 1; 0 cuenta como 1) de tamaño `page_size`
    async fn fetch_vehicles(&self, page: u32, page_size: u32) -> AppResult<Vec<VehicleRecord>>;

    async fn fetch_vehicle_by_id(&self, id: &str) -> AppResult<VehicleRecord>;

    /// Inventario completo, recorriendo páginas hasta encontrar una incompleta.
    /// Los registros inválidos o con id repetido se descartan.
    async fn fetch_all_vehicles(&self, page_size: u32) -> AppResult<Vec<VehicleRecord>> {
        let page_size = page_size.max(1);
        let mut vehicles = Vec::new();
        let mut page = 1;

        loop {
            let batch = self.fetch_vehicles(page, page_size).await?;
            let last_page = batch.len() < page_size as usize;
            vehicles.extend(batch);

            if last_page {
                break;
            }
            page += 1;
        }

        debug!("📦 Inventario cargado: {} vehículos en {} páginas", vehicles.len(), page);
        Ok(retain_valid(vehicles))
    }
}

/// Descartar registros que violan los invariantes del modelo (año de 4
/// dígitos, precio y kilometraje no negativos, id único)
pub fn retain_valid(vehicles: Vec<VehicleRecord>) -> Vec<VehicleRecord> {
    let mut seen = HashSet::new();

    vehicles
        .into_iter()
        .filter(|vehicle| {
            if let Err(e) = vehicle.validate() {
                warn!("⚠️ Vehículo {} descartado: {}", vehicle.id, e);
                return false;
            }
            if !seen.insert(vehicle.id.clone()) {
                warn!("⚠️ Vehículo {} duplicado, se descarta", vehicle.id);
                return false;
            }
            true
        })
        .collect()
}

/// Un registro inválido no se sirve ni siquiera por id
fn ensure_valid(vehicle: VehicleRecord) -> AppResult<VehicleRecord> {
    match vehicle.validate() {
        Ok(()) => Ok(vehicle),
        Err(e) => {
            warn!("⚠️ Vehículo {} descartado: {}", vehicle.id, e);
            Err(not_found_error("Vehicle", &vehicle.id))
        }
    }
}

fn page_offset(page: u32, page_size: u32) -> usize {
    (page.max(1) as usize - 1) * page_size as usize
}

/// Repositorio sobre la tabla `vehicles` de PostgreSQL
#[derive(Clone)]
pub struct PgVehicleRepository {
    pool: PgPool,
}

impl PgVehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_VEHICLES: &str = r#"
    SELECT id, make, model, trim, year, price, mileage, condition,
           body_type, transmission, fuel_type, location, images,
           created_at, status
    FROM vehicles
"#;

#[async_trait]
impl InventoryRepository for PgVehicleRepository {
    async fn fetch_vehicles(&self, page: u32, page_size: u32) -> AppResult<Vec<VehicleRecord>> {
        let query = format!(
            "{} ORDER BY created_at DESC NULLS LAST, id LIMIT $1 OFFSET $2",
            SELECT_VEHICLES
        );

        let rows = sqlx::query_as::<_, VehicleRow>(&query)
            .bind(page_size as i64)
            .bind(page_offset(page, page_size) as i64)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(VehicleRecord::from).collect())
    }

    async fn fetch_vehicle_by_id(&self, id: &str) -> AppResult<VehicleRecord> {
        // Un id que no es UUID no puede existir en la tabla
        let uuid = Uuid::parse_str(id).map_err(|_| not_found_error("Vehicle", id))?;

        let query = format!("{} WHERE id = $1", SELECT_VEHICLES);
        let row = sqlx::query_as::<_, VehicleRow>(&query)
            .bind(uuid)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", id))?;

        ensure_valid(row.into())
    }
}

/// Repositorio en memoria. Pagina en el mismo orden que la tabla:
/// más reciente primero, sin fecha al final, empate por id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryVehicleRepository {
    vehicles: Vec<VehicleRecord>,
}

impl InMemoryVehicleRepository {
    pub fn new(mut vehicles: Vec<VehicleRecord>) -> Self {
        vehicles.sort_by(|a, b| {
            let by_date = match (a.created_at, b.created_at) {
                (Some(a), Some(b)) => b.cmp(&a),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            };
            by_date.then_with(|| a.id.cmp(&b.id))
        });
        Self { vehicles }
    }

    /// Cargar un inventario desde un fichero JSON (array de vehículos)
    pub async fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::Internal(format!("cannot read inventory file {}: {}", path.display(), e))
        })?;

        let vehicles: Vec<VehicleRecord> = serde_json::from_str(&content).map_err(|e| {
            AppError::Internal(format!("invalid inventory file {}: {}", path.display(), e))
        })?;

        info!("📂 Inventario en memoria: {} vehículos desde {}", vehicles.len(), path.display());
        Ok(Self::new(vehicles))
    }
}

#[async_trait]
impl InventoryRepository for InMemoryVehicleRepository {
    async fn fetch_vehicles(&self, page: u32, page_size: u32) -> AppResult<Vec<VehicleRecord>> {
        Ok(self
            .vehicles
            .iter()
            .skip(page_offset(page, page_size))
            .take(page_size as usize)
            .cloned()
            .collect())
    }

    async fn fetch_vehicle_by_id(&self, id: &str) -> AppResult<VehicleRecord> {
        let vehicle = self
            .vehicles
            .iter()
            .find(|vehicle| vehicle.id == id)
            .cloned()
            .ok_or_else(|| not_found_error("Vehicle", id))?;

        ensure_valid(vehicle)
    }
}
