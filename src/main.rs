use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use vehicle_catalog::config::{DatabaseConfig, EnvironmentConfig, InventorySource};
use vehicle_catalog::middleware::cors_for;
use vehicle_catalog::repositories::{
    InMemoryVehicleRepository, InventoryRepository, PgVehicleRepository,
};
use vehicle_catalog::routes::create_app_router;
use vehicle_catalog::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("🚗 Vehicle Catalog - API de inventario");
    info!("=====================================");

    let config = EnvironmentConfig::from_env()?;

    let repository: Arc<dyn InventoryRepository> = match &config.inventory_source {
        InventorySource::Postgres { database_url } => {
            let pool = match DatabaseConfig::new(database_url.clone())
                .with_env_overrides()?
                .create_pool()
                .await
            {
                Ok(pool) => pool,
                Err(e) => {
                    error!("❌ Error conectando a la base de datos: {:#}", e);
                    return Err(e);
                }
            };
            info!("✅ PostgreSQL conectado");
            Arc::new(PgVehicleRepository::new(pool))
        }
        InventorySource::SeedFile(path) => {
            Arc::new(InMemoryVehicleRepository::from_json_file(path).await?)
        }
    };

    if config.cors_origins.is_empty() && !config.is_development() {
        warn!(
            "⚠️ CORS_ORIGINS vacío en entorno '{}': se acepta cualquier origen",
            config.environment
        );
    }

    let state = AppState::new(repository, &config);
    let app = create_app_router(state, cors_for(&config.cors_origins));

    let addr = config.server_url();

    info!("🌐 Servidor iniciando en http://{} ({})", addr, config.environment);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("   GET  /api/vehicles - Listado con búsqueda, filtros y orden");
    info!("   GET  /api/vehicles/filters - Opciones de filtrado");
    info!("   GET  /api/vehicles/:id - Detalle de vehículo");

    let listener = tokio::net::TcpListener::bind(addr.as_str()).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal SIGTERM recibida, apagando servidor...");
        },
    }
}
