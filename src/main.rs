use anyhow::{Context, Result};
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use dotenvy::dotenv;

use zones_api::config::{DatabaseConfig, EnvironmentConfig};
use zones_api::database::DatabaseConnection;
use zones_api::utils::StartupError;
use zones_api::{create_app, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,zones_api=debug")),
        )
        .init();

    info!("🗺️  Zones API");
    info!("================================================");

    let config = match EnvironmentConfig::from_env().map_err(StartupError::from) {
        Ok(config) => config,
        Err(e) => {
            error!("❌ {}", e);
            return Err(e.into());
        }
    };
    if config.is_production() && config.cors_origins.is_empty() {
        warn!("⚠️  CORS_ORIGINS vacío en producción: CORS permisivo");
    }

    // Inicializar base de datos: directorio, esquema y siembra
    let db_connection = match DatabaseConnection::initialize(&DatabaseConfig::from(&config)).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error inicializando la base de datos: {}", e);
            return Err(e.into());
        }
    };

    let pool = db_connection.pool().clone();
    let prefix = config.api_prefix.clone();
    let legacy_create = config.legacy_create_route;
    let addr: SocketAddr = config
        .server_url()
        .parse()
        .with_context(|| format!("Dirección inválida: {}", config.server_url()))?;

    let app = create_app(AppState::new(pool.clone(), config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    {}/ - Mensaje de bienvenida", prefix);
    info!("   GET    {}/zones - Listar zonas", prefix);
    info!("   GET    {}/zones/:id - Obtener zona", prefix);
    info!("   POST   {}/zones - Crear zona", prefix);
    if legacy_create {
        info!("   POST   {}/zones/:id - Crear zona (legacy, id ignorado)", prefix);
    }
    info!("   PUT    {}/zones/:id - Actualizar zona", prefix);
    info!("   DELETE {}/zones/:id - Eliminar zona", prefix);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("No se pudo escuchar en {}", addr))?;

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    pool.close().await;
    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("No se pudo instalar el handler de SIGTERM: {}", e);
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
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
