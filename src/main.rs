use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};
use dotenvy::dotenv;

use race_api::config::{DatabaseConfig, EnvironmentConfig};
use race_api::create_app;
use race_api::database::DatabaseConnection;
use race_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;
    let database_config = DatabaseConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🏎️ Race API - cars, motorbikes y car races");
    info!("================================================");
    if config.is_development() {
        info!("🛠️ Modo desarrollo: CORS permisivo si CORS_ORIGINS está vacío");
    }

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new(&database_config).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let addr: SocketAddr = config.server_url().parse()?;
    let app_state = AppState::new(db_connection.pool().clone(), config);
    let app = create_app(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🚗 Cars / 🏍️ Motorbikes (/api/cars, /api/motorbikes):");
    info!("   GET    / - Listar");
    info!("   GET    /:id - Obtener");
    info!("   POST   / - Crear");
    info!("   PUT    /:id - Actualizar");
    info!("   DELETE /:id - Eliminar");
    info!("🏁 Car races:");
    info!("   GET    /api/carraces - Listar con cars");
    info!("   GET    /api/carraces/:id - Obtener con cars");
    info!("   POST   /api/carraces/cars - Crear");
    info!("   PUT    /api/carraces/:id - Actualizar");
    info!("   DELETE /api/carraces/:id - Eliminar");
    info!("   PUT    /:carRaceId/addcar/:carId - Asignar car");
    info!("   PUT    /:id/start - Iniciar carrera");

    let listener = tokio::net::TcpListener::bind(addr).await?;
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
            Ok(mut stream) => {
                stream.recv().await;
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
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
