//! Conexión a SQLite
//!
//! Este módulo abre el pool de conexiones y deja el schema listo para usar.

use sqlx::SqlitePool;
use tracing::info;

use super::migrations::run_migrations;
use crate::config::DatabaseConfig;

/// Pool de conexiones con el schema ya migrado
pub struct DatabaseConnection {
    pool: SqlitePool,
}

impl DatabaseConnection {
    /// Conectar usando la configuración indicada y ejecutar migraciones
    pub async fn new(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        info!("🗄️ Conectando a la base de datos: {}", mask_database_url(&config.url));
        let pool = config.create_pool().await?;
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    /// Base de datos en memoria, usada por los tests
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let pool = DatabaseConfig::create_test_pool().await?;
        run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Función helper para enmascarar credenciales de la URL en logs
fn mask_database_url(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        if let Some(scheme_end) = url.find("://") {
            let protocol = &url[..scheme_end + 3];
            let host = &url[at_pos + 1..];
            return format!("{}***:***@{}", protocol, host);
        }
    }
    url.to_string()
}
