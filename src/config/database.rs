//! Configuración de base de datos
//!
//! Este módulo maneja la conexión y configuración de SQLite con SQLx.

use std::env;
use std::time::Duration;

use anyhow::Result;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use super::environment::parse_var;

/// Configuración de la base de datos
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://race.db?mode=rwc".to_string(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(3600),
        }
    }
}

impl DatabaseConfig {
    /// Leer la configuración de base de datos desde variables de entorno
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            url: env::var("DATABASE_URL").unwrap_or(defaults.url),
            max_connections: parse_var("DATABASE_MAX_CONNECTIONS", defaults.max_connections)?,
            min_connections: parse_var("DATABASE_MIN_CONNECTIONS", defaults.min_connections)?,
            connect_timeout: Duration::from_secs(parse_var(
                "DATABASE_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout.as_secs(),
            )?),
            idle_timeout: Duration::from_secs(parse_var(
                "DATABASE_IDLE_TIMEOUT_SECS",
                defaults.idle_timeout.as_secs(),
            )?),
            max_lifetime: Duration::from_secs(parse_var(
                "DATABASE_MAX_LIFETIME_SECS",
                defaults.max_lifetime.as_secs(),
            )?),
        })
    }

    /// Crear un nuevo pool de conexiones
    pub async fn create_pool(&self) -> Result<SqlitePool, sqlx::Error> {
        SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.connect_timeout)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
            .connect(&self.url)
            .await
    }

    /// Crear un pool en memoria para testing
    ///
    /// Cada conexión `sqlite::memory:` es una base distinta, así que el pool
    /// se limita a una sola conexión que nunca expira.
    pub async fn create_test_pool() -> Result<SqlitePool, sqlx::Error> {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
    }
}
