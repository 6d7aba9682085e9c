//! Configuración de base de datos
//!
//! Este módulo maneja la configuración del pool SQLite con SQLx.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use super::environment::EnvironmentConfig;

pub const MEMORY_DATABASE: &str = ":memory:";

/// Configuración de la base de datos
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub path: String,
    pub max_connections: u32,
}

impl From<&EnvironmentConfig> for DatabaseConfig {
    fn from(env: &EnvironmentConfig) -> Self {
        Self {
            path: env.database_path.clone(),
            max_connections: env.db_max_connections.max(1),
        }
    }
}

impl DatabaseConfig {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            max_connections: 5,
        }
    }

    /// Base de datos en memoria, usada en tests
    pub fn in_memory() -> Self {
        Self::new(MEMORY_DATABASE)
    }

    pub fn is_in_memory(&self) -> bool {
        self.path == MEMORY_DATABASE
    }

    /// URL de conexión en formato sqlx
    pub fn url(&self) -> String {
        if self.is_in_memory() {
            "sqlite::memory:".to_string()
        } else {
            format!("sqlite://{}", self.path)
        }
    }

    /// Crear el pool de conexiones.
    ///
    /// Una base en memoria vive solo mientras exista su conexión, así que
    /// en ese caso el pool queda fijado a una única conexión que nunca expira.
    pub async fn create_pool(&self) -> Result<SqlitePool, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(&self.url())?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool_options = if self.is_in_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(self.max_connections)
        };

        pool_options.connect_with(options).await
    }
}
