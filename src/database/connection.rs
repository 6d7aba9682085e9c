//! Conexión y arranque de la base de datos SQLite
//!
//! Se ejecuta una sola vez al iniciar el proceso, antes de servir requests:
//! crea el directorio de datos, abre el pool, asegura el esquema y siembra
//! las zonas por defecto si la tabla está vacía. Cualquier fallo aquí es fatal.

use std::path::Path;

use sqlx::SqlitePool;
use tracing::{debug, info};

use super::schema;
use crate::config::DatabaseConfig;
use crate::models::seed_zones;
use crate::repositories::ZoneRepository;
use crate::utils::StartupError;

/// Resultado de la siembra inicial
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded(usize),
    AlreadyPopulated(i64),
}

/// Pool ya inicializado, compartido durante toda la vida del proceso
#[derive(Clone)]
pub struct DatabaseConnection {
    pool: SqlitePool,
    seed: SeedOutcome,
}

impl DatabaseConnection {
    pub async fn initialize(config: &DatabaseConfig) -> Result<Self, StartupError> {
        if !config.is_in_memory() {
            ensure_parent_dir(&config.path)?;
        }

        let pool = config.create_pool().await?;
        info!("✅ Base de datos abierta: {}", config.path);

        schema::create_tables(&pool).await?;
        debug!("Esquema de zone verificado");

        let seed = seed_if_empty(&pool).await?;
        match seed {
            SeedOutcome::Seeded(n) => info!("🌱 Tabla zone vacía, {} zonas insertadas", n),
            SeedOutcome::AlreadyPopulated(n) => info!("📦 Tabla zone con {} filas, sin siembra", n),
        }

        Ok(Self { pool, seed })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn seed_outcome(&self) -> SeedOutcome {
        self.seed
    }
}

/// Crear el directorio que contiene el archivo de la base si no existe
fn ensure_parent_dir(db_path: &str) -> Result<(), StartupError> {
    let dir = match Path::new(db_path).parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => return Ok(()),
    };

    if !dir.exists() {
        std::fs::create_dir_all(dir).map_err(|source| StartupError::StorageDirectory {
            path: dir.display().to_string(),
            source,
        })?;
        info!("📁 Directorio de datos creado: {}", dir.display());
    }
    Ok(())
}

/// Insertar las zonas por defecto solo si la tabla está vacía.
/// Comprobación e inserción van en la misma transacción.
async fn seed_if_empty(pool: &SqlitePool) -> Result<SeedOutcome, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut repo = ZoneRepository::new(&mut tx);

    let existing = repo.count().await?;
    if existing > 0 {
        return Ok(SeedOutcome::AlreadyPopulated(existing));
    }

    let seeds = seed_zones();
    let inserted = seeds.len();
    for zone in seeds {
        repo.create(zone).await?;
    }

    tx.commit().await?;
    Ok(SeedOutcome::Seeded(inserted))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_first_start_seeds_two_zones() {
        let db = DatabaseConnection::initialize(&DatabaseConfig::in_memory()).await.unwrap();
        assert_eq!(db.seed_outcome(), SeedOutcome::Seeded(2));

        let mut conn = db.pool().acquire().await.unwrap();
        let zones = ZoneRepository::new(&mut conn).find_all().await.unwrap();

        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].name, "Milan");
        assert_eq!(zones[0].region.as_deref(), Some("Italy North"));
        assert_eq!(zones[1].name, "Rome");
        assert_eq!(zones[1].region.as_deref(), Some("Italy Center"));
        assert!(zones[0].zone_id > 0);
        assert_ne!(zones[0].zone_id, zones[1].zone_id);
    }

    #[tokio::test]
    async fn test_seeding_twice_does_not_duplicate() {
        let pool = DatabaseConfig::in_memory().create_pool().await.unwrap();
        schema::create_tables(&pool).await.unwrap();

        assert_eq!(seed_if_empty(&pool).await.unwrap(), SeedOutcome::Seeded(2));
        assert_eq!(seed_if_empty(&pool).await.unwrap(), SeedOutcome::AlreadyPopulated(2));
    }

    #[tokio::test]
    async fn test_restart_on_file_database_keeps_seed_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/data/database.db");
        let config = DatabaseConfig::new(path.to_string_lossy().to_string());

        let first = DatabaseConnection::initialize(&config).await.unwrap();
        assert_eq!(first.seed_outcome(), SeedOutcome::Seeded(2));
        first.pool().close().await;

        assert!(path.exists());

        let second = DatabaseConnection::initialize(&config).await.unwrap();
        assert_eq!(second.seed_outcome(), SeedOutcome::AlreadyPopulated(2));
    }

    #[test]
    fn test_ensure_parent_dir_fails_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let db_path = blocker.join("data/database.db");
        let err = ensure_parent_dir(&db_path.to_string_lossy()).unwrap_err();
        assert!(matches!(err, StartupError::StorageDirectory { .. }));
    }

    #[test]
    fn test_bare_file_name_needs_no_directory() {
        assert!(ensure_parent_dir("database.db").is_ok());
    }
}
