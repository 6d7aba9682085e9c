use sqlx::SqliteConnection;
use tracing::debug;

use crate::models::{Zone, ZoneCreate};
use crate::repositories::ZoneRepository;
use crate::utils::errors::{not_found_error, AppError};

/// Reglas CRUD de Zone sobre la sesión de una request.
/// Cada operación ejecuta una sola operación de almacenamiento.
pub struct ZoneController<'c> {
    repository: ZoneRepository<'c>,
}

impl<'c> ZoneController<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self {
            repository: ZoneRepository::new(conn),
        }
    }

    pub async fn list(&mut self) -> Result<Vec<Zone>, AppError> {
        let zones = self.repository.find_all().await?;
        debug!("Listando {} zonas", zones.len());
        Ok(zones)
    }

    pub async fn get_by_id(&mut self, id: i64) -> Result<Zone, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Zone", &id.to_string()))
    }

    pub async fn create(&mut self, request: ZoneCreate) -> Result<Zone, AppError> {
        let zone = self.repository.create(request).await?;
        debug!("Zona {} creada", zone.zone_id);
        Ok(zone)
    }

    /// Reemplaza `name` y `region`; `zone_id` y `created_at` no cambian
    pub async fn update(&mut self, id: i64, request: ZoneCreate) -> Result<Zone, AppError> {
        let zone = self
            .repository
            .update(id, request)
            .await?
            .ok_or_else(|| not_found_error("Zone", &id.to_string()))?;
        debug!("Zona {} actualizada", zone.zone_id);
        Ok(zone)
    }

    pub async fn delete(&mut self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Zone", &id.to_string()));
        }
        debug!("Zona {} eliminada", id);
        Ok(())
    }
}
