use chrono::Utc;
use sqlx::SqliteConnection;

use crate::models::{Zone, ZoneCreate};

const ZONE_COLUMNS: &str = "zone_id, name, region, created_at";

/// Acceso a la tabla `zone` sobre la sesión de la request
pub struct ZoneRepository<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> ZoneRepository<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Todas las zonas en orden de inserción
    pub async fn find_all(&mut self) -> Result<Vec<Zone>, sqlx::Error> {
        sqlx::query_as::<_, Zone>(&format!("SELECT {ZONE_COLUMNS} FROM zone ORDER BY zone_id"))
            .fetch_all(&mut *self.conn)
            .await
    }

    pub async fn find_by_id(&mut self, zone_id: i64) -> Result<Option<Zone>, sqlx::Error> {
        sqlx::query_as::<_, Zone>(&format!("SELECT {ZONE_COLUMNS} FROM zone WHERE zone_id = ?"))
            .bind(zone_id)
            .fetch_optional(&mut *self.conn)
            .await
    }

    pub async fn count(&mut self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM zone")
            .fetch_one(&mut *self.conn)
            .await
    }

    /// Insertar una zona; el id lo asigna SQLite y `created_at` es el instante actual
    pub async fn create(&mut self, data: ZoneCreate) -> Result<Zone, sqlx::Error> {
        sqlx::query_as::<_, Zone>(&format!(
            "INSERT INTO zone (name, region, created_at) VALUES (?, ?, ?) RETURNING {ZONE_COLUMNS}"
        ))
        .bind(data.name)
        .bind(data.region)
        .bind(Utc::now())
        .fetch_one(&mut *self.conn)
        .await
    }

    /// Reemplazar `name` y `region`. Devuelve `None` si la zona no existe.
    pub async fn update(&mut self, zone_id: i64, data: ZoneCreate) -> Result<Option<Zone>, sqlx::Error> {
        sqlx::query_as::<_, Zone>(&format!(
            "UPDATE zone SET name = ?, region = ? WHERE zone_id = ? RETURNING {ZONE_COLUMNS}"
        ))
        .bind(data.name)
        .bind(data.region)
        .bind(zone_id)
        .fetch_optional(&mut *self.conn)
        .await
    }

    /// Eliminar una zona. Devuelve `false` si no existía.
    pub async fn delete(&mut self, zone_id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM zone WHERE zone_id = ?")
            .bind(zone_id)
            .execute(&mut *self.conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
