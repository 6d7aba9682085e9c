//! Esquema de la base de datos
//!
//! Todas las sentencias son idempotentes: se pueden ejecutar sobre una
//! base ya inicializada sin efectos.

use sqlx::SqlitePool;

const CREATE_ZONE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS zone (
    zone_id    INTEGER PRIMARY KEY AUTOINCREMENT,
    name       TEXT NOT NULL,
    region     TEXT NULL,
    created_at TEXT NOT NULL
)
"#;

const CREATE_ZONE_INDEXES: [&str; 3] = [
    "CREATE INDEX IF NOT EXISTS ix_zone_name ON zone (name)",
    "CREATE INDEX IF NOT EXISTS ix_zone_region ON zone (region)",
    "CREATE INDEX IF NOT EXISTS ix_zone_created_at ON zone (created_at)",
];

/// Crear la tabla `zone` y sus índices si no existen
pub async fn create_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query(CREATE_ZONE_TABLE).execute(&mut *tx).await?;
    for statement in CREATE_ZONE_INDEXES {
        sqlx::query(statement).execute(&mut *tx).await?;
    }

    tx.commit().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;

    #[tokio::test]
    async fn test_create_tables_is_idempotent() {
        let pool = DatabaseConfig::in_memory().create_pool().await.unwrap();

        create_tables(&pool).await.unwrap();
        create_tables(&pool).await.unwrap();

        let tables: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'zone'",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(tables, 1);

        let indexes: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'index' AND tbl_name = 'zone' AND name LIKE 'ix_zone_%'",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(indexes, 3);
    }
}
