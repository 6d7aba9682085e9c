//! Sesión de base de datos por request
//!
//! `DbSession` se obtiene como extractor en cada handler. La conexión vuelve
//! al pool cuando el valor se destruye al terminar el handler, tanto si la
//! request termina bien como si termina con error.

use std::ops::{Deref, DerefMut};

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use sqlx::{pool::PoolConnection, Sqlite, SqliteConnection, SqlitePool};

use crate::state::AppState;
use crate::utils::AppError;

pub struct DbSession(PoolConnection<Sqlite>);

impl DbSession {
    pub async fn acquire(pool: &SqlitePool) -> Result<Self, AppError> {
        let conn = pool.acquire().await?;
        Ok(Self(conn))
    }
}

impl Deref for DbSession {
    type Target = SqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DbSession {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[async_trait]
impl FromRequestParts<AppState> for DbSession {
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        DbSession::acquire(&state.pool).await
    }
}
