use axum::{
    extract::{rejection::PathRejection, Path},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::warn;

use crate::controllers::ZoneController;
use crate::database::DbSession;
use crate::dto::ApiResponse;
use crate::models::{Zone, ZoneCreate};
use crate::state::AppState;
use crate::utils::errors::validation_error;
use crate::utils::{AppResult, ValidatedJson};

/// Rutas de zonas. Con `legacy_create` también se acepta `POST /zones/:id`,
/// cuyo id de la ruta se ignora.
pub fn create_zone_router(legacy_create: bool) -> Router<AppState> {
    let item = get(get_zone).put(update_zone).delete(delete_zone);
    let item = if legacy_create {
        item.post(legacy_create_zone)
    } else {
        item
    };

    Router::new()
        .route("/zones", get(list_zones).post(create_zone))
        .route("/zones/:id", item)
}

fn zone_id(path: Result<Path<i64>, PathRejection>) -> AppResult<i64> {
    path.map(|Path(id)| id)
        .map_err(|rejection| validation_error("id", &rejection.body_text()))
}

async fn list_zones(mut session: DbSession) -> AppResult<Json<ApiResponse<Vec<Zone>>>> {
    let zones = ZoneController::new(&mut session).list().await?;
    Ok(Json(ApiResponse::success(zones)))
}

async fn get_zone(
    path: Result<Path<i64>, PathRejection>,
    mut session: DbSession,
) -> AppResult<Json<ApiResponse<Zone>>> {
    let id = zone_id(path)?;
    let zone = ZoneController::new(&mut session).get_by_id(id).await?;
    Ok(Json(ApiResponse::success(zone)))
}

async fn create_zone(
    mut session: DbSession,
    ValidatedJson(request): ValidatedJson<ZoneCreate>,
) -> AppResult<(StatusCode, Json<ApiResponse<Zone>>)> {
    let zone = ZoneController::new(&mut session).create(request).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(zone))))
}

async fn legacy_create_zone(
    Path(ignored_id): Path<String>,
    session: DbSession,
    payload: ValidatedJson<ZoneCreate>,
) -> AppResult<(StatusCode, Json<ApiResponse<Zone>>)> {
    warn!("POST /zones/{} es una ruta legacy: el id de la ruta se ignora", ignored_id);
    create_zone(session, payload).await
}

async fn update_zone(
    path: Result<Path<i64>, PathRejection>,
    mut session: DbSession,
    ValidatedJson(request): ValidatedJson<ZoneCreate>,
) -> AppResult<Json<ApiResponse<Zone>>> {
    let id = zone_id(path)?;
    let zone = ZoneController::new(&mut session).update(id, request).await?;
    Ok(Json(ApiResponse::success(zone)))
}

async fn delete_zone(
    path: Result<Path<i64>, PathRejection>,
    mut session: DbSession,
) -> AppResult<StatusCode> {
    let id = zone_id(path)?;
    ZoneController::new(&mut session).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
