use axum::{
    extract::State,
    http::Uri,
    routing::{get, MethodRouter},
    Json, Router,
};

use crate::dto::RootResponse;
use crate::state::AppState;
use crate::utils::AppError;

pub fn create_root_router() -> Router<AppState> {
    Router::new().route("/", root_route())
}

/// `GET /` también se monta en `{prefijo}/` fuera del nest
pub fn root_route() -> MethodRouter<AppState> {
    get(root)
}

/// Mensaje de bienvenida con la ruta de la base configurada
async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: "Hello World!".to_string(),
        database_path: state.config.database_path.clone(),
    })
}

/// Rutas desconocidas: 404 con el mismo cuerpo JSON que el resto de errores
pub async fn not_found_fallback(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
