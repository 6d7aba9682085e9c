pub mod root_routes;
pub mod zone_routes;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use crate::state::AppState;

/// Construir el router completo de la aplicación bajo el prefijo configurado
pub fn create_app(state: AppState) -> Router {
    let config = state.config.clone();

    let api = Router::new()
        .merge(root_routes::create_root_router())
        .merge(zone_routes::create_zone_router(config.legacy_create_route));

    // axum no permite anidar en la raíz, y el `/` anidado solo responde sin barra final
    let router = if config.api_prefix.is_empty() {
        api
    } else {
        Router::new()
            .route(&format!("{}/", config.api_prefix), root_routes::root_route())
            .nest(&config.api_prefix, api)
    };

    let cors = if config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    router
        .fallback(root_routes::not_found_fallback)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
