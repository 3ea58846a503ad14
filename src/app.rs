use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{openapi, routes, types::AppState};

pub fn build_router(app_state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::health::router())
        .route("/version", get(routes::version::version))
        .route("/api-doc/openapi.json", get(openapi::openapi_json));

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
