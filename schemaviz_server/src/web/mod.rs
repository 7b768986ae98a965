
mod error;
pub mod mw_res_map;
pub mod routes_catalog;

pub use self::error::{Error, Result};

use axum::http::HeaderValue;
use axum::{middleware, Router};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};

use crate::config;
use crate::model::ModelManager;
use mw_res_map::mw_response_map;

pub fn app(mm: ModelManager) -> Router {
    Router::new()
        .merge(routes_catalog::routes(mm))
        .layer(middleware::map_response(mw_response_map))
        .layer(cors_layer(config().CORS_ORIGIN.clone()))
}

/// Browser clients send credentials, which rules out wildcard methods and
/// headers; the request's own are mirrored back instead.
pub fn cors_layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}
