use axum::{
    http::{header, HeaderValue},
    routing::post,
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use super::AppState;

pub mod route;

/// `/api/rsvp`, open to any origin so the page can be hosted elsewhere.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/rsvp",
            post(route::submit_rsvp)
                .options(route::preflight)
                .fallback(route::method_not_allowed),
        )
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
}
