use axum::{response::IntoResponse, routing::get, Json, Router};

use super::{schema::Acknowledgement, AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

pub async fn health_check() -> impl IntoResponse {
    Json(Acknowledgement::ok())
}
