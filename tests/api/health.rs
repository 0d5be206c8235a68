use serde_json::{json, Value};

use crate::helper::{spawn_app, spawn_unconfigured_app};

#[tokio::test]
async fn health_check_works() {
    let app = spawn_app().await;

    let response = app.get("/health").await;

    assert_eq!(200, response.status().as_u16());
    assert_eq!(json!({ "ok": true }), response.json::<Value>().await.unwrap());
}

#[tokio::test]
async fn health_check_works_without_email_settings() {
    let app = spawn_unconfigured_app().await;

    let response = app.get("/health").await;

    assert_eq!(200, response.status().as_u16());
    assert_eq!(json!({ "ok": true }), response.json::<Value>().await.unwrap());
}
