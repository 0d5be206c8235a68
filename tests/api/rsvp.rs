use birthday_rsvp::{domain::rsvp::variant::FormVariant, email::RECIPIENTS};
use serde_json::{json, Value};

use crate::helper::{spawn_app, spawn_app_with, spawn_unconfigured_app, RecordingMailer};

const VALID_BODY: &str = r#"{
    "name": "<b>Al</b>",
    "phone": "555-0100",
    "email": "al@example.com",
    "attendance": "yes",
    "adults": 2,
    "kids": 1,
    "message": "Can't wait & see you \"soon\""
}"#;

async fn error_of(response: reqwest::Response) -> String {
    let body = response.json::<Value>().await.unwrap();
    body["error"].as_str().unwrap().to_owned()
}

#[tokio::test]
async fn rsvp_returns_200_and_sends_one_email_for_valid_data() {
    let app = spawn_app().await;

    let response = app.post_rsvp(VALID_BODY).await;

    assert_eq!(200, response.status().as_u16());
    assert_eq!(json!({ "ok": true }), response.json::<Value>().await.unwrap());

    let sent = app.sent();
    assert_eq!(1, sent.len());
    let email = &sent[0];
    assert_eq!(email.recipients, RECIPIENTS);
    assert_eq!(email.subject, "RSVP: <b>Al</b> (yes)");
    assert_eq!(email.reply_to.as_deref(), Some("al@example.com"));

    assert!(email.html_body.contains("&lt;b&gt;Al&lt;/b&gt;"));
    assert!(email
        .html_body
        .contains("Can&#039;t wait &amp; see you &quot;soon&quot;"));
    assert!(!email.html_body.contains("<b>Al</b>"));

    assert!(email.text_body.contains("Guest Name: <b>Al</b>"));
    assert!(email
        .text_body
        .contains("Message: Can't wait & see you \"soon\""));
    assert!(email.text_body.contains("Adults: 2"));
    assert!(email.text_body.contains("Kids: 1"));
    assert!(email.text_body.contains("Submitted: "));
}

#[tokio::test]
async fn rsvp_returns_a_400_naming_missing_fields() {
    let app = spawn_app().await;
    let test_cases = [
        (
            r#"{"phone": "555-0100", "attendance": "yes", "adults": 1, "kids": 0}"#,
            "Name is required.",
        ),
        (
            r#"{"name": "Ada", "attendance": "yes", "adults": 1, "kids": 0}"#,
            "Phone is required.",
        ),
        (
            r#"{"name": " ", "phone": "555-0100", "adults": 1, "kids": 0}"#,
            "Name and attendance are required.",
        ),
        ("{}", "Name, phone, and attendance are required."),
    ];

    for (body, expected) in test_cases {
        let response = app.post_rsvp(body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 when the payload was {}",
            body
        );
        assert_eq!(expected, error_of(response).await);
    }
    assert!(app.sent().is_empty());
}

#[tokio::test]
async fn rsvp_returns_a_400_for_overlong_fields_without_calling_them_missing() {
    let app = spawn_app().await;
    let test_cases = [
        (
            json!({
                "name": "a".repeat(300),
                "phone": "1".repeat(40),
                "attendance": "yes",
                "adults": 1,
                "kids": 0
            }),
            "Name is too long.",
        ),
        (
            json!({
                "name": "Ada",
                "phone": "1".repeat(40),
                "attendance": "yes",
                "adults": 1,
                "kids": 0
            }),
            "Please provide a valid phone number.",
        ),
    ];

    for (body, expected) in test_cases {
        let response = app.post_rsvp(&body.to_string()).await;

        assert_eq!(400, response.status().as_u16());
        assert_eq!(expected, error_of(response).await);
    }
    assert!(app.sent().is_empty());
}

#[tokio::test]
async fn email_form_requires_an_email() {
    let app = spawn_app_with(FormVariant::Email, RecordingMailer::default()).await;

    let response = app.post_rsvp(r#"{"name": "Ada", "attendance": "no"}"#).await;
    assert_eq!(400, response.status().as_u16());
    assert_eq!("Email is required.", error_of(response).await);

    let response = app
        .post_rsvp(r#"{"name": "Ada", "email": "ada@example.com", "attendance": "no"}"#)
        .await;
    assert_eq!(200, response.status().as_u16());
    assert_eq!(1, app.sent().len());
}

#[tokio::test]
async fn rsvp_returns_a_400_when_attending_without_guests() {
    let app = spawn_app().await;

    for attendance in ["yes", "YES", "Yes"] {
        let body = json!({
            "name": "Ada",
            "phone": "555-0100",
            "attendance": attendance,
            "adults": 0,
            "kids": 0
        });
        let response = app.post_rsvp(&body.to_string()).await;

        assert_eq!(400, response.status().as_u16());
        assert_eq!("Please update number of guests.", error_of(response).await);
    }
    assert!(app.sent().is_empty());
}

#[tokio::test]
async fn rsvp_returns_a_400_for_invalid_guest_counts() {
    let app = spawn_app().await;
    let test_cases = [
        (json!("two"), json!(1), "non-numeric adults"),
        (json!(1), json!(-1), "negative kids"),
        (json!(null), json!(1), "null adults"),
        (json!(1), json!("lots"), "non-numeric kids"),
    ];

    for (adults, kids, description) in test_cases {
        let body = json!({
            "name": "Ada",
            "phone": "555-0100",
            "attendance": "yes",
            "adults": adults,
            "kids": kids
        });
        let response = app.post_rsvp(&body.to_string()).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not return a 400 Bad Request for {}.",
            description
        );
        assert_eq!(
            "Adults and kids must be valid numbers.",
            error_of(response).await
        );
    }
}

#[tokio::test]
async fn rsvp_returns_a_400_for_malformed_json() {
    let app = spawn_app().await;

    for body in ["{not json", "", "[1, 2]"] {
        let response = app.post_rsvp(body).await;

        assert_eq!(400, response.status().as_u16(), "payload was {body:?}");
        assert_eq!("Invalid JSON payload.", error_of(response).await);
    }
    assert!(app.sent().is_empty());
}

#[tokio::test]
async fn delivery_failure_returns_a_generic_500() {
    let app = spawn_app_with(FormVariant::Guests, RecordingMailer::failing()).await;

    let response = app.post_rsvp(VALID_BODY).await;

    assert_eq!(500, response.status().as_u16());
    let body = response.text().await.unwrap();
    assert_eq!(json!({ "error": "Failed to send RSVP email." }).to_string(), body);
    assert!(!body.contains("535"));
    assert_eq!(1, app.sent().len());
}

#[tokio::test]
async fn missing_email_settings_return_a_500_naming_them() {
    let app = spawn_unconfigured_app().await;

    for body in [VALID_BODY, "{}", "{not json"] {
        let response = app.post_rsvp(body).await;

        assert_eq!(500, response.status().as_u16());
        assert_eq!(
            "Server email setup missing: SMTP_HOST, SMTP_PORT, SMTP_USER, SMTP_PASS",
            error_of(response).await
        );
    }
}

#[tokio::test]
async fn preflight_returns_204_with_cors_headers() {
    for app in [spawn_app().await, spawn_unconfigured_app().await] {
        let response = app
            .client
            .request(reqwest::Method::OPTIONS, format!("{}/api/rsvp", app.addr))
            .send()
            .await
            .expect("The request should succeed.");

        assert_eq!(204, response.status().as_u16());
        let headers = response.headers();
        assert_eq!(headers["access-control-allow-origin"], "*");
        assert_eq!(headers["access-control-allow-methods"], "POST, OPTIONS");
        assert_eq!(headers["access-control-allow-headers"], "Content-Type");
    }
}

#[tokio::test]
async fn other_methods_are_not_allowed() {
    let app = spawn_app().await;

    let response = app.get("/api/rsvp").await;
    assert_eq!(405, response.status().as_u16());
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
    assert_eq!("Method not allowed.", error_of(response).await);

    let response = app
        .client
        .delete(format!("{}/api/rsvp", app.addr))
        .send()
        .await
        .expect("The request should succeed.");
    assert_eq!(405, response.status().as_u16());
}

#[tokio::test]
async fn cors_headers_are_set_on_rsvp_responses() {
    let app = spawn_app().await;

    let response = app.post_rsvp("{}").await;

    assert_eq!(400, response.status().as_u16());
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}
