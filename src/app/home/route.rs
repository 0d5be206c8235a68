use askama::Template;
use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};

use crate::{app::AppState, domain::rsvp::variant::FormVariant};

#[derive(Template)]
#[template(path = "index.html")]
struct InvitationTemplate {
    requires_email: bool,
    collects_phone: bool,
    collects_guest_counts: bool,
}

impl From<FormVariant> for InvitationTemplate {
    fn from(variant: FormVariant) -> Self {
        Self {
            requires_email: variant.requires_email(),
            collects_phone: variant.collects_phone(),
            collects_guest_counts: variant.collects_guest_counts(),
        }
    }
}

/// Serves the invitation for any GET that no other route claims, so deep links
/// land on the page.
#[tracing::instrument(name = "Invitation page", skip(state))]
pub async fn index_page(State(state): State<AppState>, method: Method) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::NOT_FOUND.into_response();
    }

    InvitationTemplate::from(state.form_variant).into_response()
}
