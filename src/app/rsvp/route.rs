use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use tracing::{field, instrument, Span};

use crate::{
    app::{
        error::{AppError, AppResult},
        schema::Acknowledgement,
        AppState,
    },
    domain::rsvp::{RsvpForm, RsvpSubmission},
    email::{DeliveryError, Mailer, OutboundNotification, SUBMITTED_AT_FORMAT},
};

#[instrument(
    name = "submitting an rsvp",
    skip(state, payload),
    fields(guest = field::Empty, attendance = field::Empty)
)]
pub async fn submit_rsvp(
    State(state): State<AppState>,
    payload: Result<Json<RsvpForm>, JsonRejection>,
) -> AppResult<Json<Acknowledgement>> {
    let mailer = state.mailer.as_ref().map_err(|missing| missing.clone())?;
    let Json(form) = payload?;

    let submission =
        RsvpSubmission::validate(form, state.form_variant).map_err(AppError::ValidationError)?;

    let span = Span::current();
    span.record("guest", submission.name.as_ref());
    span.record("attendance", submission.attendance.as_ref());

    let submitted_at = chrono::Local::now().format(SUBMITTED_AT_FORMAT).to_string();
    let notification = OutboundNotification::compose(&submission, &submitted_at);
    send_notification(mailer.as_ref(), &notification).await?;

    tracing::info!("rsvp delivered");
    Ok(Json(Acknowledgement::ok()))
}

#[instrument(name = "sending the rsvp notification", skip_all, fields(subject = %notification.subject))]
async fn send_notification(
    mailer: &dyn Mailer,
    notification: &OutboundNotification,
) -> Result<(), DeliveryError> {
    mailer.send(notification).await
}

pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
