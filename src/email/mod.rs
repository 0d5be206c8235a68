//! Outbound RSVP notifications.
//!
//! [`OutboundNotification::compose`] turns a validated submission into an
//! email and a [`Mailer`] delivers it. Production code uses [`SmtpMailer`];
//! tests substitute their own implementation.

mod notification;
mod smtp;

use async_trait::async_trait;

pub use notification::{escape_html, OutboundNotification, RECIPIENTS, SUBMITTED_AT_FORMAT};
pub use smtp::SmtpMailer;

#[derive(thiserror::Error, Debug)]
pub enum DeliveryError {
    #[error("invalid email address: {0}")]
    InvalidAddress(String),
    #[error("failed to build the email")]
    Build(#[from] lettre::error::Error),
    #[error("smtp transport error")]
    Transport(#[from] lettre::transport::smtp::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Anything able to deliver an [`OutboundNotification`].
///
/// Delivery is attempted once; implementations must not retry.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, notification: &OutboundNotification) -> Result<(), DeliveryError>;
}
