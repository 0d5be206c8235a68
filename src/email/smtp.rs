use async_trait::async_trait;
use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use secrecy::ExposeSecret;

use super::{DeliveryError, Mailer, OutboundNotification};
use crate::config::SmtpSettings;

/// Port on which the relay expects TLS from the first byte.
const IMPLICIT_TLS_PORT: u16 = 465;

/// Sends notifications through an authenticated SMTP relay.
///
/// The transport is built once and reused by every request.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl SmtpMailer {
    pub fn new(settings: &SmtpSettings) -> Result<Self, DeliveryError> {
        let sender = settings
            .sender
            .parse::<Mailbox>()
            .map_err(|_| DeliveryError::InvalidAddress(settings.sender.clone()))?;

        let credentials = Credentials::new(
            settings.username.clone(),
            settings.password.expose_secret().clone(),
        );

        let builder = if settings.port == IMPLICIT_TLS_PORT {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)?
        } else {
            let tls = TlsParameters::new(settings.host.clone())?;
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&settings.host)
                .tls(Tls::Opportunistic(tls))
        };

        let transport = builder
            .port(settings.port)
            .credentials(credentials)
            .build();

        Ok(Self { transport, sender })
    }

    fn build_message(&self, notification: &OutboundNotification) -> Result<Message, DeliveryError> {
        let mut builder = Message::builder()
            .from(self.sender.clone())
            .subject(notification.subject.as_str());

        for recipient in &notification.recipients {
            let to = recipient
                .parse::<Mailbox>()
                .map_err(|_| DeliveryError::InvalidAddress(recipient.clone()))?;
            builder = builder.to(to);
        }

        if let Some(reply_to) = &notification.reply_to {
            let reply_to = reply_to
                .parse::<Mailbox>()
                .map_err(|_| DeliveryError::InvalidAddress(reply_to.clone()))?;
            builder = builder.reply_to(reply_to);
        }

        let message = builder.multipart(MultiPart::alternative_plain_html(
            notification.text_body.clone(),
            notification.html_body.clone(),
        ))?;

        Ok(message)
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    #[tracing::instrument(name = "sending email over smtp", skip_all, fields(subject = %notification.subject))]
    async fn send(&self, notification: &OutboundNotification) -> Result<(), DeliveryError> {
        let message = self.build_message(notification)?;
        let response = self.transport.send(message).await?;
        tracing::debug!(code = %response.code(), "smtp relay accepted the email");

        Ok(())
    }
}
