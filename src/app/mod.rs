use std::{io, net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{http::Request, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{
    config::{MissingSettings, Settings},
    domain::rsvp::variant::FormVariant,
    email::{Mailer, SmtpMailer},
};

mod asset;
mod error;
mod health;
mod home;
mod rsvp;
mod schema;

/// How RSVPs get delivered, decided once at startup.
pub type Delivery = Result<Arc<dyn Mailer>, MissingSettings>;

#[derive(Clone)]
pub struct AppState {
    mailer: Delivery,
    form_variant: FormVariant,
}

fn app_router() -> Router<AppState> {
    health::router()
        .merge(rsvp::router())
        .merge(asset::router())
        .fallback(home::route::index_page)
}

pub struct App {
    listener: TcpListener,
    address: SocketAddr,
    state: AppState,
}

impl App {
    /// Binds the listener and connects RSVPs to the SMTP relay described by `config`.
    ///
    /// Missing SMTP settings do not stop the server: the page keeps working and
    /// every RSVP is answered with the list of missing settings.
    pub async fn with(config: &Settings) -> anyhow::Result<Self> {
        let mailer: Delivery = match config.smtp() {
            Ok(smtp) => {
                let mailer: Arc<dyn Mailer> = Arc::new(
                    SmtpMailer::new(&smtp).context("Could not set up the SMTP mailer")?,
                );
                Ok(mailer)
            }
            Err(missing) => {
                tracing::warn!(%missing, "RSVP emails cannot be delivered");
                Err(missing)
            }
        };

        Self::with_mailer(config, mailer).await
    }

    /// Like [`App::with`], with the delivery side supplied by the caller.
    pub async fn with_mailer(config: &Settings, mailer: Delivery) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(format!("0.0.0.0:{}", config.port))
            .await
            .with_context(|| format!("Could not bind port {}", config.port))?;
        let address = listener.local_addr()?;

        Ok(Self {
            listener,
            address,
            state: AppState {
                mailer,
                form_variant: config.form_variant,
            },
        })
    }

    pub fn port(&self) -> u16 {
        self.address.port()
    }

    pub async fn serve(self) -> Result<(), io::Error> {
        let app = app_router().with_state(self.state).layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                let id = uuid::Uuid::new_v4();
                tracing::info_span!(
                    "request",
                    method = ?request.method(),
                    uri = ?request.uri(),
                    %id,
                )
            }),
        );

        axum::serve(self.listener, app.into_make_service()).await
    }
}
