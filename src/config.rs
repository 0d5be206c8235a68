use config::{Config, ConfigError, Environment};
use secrecy::Secret;
use serde::Deserialize;

use crate::domain::rsvp::variant::FormVariant;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_LEVEL: &str = "info,birthday_rsvp=debug,tower_http=debug";

/// Process-wide settings, read once at startup from the environment.
///
/// Environment variables map to fields by lowercasing their name, so
/// `SMTP_HOST` fills `smtp_host`. Empty variables are treated as unset.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub port: u16,
    pub log_level: String,
    pub form_variant: FormVariant,
    pub smtp_host: Option<String>,
    pub smtp_port: Option<u16>,
    pub smtp_user: Option<String>,
    pub smtp_pass: Option<Secret<String>>,
    pub from_email: Option<String>,
}

/// Everything needed to talk to the mail relay.
#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: Secret<String>,
    pub sender: String,
}

/// Names of the environment variables that must be set before RSVPs can be delivered.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Server email setup missing: {}", .0.join(", "))]
pub struct MissingSettings(pub Vec<&'static str>);

impl Settings {
    /// Mail relay settings, or the variables still missing, in a fixed order.
    pub fn smtp(&self) -> Result<SmtpSettings, MissingSettings> {
        let mut missing = Vec::new();
        if self.smtp_host.is_none() {
            missing.push("SMTP_HOST");
        }
        if self.smtp_port.is_none() {
            missing.push("SMTP_PORT");
        }
        if self.smtp_user.is_none() {
            missing.push("SMTP_USER");
        }
        if self.smtp_pass.is_none() {
            missing.push("SMTP_PASS");
        }

        match (
            &self.smtp_host,
            self.smtp_port,
            &self.smtp_user,
            &self.smtp_pass,
        ) {
            (Some(host), Some(port), Some(username), Some(password)) => Ok(SmtpSettings {
                host: host.clone(),
                port,
                username: username.clone(),
                password: password.clone(),
                sender: self.from_email.clone().unwrap_or_else(|| username.clone()),
            }),
            _ => Err(MissingSettings(missing)),
        }
    }
}

pub fn get_configuration() -> Result<Settings, ConfigError> {
    Config::builder()
        .set_default("port", i64::from(DEFAULT_PORT))?
        .set_default("log_level", DEFAULT_LOG_LEVEL)?
        .set_default("form_variant", "guests")?
        .add_source(Environment::default().ignore_empty(true))
        .build()?
        .try_deserialize()
}
