use anyhow::Context;
use birthday_rsvp::{app::App, config::get_configuration, telemetry::get_subscriber};
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the real environment still applies.
    dotenvy::dotenv().ok();

    let config = get_configuration().context("Failed to read configuration.")?;

    get_subscriber(&config.log_level, std::io::stderr).init();

    let app = App::with(&config).await?;

    tracing::info!(
        port = app.port(),
        variant = ?config.form_variant,
        "invite app running at http://localhost:{}",
        app.port()
    );
    app.serve().await.context("The server stopped unexpectedly.")?;

    Ok(())
}
