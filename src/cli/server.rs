use std::sync::Arc;

use anyhow::Result;
use homeservice_notification::EmailService;

use crate::{config::Config, routes::AppState};

/// Wires the SMTP mailer into the contact command and builds the shared state.
pub fn app_state(config: Config) -> Result<AppState> {
    let mailer = EmailService::new(&config.email)?;
    let contact_command = homeservice_contact::Command::new(
        Arc::new(mailer),
        config.contact.recipient.to_owned(),
        config.contact.subject.to_owned(),
    );

    Ok(AppState {
        config: Arc::new(config),
        contact_command,
    })
}

#[tracing::instrument(skip(config))]
pub async fn serve(
    config: Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting homeservice server...");

    // Use CLI overrides if provided, otherwise use config
    let host = host_override.unwrap_or(config.server.host.to_owned());
    let port = port_override.unwrap_or(config.server.port);

    tracing::info!(
        recipient = %config.contact.recipient,
        site_root = %config.site.root.display(),
        "Contact form handler ready"
    );

    let app = crate::routes::router(app_state(config)?);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("failed to install SIGTERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal");
        },
    }

    tracing::info!("Starting graceful shutdown...");
}
