mod api;
mod middleware;

use std::sync::Arc;

use aptsite_airtable::AirtableClient;
use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = aptsite_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let airtable = &config.airtable;
    let upstream = match airtable.credentials() {
        Some((token, base_id)) => Some(Arc::new(AirtableClient::with_base_url(
            token,
            base_id,
            airtable.timeout_secs,
            &airtable.api_url,
        )?)),
        None => {
            tracing::warn!(
                env = %config.env,
                "AIRTABLE_TOKEN not set; /api/data will answer with a configuration error"
            );
            None
        }
    };

    let app = build_app(AppState::new(
        upstream,
        &airtable.pricing_table,
        &airtable.faq_table,
    ));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, env = %config.env, "aptsite-server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
