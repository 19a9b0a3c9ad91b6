mod handlers;
pub mod routings;

use crate::routings::router;
use app_config::AppConfig;
use app_error::AppError;
use app_log::init_tracing;
use app_state::AppState;
use dotenv::dotenv;
use std::sync::Arc;
use tokio::signal;
use tracing::*;

pub async fn web_service() -> Result<(), AppError> {
    dotenv().ok();
    let config = AppConfig::new()?;
    let bind = config.web_bind.clone();
    init_tracing(config.log_level);
    // SQLite
    let app_state = Arc::new(AppState::connect(config).await?);
    // Loading Routes
    let routes = router(app_state.clone());
    // Setup TCP Port
    let tcp_listener = tokio::net::TcpListener::bind(&bind).await?;
    // Running Server ...
    info!("Serving web server on {}", &bind);
    let served = axum::serve(tcp_listener, routes)
        .with_graceful_shutdown(shutdown_signal())
        .await;
    app_state.close().await;
    served?;
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Cannot listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Cannot listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
