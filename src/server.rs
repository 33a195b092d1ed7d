use crate::{
    app_state::AppState,
    config::{Config, ServerConfig},
    error::ServiceError,
    models::ServiceKind,
    routes::create_router,
    telemetry,
};
use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;

/// Start one service and block until it is told to shut down
pub async fn run(kind: ServiceKind) -> Result<(), ServiceError> {
    // Config first: it decides the log format
    let config = Config::load(kind)?;
    telemetry::init(&config.log)?;

    tracing::info!(
        service = kind.name(),
        "Loaded configuration - Server: {}",
        config.server.address()
    );

    let listener = bind(&config.server)
        .await
        .inspect_err(|e| tracing::error!(service = kind.name(), "{}", e))?;
    let port = listener
        .local_addr()
        .map(|addr| addr.port())
        .unwrap_or(config.server.port);

    let app = create_router(AppState::new(kind, config));

    tracing::info!("{}", kind.startup_message(port));

    serve(listener, app, shutdown_signal()).await?;

    tracing::info!(service = kind.name(), "Server stopped");
    Ok(())
}

pub async fn bind(config: &ServerConfig) -> Result<TcpListener, ServiceError> {
    let addr = config.address();
    TcpListener::bind(&addr)
        .await
        .map_err(|source| ServiceError::Bind { addr, source })
}

/// Serve `router` on `listener` until `shutdown` resolves.
///
/// In-flight requests are allowed to finish after the signal.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> Result<(), ServiceError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServiceError::Serve)
}

/// Resolves on Ctrl-C, or SIGTERM on unix
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
