//! WhoCodes server: reads config from the environment, prepares the store, serves the API.

use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::EnvFilter;
use whocodes::{app, apply_migrations, connect, AppState, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("whocodes=info")),
        )
        .init();

    let config = Config::from_env()?;
    let pool = connect(&config.database).await?;
    apply_migrations(&pool).await?;

    let router = app(AppState::new(pool.clone()), config.body_limit_bytes);
    let listener = TcpListener::bind(config.listen_addr).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        database_url = %config.database.url,
        "listening"
    );
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    pool.close().await;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
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
    tracing::info!("shutdown signal received");
}
