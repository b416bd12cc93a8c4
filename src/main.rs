mod adapters;
mod application;
mod domain;
mod services;

use std::sync::Arc;

use adapters::{repositories::PgFileRepository, router::build_router, state::AppState};
use application::repositories::file_repository::FileRepository;
use domain::config::settings::{DatabaseSettings, Settings};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use tracing_subscriber::EnvFilter;

fn connect_options(database: &DatabaseSettings) -> Result<PgConnectOptions, sqlx::Error> {
    match database.url {
        Some(ref url) => url.parse(),
        None => Ok(PgConnectOptions::new()
            .host(&database.host)
            .port(database.port)
            .username(&database.user)
            .password(&database.password)
            .database(&database.name)),
    }
}

/// Resolves when `signal` fires. A handler that fails to install never resolves,
/// so it cannot trigger shutdown on its own.
async fn wait_for_signal<F>(signal: F, name: &str)
where
    F: std::future::Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        tracing::warn!("Cannot install {} handler: {}", name, e);
        std::future::pending::<()>().await;
    }
}

async fn shutdown_signal() {
    let ctrl_c = wait_for_signal(tokio::signal::ctrl_c(), "Ctrl+C");

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Cannot install SIGTERM handler: {}", e);
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

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Initialize AWS SDK crypto provider (required for aws-sdk-s3)
    // This must be called before any AWS SDK operations
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let settings = Settings::from_env().unwrap_or_else(|e| panic!("ERROR: {}", e));

    tracing::info!(
        "Starting file-meta-service with bucket: {}",
        settings.storage.bucket
    );

    let options = connect_options(&settings.database)
        .expect("ERROR: DATABASE_URL is not a valid PostgreSQL connection URL");

    // Connect to PostgreSQL and build the S3 client in parallel for faster startup
    tracing::info!("Connecting to PostgreSQL and S3...");
    let (pool, storage_service) = tokio::join!(
        async {
            PgPoolOptions::new()
                .max_connections(settings.database.max_connections)
                .acquire_timeout(std::time::Duration::from_secs(30))
                .connect_with(options)
                .await
                .expect("ERROR: Failed to connect to PostgreSQL database. Check DB_* settings and network connectivity.")
        },
        services::create_storage_service(&settings.storage)
    );
    tracing::info!("Connections established");

    let file_repository = Arc::new(PgFileRepository::new(pool)) as Arc<dyn FileRepository>;
    if let Err(e) = file_repository.ensure_schema().await {
        panic!("ERROR: Failed to prepare 'files' table: {:?}", e);
    }

    let app_state = AppState {
        storage_service,
        file_repository,
        download_url_ttl: settings.download_url_ttl,
    };

    let router = build_router(app_state, &settings);

    // Start the server
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", settings.port))
        .await
        .expect("Failed to bind to port");

    tracing::info!("Server listening on 0.0.0.0:{}", settings.port);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Failed to start server");
}
