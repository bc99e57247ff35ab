use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use notes_service::config::Config;
use notes_service::domain::identity::refresh::RefreshService;
use notes_service::domain::identity::service::AuthService;
use notes_service::domain::note::service::NoteService;
use notes_service::inbound::http::router::create_router;
use notes_service::inbound::http::router::HttpSettings;
use notes_service::outbound::repositories::PostgresCredentialStore;
use notes_service::outbound::repositories::PostgresNoteStore;
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "notes_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "notes-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        request_timeout_secs = config.server.request_timeout_secs,
        max_connections = config.database.max_connections,
        secure_cookies = config.cookies.secure,
        allowed_origins = ?config.cors.allowed_origins,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(
        config.tokens.access_secret.expose_secret().as_bytes(),
        config.tokens.refresh_secret.expose_secret().as_bytes(),
    ));
    let credential_store = Arc::new(PostgresCredentialStore::new(pg_pool.clone()));
    let note_store = Arc::new(PostgresNoteStore::new(pg_pool));

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&credential_store),
        Arc::clone(&authenticator),
    ));
    let refresh_service = Arc::new(RefreshService::new(
        credential_store,
        Arc::clone(&authenticator),
    ));
    let note_service = Arc::new(NoteService::new(note_store));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        auth_service,
        refresh_service,
        note_service,
        authenticator,
        HttpSettings {
            request_timeout: Duration::from_secs(config.server.request_timeout_secs),
            allowed_origins: config.cors.allowed_origins,
            secure_cookies: config.cookies.secure,
        },
    );

    axum::serve(http_listener, http_application)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server exited successfully");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
