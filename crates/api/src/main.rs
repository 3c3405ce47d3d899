use std::time::Duration;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use mentorhub_api::config::ServerConfig;
use mentorhub_api::router::build_app_router;
use mentorhub_api::state::AppState;
use mentorhub_db::DbPool;

const DEFAULT_LOG_FILTER: &str = "mentorhub_api=debug,mentorhub_core=debug,tower_http=debug";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = config.port,
        request_timeout_secs = config.request_timeout_secs,
        "Configuration loaded"
    );

    let pool = open_database(&config).await;

    let state = AppState { pool: pool.clone() };
    let app = build_app_router(state, &config);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| panic!("Cannot bind {addr}: {e}"));
    tracing::info!(%addr, "Listening");

    let grace = Duration::from_secs(config.shutdown_timeout_secs);
    let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

    // Once a signal arrives, in-flight requests get `grace` to finish.
    tokio::select! {
        result = server => {
            if let Err(err) = result {
                tracing::error!(error = %err, "Server terminated with an error");
            }
        }
        () = async {
            shutdown_signal().await;
            tokio::time::sleep(grace).await;
        } => {
            tracing::warn!(grace_secs = grace.as_secs(), "Grace period elapsed with requests still running");
        }
    }

    pool.close().await;
    tracing::info!("Shutdown complete");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connect, verify and migrate. Any failure aborts start-up.
async fn open_database(config: &ServerConfig) -> DbPool {
    let pool = mentorhub_db::create_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("Failed to connect to database");

    mentorhub_db::health_check(&pool)
        .await
        .expect("Database did not answer the health probe");

    mentorhub_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!(
        max_connections = config.db_max_connections,
        "Database ready"
    );
    pool
}

/// Resolves on SIGINT, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Ctrl-C handler unavailable");
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
                tracing::error!(error = %err, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("SIGINT received, shutting down"),
        () = terminate => tracing::info!("SIGTERM received, shutting down"),
    }
}
