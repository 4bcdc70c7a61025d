//! Modulspace marketing site server.

use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use modulspace_site::config::SiteConfig;
use modulspace_site::db::{create_pool, ensure_schema};
use modulspace_site::routes;
use modulspace_site::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "modulspace_site=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SiteConfig::from_env().expect("failed to load configuration");

    // The site stays up without a database; persistence and auth degrade
    // while static pages and email still work.
    let pool = match &config.database_url {
        Some(url) => match create_pool(url).await {
            Ok(pool) => match ensure_schema(&pool).await {
                Ok(()) => {
                    tracing::info!("database connected, schema ready");
                    Some(pool)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "schema setup failed, running without database");
                    None
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "database unavailable, running without database");
                None
            }
        },
        None => {
            tracing::info!("DATABASE_URL not set, running without database");
            None
        }
    };

    let state = AppState::new(config, pool).expect("failed to build application state");

    let addr = state.config().socket_addr();
    let app = routes::app(state);

    let listener = TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");

    tracing::info!(%addr, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
