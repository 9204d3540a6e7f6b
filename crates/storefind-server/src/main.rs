mod api;
mod middleware;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use storefind_engine::SearchEngine;
use storefind_maps::{ClientConfig, MapsClient};

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = storefind_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let pool_config = storefind_db::PoolConfig::from_app_config(&config);
    let pool = storefind_db::connect_pool(&config.database_url, pool_config).await?;
    storefind_db::run_migrations(&pool).await?;

    let api_key = config.google_maps_api_key.clone().unwrap_or_else(|| {
        tracing::warn!(
            "GOOGLE_MAPS_API_KEY is not set; searches will rely on static fallbacks"
        );
        String::new()
    });
    let maps = MapsClient::new(ClientConfig {
        api_key,
        geocode_timeout_secs: config.geocode_timeout_secs,
        places_timeout_secs: config.places_timeout_secs,
    })?;
    let engine = Arc::new(SearchEngine::new(maps, config.search_radius_miles));

    let app = build_app(AppState { pool, engine });

    tracing::info!(bind_addr = %config.bind_addr, env = %config.env, "starting storefind server");
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
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
