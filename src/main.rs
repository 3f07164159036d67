use std::env;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use net_salary_engine::api::{AppState, create_router};
use net_salary_engine::config::ConfigLoader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("net_salary_engine=info,info")),
        )
        .with_target(false)
        .init();

    let config = match env::var("NET_SALARY_CONFIG_DIR") {
        Ok(dir) => ConfigLoader::load(&dir)
            .with_context(|| format!("loading schedule from {}", dir))?,
        Err(_) => {
            info!("NET_SALARY_CONFIG_DIR not set, using built-in statutory schedule");
            ConfigLoader::statutory()
        }
    };

    let host = env::var("NET_SALARY_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("NET_SALARY_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);
    let addr = format!("{}:{}", host, port);

    info!(
        schedule = %config.metadata().code,
        version = env!("CARGO_PKG_VERSION"),
        %addr,
        "Starting net salary engine"
    );

    let app = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
