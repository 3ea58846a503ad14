use anyhow::Result;
use tracing_subscriber::EnvFilter;

use ats_score::{app, config::Config, startup};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ats_score=info,tower_http=info")),
        )
        .init();

    if let Err(err) = run().await {
        tracing::error!("startup failed: {:#}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = Config::from_env()?;
    let app_state = startup::bootstrap(&config).await?;
    let app = app::build_router(app_state);

    let listener = startup::bind(&config).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install CTRL+C signal handler: {}", err);
        std::future::pending::<()>().await;
    }
    tracing::info!("signal received, starting graceful shutdown");
}
