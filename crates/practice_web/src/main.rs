#![forbid(unsafe_code)]

use log::{error, info};
use practice_web::{build_router, init_server_logging, open_store, AppState, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;
    init_server_logging(&config)?;

    let conn = open_store(&config)?;
    let app = build_router(AppState::new(conn));

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!(
        "event=http_listen module=web status=ok addr={} db={}",
        listener.local_addr()?,
        config
            .db_path
            .as_ref()
            .map_or_else(|| "memory".to_string(), |path| path.display().to_string())
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("event=http_shutdown module=web status=ok");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("event=http_shutdown module=web status=error error={err}");
        std::future::pending::<()>().await;
    }
}
