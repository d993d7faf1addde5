use fashion_scout_server::{app, init_tracing, models::{AppConfig, AppState}};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let app_config = AppConfig::from_env()?;
    let listen_addr = app_config.listen_addr.clone();
    tracing::info!(
        environment = ?app_config.environment,
        base_url = %app_config.base_url,
        "configuration loaded"
    );

    let app_state = AppState::new(app_config)?;
    let app = app(app_state);

    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {:?}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
