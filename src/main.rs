use solar_forecast::state::AppState;
use solar_forecast::{api, config, inference};
use std::net::SocketAddr;
use std::sync::Arc;

fn init_tracing() {
    let subscriber = tracing_subscriber::fmt().with_target(false).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    tracing::info!(
        config_path = config::DEFAULT_CONFIG_PATH,
        "solar-forecast starting"
    );
    let config = config::load_default()?;
    let (scaler_path, model_path) = config.artifact_paths()?;

    // Missing or incompatible artifacts abort startup.
    let scaler = inference::load_scaler_from_path(scaler_path)?;
    tracing::info!(path = %scaler_path.display(), kind = scaler.kind(), "Scaler loaded");
    let model = inference::load_model_from_path(model_path)?;
    tracing::info!(path = %model_path.display(), kind = model.kind(), "Model loaded");

    let state = Arc::new(AppState::new(
        config.app.name.clone(),
        Arc::from(scaler),
        Arc::from(model),
    ));

    let app = api::router(Arc::clone(&state));
    let port = config.server_port();
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "API server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
