use fitness_tracker::{router, AppState, MockPolicy, SimulatedProvider};
use std::{env, net::SocketAddr, path::PathBuf, sync::Arc};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let provider = build_provider().await;
    let state = AppState::new(Arc::new(provider), MockPolicy::from_env());
    let app = router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn build_provider() -> SimulatedProvider {
    if env::var("FITNESS_AUTH").as_deref() == Ok("deny") {
        return SimulatedProvider::denying();
    }
    match env::var("FITNESS_SAMPLES_PATH") {
        Ok(path) => SimulatedProvider::from_file(&PathBuf::from(path)).await,
        Err(_) => SimulatedProvider::new(),
    }
}
