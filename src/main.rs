//! Server entry point: init store, mount routes, serve.

use example_service::{app, store, AppState, Config};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("example_service=info".parse()?),
        )
        .init();

    let config = Config::from_env();
    let pool = store::init(&config.database_url).await?;
    let state = AppState { pool };
    let app = app(state, &config.cors_origin)?;

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
