use std::net::SocketAddr;
use tracing_subscriber::{EnvFilter, fmt};

use users::shell::config::AppConfig;
use users::shell::http::{USERS_PATH, router};
use users::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    // In-memory deps for now
    let state = AppState::in_memory();
    let app = router(state, &config);

    tracing::info!("users endpoint: http://{}{}", config.bind_addr, USERS_PATH);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}
