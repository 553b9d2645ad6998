use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use reelscout_server::config::Config;
use reelscout_videos::resolver::DurationFloor;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing, JSON lines when LOG_FORMAT=json
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let config = Config::from_env().context("invalid configuration")?;
    if config.duration_floor != DurationFloor::default() {
        warn!(
            floor = ?config.duration_floor,
            "hosted video duration floor differs from the one-hour default"
        );
    }

    let app_state =
        reelscout_server::build_state(&config).context("failed to build HTTP client")?;
    let app = reelscout_server::routes::build_router(app_state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .context("failed to bind")?;
    info!(
        addr = %config.bind_addr,
        upstream_timeout_secs = config.upstream_timeout.as_secs(),
        "server listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
