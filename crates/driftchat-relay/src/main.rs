use driftchat_relay::api::{AppState, router};
use driftchat_relay::config::RelayConfig;
use driftchat_relay::upstream::UpstreamClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing logger
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,driftchat_relay=debug".into()),
        )
        .with_target(false)
        .init();

    // Missing upstream settings abort startup with a non-zero exit.
    let config = RelayConfig::from_env()?;

    let state = AppState {
        upstream: UpstreamClient::new(&config.upstream_url, &config.upstream_key),
    };
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    tracing::info!(
        "DriftChat relay running on http://{}",
        listener.local_addr()?
    );

    axum::serve(listener, app).await?;
    Ok(())
}
