use anyhow::Result;
use magicbox::integration::{BoxConfig, Orchestrator};
use magicbox::oracle::OracleClient;
use magicbox::panel;
use magicbox::session::SessionServer;
use magicbox::setup;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "magicbox=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting magic box");

    let config = BoxConfig::from_env()?;

    // Feedback hardware must be present before anything else runs.
    #[cfg(feature = "hardware")]
    let panel = panel::shared(panel::GpioPanel::probe()?);
    #[cfg(not(feature = "hardware"))]
    let panel = panel::shared(panel::ConsolePanel::new());

    // Show the box's address so the operator knows where to point the client.
    let address = setup::discover_address(
        setup::local_address,
        config.discovery_attempts,
        config.discovery_backoff(),
    )
    .await?;
    panel.lock().await.show(&address.to_string()).await;

    let oracle = Arc::new(OracleClient::new(config.oracle.clone())?);
    let orchestrator = Arc::new(Orchestrator::new(panel, oracle));
    let server = SessionServer::bind(orchestrator, config.listen_port).await?;

    tokio::select! {
        result = server.run() => result?,
        _ = tokio::signal::ctrl_c() => info!("shutdown requested"),
    }

    Ok(())
}
