use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use quickhire::application::services::{
    GigLifecycleService, GigRequestParser, StructuredCompleter,
};
use quickhire::infrastructure::llm::create_llm_client;
use quickhire::infrastructure::observability::{TracingConfig, init_tracing};
use quickhire::infrastructure::payments::MockPaymentProcessor;
use quickhire::infrastructure::persistence::create_stores;
use quickhire::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load configuration")?;

    init_tracing(&TracingConfig::new(
        environment.as_str(),
        &settings.logging.level,
        settings.logging.enable_json,
    ));

    let stores = create_stores(&settings.storage, &settings.database)
        .await
        .context("Failed to initialise storage")?;

    let lifecycle_service = Arc::new(GigLifecycleService::new(
        Arc::clone(&stores.gigs),
        Arc::clone(&stores.assignments),
        Arc::clone(&stores.ratings),
        Arc::new(MockPaymentProcessor),
    ));

    let llm_client = create_llm_client(&settings.llm).context("Failed to configure LLM client")?;
    let request_parser = Arc::new(GigRequestParser::new(StructuredCompleter::new(llm_client)));

    let router = create_router(AppState {
        lifecycle_service,
        request_parser,
    });

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = %environment, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
