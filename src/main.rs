use clap::Parser;
use text_summarizer::api;
use text_summarizer::config::{Config, init_logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_logging(config.log_format);
    config.validate()?;

    tracing::info!(
        "Default language: {}, minimum words: {}, reduction ratio: {}",
        config.language,
        config.min_words,
        config.reduction_ratio
    );
    tracing::info!("Allowed CORS origins: {:?}", config.cors_origins);

    let app = api::app(&config)?;

    tracing::info!("HTTP server listening on {}", config.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
