use clap::Parser;
use formwizard::adapters::metrics_handler::MetricsCollector;
use formwizard::cli::Cli;
use formwizard::config::Settings;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("formwizard=info,tower_http=info")),
        )
        .init();

    // Load configuration (CLI > env vars > config file)
    let cli = Cli::parse();
    let settings = Settings::new_with_cli(&cli)?;
    let host = settings.server.host.clone();
    let port = settings.server.port;

    info!(
        "Starting formwizard on {}:{} serving the {} form",
        host, port, settings.form.variant
    );

    let metrics = Arc::new(MetricsCollector::new()?);

    // Create application using the library function
    let app = formwizard::create_app(Arc::new(settings), metrics);

    // Start server
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
