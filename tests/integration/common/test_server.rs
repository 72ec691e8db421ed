use formwizard::adapters::metrics_handler::MetricsCollector;
use formwizard::config::Settings;
use std::net::SocketAddr;
use std::sync::Arc;

pub struct TestServer {
    pub addr: SocketAddr,
    pub base_url: String,
}

impl TestServer {
    pub async fn new() -> Self {
        Self::with_settings(Settings::default()).await
    }

    pub async fn with_settings(mut settings: Settings) -> Self {
        // Random port
        settings.server.port = 0;

        let metrics = Arc::new(MetricsCollector::new().unwrap());
        let app = formwizard::create_app(Arc::new(settings), metrics);

        // Start server on random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to be ready
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        TestServer { addr, base_url }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
