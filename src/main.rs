use tokio::signal;

use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use portfolio_contact_api::app::{cors_layer, create_app};
use portfolio_contact_api::config::AppConfig;
use portfolio_contact_api::state::SharedAppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  dotenv().ok();

  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let config = AppConfig::from_env()?;

  let app_state = SharedAppState::from_config(&config)?;
  let app = create_app(app_state).layer(cors_layer(&config.server.cors_allowed_origins));

  let address = config.server.address();
  let listener = tokio::net::TcpListener::bind(&address).await?;

  tracing::info!("Server running on http://{}", address);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}

async fn shutdown_signal() {
  let ctrl_c = async {
    signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
  };

  #[cfg(unix)]
  let terminate = async {
    signal::unix::signal(signal::unix::SignalKind::terminate())
      .expect("Failed to install signal handler")
      .recv()
      .await;
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
      _ = ctrl_c => {},
      _ = terminate => {},
  }

  tracing::info!("Received termination signal, shutting down gracefully...");
}
