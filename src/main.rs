use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use study_planner::{config::Settings, handlers, llm::GroqClient, state::AppState};

#[tokio::main]
async fn main() {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "study_planner=debug,tower_http=debug".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  // Fail fast on missing credentials or a broken config file
  let settings = match Settings::load() {
    Ok(settings) => settings,
    Err(e) => {
      tracing::error!("{}", e);
      std::process::exit(1);
    }
  };

  let client = GroqClient::new(&settings.llm).expect("Failed to build chat-completion client");
  tracing::info!(
    "Using {} (plan model: {}, quiz model: {}, draft pass: {})",
    settings.llm.base_url,
    settings.llm.plan_model,
    settings.llm.quiz_model,
    settings.llm.draft_pass
  );

  let app = handlers::router(AppState::new(Arc::new(client), settings.llm.clone()));

  let bind_addr = settings.server.bind_addr();
  let listener = tokio::net::TcpListener::bind(&bind_addr)
    .await
    .unwrap_or_else(|_| panic!("Failed to bind to {}", bind_addr));

  tracing::info!("Server running on http://localhost:{}", settings.server.port);

  axum::serve(listener, app)
    .await
    .expect("Server failed to start");
}
