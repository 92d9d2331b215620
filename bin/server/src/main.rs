use muse_ai::GeminiClient;
use muse_conversation::MemoryConversationStore;
use muse_server::config::{DEV_SECRET_KEY, ServerConfig};
use muse_server::{AppState, router};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = ServerConfig::from_env().expect("failed to load configuration");
    tracing::info!("Loaded configuration");

    if config.secret_key == DEV_SECRET_KEY {
        tracing::warn!("SECRET_KEY is not set; using the built-in development signing secret");
    }
    if config.gemini.api_key.is_none() {
        tracing::warn!(
            "GEMINI__API_KEY is not set; generate requests will fail at the remote call"
        );
    }

    let cookie_key = config.cookie_key().expect("invalid secret key");

    let generator = GeminiClient::new(
        config.gemini.base_url.clone(),
        config.gemini.model.clone(),
        config.gemini.api_key.clone(),
        Duration::from_secs(config.gemini.timeout_seconds),
    )
    .expect("failed to build Gemini client");

    let state = AppState {
        store: Arc::new(MemoryConversationStore::new()),
        generator: Arc::new(generator),
        cookie_key,
        session: config.session.clone(),
    };

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .expect("failed to bind to address");

    tracing::info!("listening on http://{}", config.listen_addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("server error");
}
