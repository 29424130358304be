use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use bookstore::modules::books::core::service_type::BOOK_SERVICE_TYPE;
use bookstore::shell::config::AppConfig;
use bookstore::shell::http::router;
use bookstore::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    // In-memory store for now
    let state = AppState::in_memory(config.default_page_size);
    let app = router(state).layer(TraceLayer::new_for_http());

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        service = BOOK_SERVICE_TYPE.id,
        version = BOOK_SERVICE_TYPE.version,
        "{} listening on http://{}",
        BOOK_SERVICE_TYPE.title,
        addr
    );
    axum::serve(listener, app).await?;
    Ok(())
}
