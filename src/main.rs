use axum::{
    routing::{get, post},
    Router,
};
use quiz_backend::{
    config::{get_config, init_config},
    middleware::cors::{cors_middleware, new_cors_state},
    routes, AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let app_state = AppState::new();

    let app = Router::new()
        .route("/health", get(routes::health::health))
        .route("/api/quiz", get(routes::quiz::get_quiz))
        .route("/api/grade", post(routes::quiz::grade))
        .with_state(app_state)
        .layer(axum::middleware::from_fn_with_state(
            new_cors_state(&config.allowed_origin),
            cors_middleware,
        ))
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
