mod guard;
mod routes;

use std::net::SocketAddr;

use axum::{
    Router,
    routing::{get, post},
};
use guard::middleware::{mark_exempt_routes, origin_guard_middleware};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bunner_csrf_rs=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app_state = guard::build_state().expect("valid origin guard configuration");

    let app = Router::new()
        .route("/greet", get(routes::greet))
        .route("/transfer", post(routes::transfer))
        .route("/webhooks/payments", post(routes::payment_webhook))
        .layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            origin_guard_middleware,
        ))
        .layer(axum::middleware::from_fn(mark_exempt_routes))
        .with_state(app_state);

    let addr: SocketAddr = "127.0.0.1:5001".parse().unwrap();
    tracing::info!(%addr, "axum origin guard example listening");

    axum::serve(tokio::net::TcpListener::bind(addr).await.unwrap(), app)
        .await
        .unwrap();
}
