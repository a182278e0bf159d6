mod guard;
mod routes;

use actix_web::{App, HttpServer, web};
use guard::middleware::BunnerOriginGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bunner_csrf_rs=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let app_state = guard::build_state().expect("valid origin guard configuration");

    HttpServer::new(move || {
        let state = app_state.clone();
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(BunnerOriginGuard::new(state.guard.clone()).exempt_path_prefix("/webhooks/"))
            .route("/greet", web::get().to(routes::greet))
            .route("/transfer", web::post().to(routes::transfer))
            .route("/webhooks/payments", web::post().to(routes::payment_webhook))
    })
    .bind(("127.0.0.1", 5002))?
    .run()
    .await
}
