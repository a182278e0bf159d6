use actix_web::{HttpResponse, Responder, http::header::CONTENT_TYPE, web};

use crate::guard::AppState;

pub async fn greet(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok()
        .insert_header((CONTENT_TYPE, "text/html; charset=utf-8"))
        .body(format!(
            "<h1>{}</h1><p>Actix Web is now guarded by bunner-csrf-rs.</p>",
            state.greeting
        ))
}

pub async fn transfer() -> impl Responder {
    HttpResponse::Ok().body("transfer accepted")
}

pub async fn payment_webhook() -> impl Responder {
    HttpResponse::Ok().body("webhook received")
}
