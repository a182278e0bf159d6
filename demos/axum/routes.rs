use axum::{
    extract::State,
    response::{Html, IntoResponse},
};

use crate::guard::AppState;

pub async fn greet(State(state): State<AppState>) -> impl IntoResponse {
    Html(format!(
        "<h1>{}</h1><p>Submit a form from another site to see the guard in action.</p>",
        state.greeting
    ))
}

pub async fn transfer() -> impl IntoResponse {
    "transfer accepted"
}

pub async fn payment_webhook() -> impl IntoResponse {
    "webhook received"
}
