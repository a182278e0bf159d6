use std::sync::Arc;

use bunner_csrf_rs::{ConfigError, GuardOptions, OriginGuard, RejectionMode};

pub type SharedGuard = Arc<OriginGuard>;

#[derive(Clone)]
pub struct AppState {
    pub guard: SharedGuard,
    pub greeting: &'static str,
}

pub fn build_state() -> Result<AppState, ConfigError> {
    let options = GuardOptions::new()
        .trusted_origins(["https://sso.example.com", "https://accounts.example.com:8443"])
        .rejection_mode(RejectionMode::RaiseError);

    let guard = Arc::new(OriginGuard::new(options)?);

    Ok(AppState {
        guard,
        greeting: "Welcome to the Actix origin guard example!",
    })
}

pub mod middleware;
