use std::env;
use std::sync::Arc;

use bunner_csrf_rs::{ConfigError, GuardOptions, OriginGuard, RejectionMode};

pub type SharedGuard = Arc<OriginGuard>;

#[derive(Clone)]
pub struct AppState {
    pub guard: SharedGuard,
    pub greeting: &'static str,
}

/// Reads `GUARD_REJECTION_MODE` (`raise_error` or `respond_forbidden`).
pub fn build_state() -> Result<AppState, ConfigError> {
    let rejection_mode = match env::var("GUARD_REJECTION_MODE") {
        Ok(value) => value.parse()?,
        Err(_) => RejectionMode::default(),
    };

    let options = GuardOptions::new()
        .trusted_origin("https://sso.example.com")
        .rejection_mode(rejection_mode);

    let guard = Arc::new(OriginGuard::new(options)?);

    Ok(AppState {
        guard,
        greeting: "Welcome to the Axum origin guard example!",
    })
}

pub mod middleware;
