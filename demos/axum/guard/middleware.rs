use axum::{
    body::Body,
    extract::{Request, State},
    http::{HeaderValue, StatusCode, header::CONTENT_TYPE},
    middleware::Next,
    response::{IntoResponse, Response},
};
use bunner_csrf_rs::{
    Enforcement, ForbiddenResponse, InvalidCrossOriginRequest, RequestContext, SkipOriginCheck,
    constants::header,
};

use super::{AppState, SharedGuard};

const EXEMPT_PREFIX: &str = "/webhooks/";

/// Flags webhook deliveries so the guard lets them through.
pub async fn mark_exempt_routes(mut request: Request, next: Next) -> Response {
    if request.uri().path().starts_with(EXEMPT_PREFIX) {
        request.extensions_mut().insert(SkipOriginCheck);
    }
    next.run(request).await
}

pub async fn origin_guard_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, GuardError> {
    if request.extensions().get::<SkipOriginCheck>().is_some() {
        return Ok(next.run(request).await);
    }

    let guard: SharedGuard = state.guard.clone();
    let owned_ctx = OwnedRequestContext::from_request(&request);

    match guard.enforce(&owned_ctx.as_request_context())? {
        Enforcement::Proceed => Ok(next.run(request).await),
        Enforcement::Respond(forbidden) => Ok(forbidden_response(forbidden)),
    }
}

/// Error surfaced to axum when the guard runs in `raise_error` mode.
#[derive(Debug)]
pub struct GuardError(InvalidCrossOriginRequest);

impl From<InvalidCrossOriginRequest> for GuardError {
    fn from(error: InvalidCrossOriginRequest) -> Self {
        Self(error)
    }
}

impl IntoResponse for GuardError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status()).unwrap_or(StatusCode::FORBIDDEN);
        tracing::warn!(error = %self.0, "request blocked by origin guard");
        (status, self.0.to_string()).into_response()
    }
}

fn forbidden_response(forbidden: ForbiddenResponse) -> Response {
    Response::builder()
        .status(forbidden.status)
        .header(CONTENT_TYPE, forbidden.content_type)
        .body(Body::from(forbidden.body))
        .expect("static forbidden response parts are valid")
}

struct OwnedRequestContext {
    method: String,
    host: String,
    headers: Vec<(String, String)>,
}

impl OwnedRequestContext {
    fn from_request(request: &Request) -> Self {
        let headers = request.headers();

        Self {
            method: request.method().as_str().to_string(),
            host: headers
                .get(header::HOST)
                .map(lossy_text)
                .or_else(|| request.uri().authority().map(|a| a.as_str().to_string()))
                .unwrap_or_default(),
            headers: headers
                .iter()
                .map(|(name, value)| (name.as_str().to_string(), lossy_text(value)))
                .collect(),
        }
    }

    fn as_request_context(&self) -> RequestContext<'_> {
        RequestContext::from_headers(
            &self.method,
            &self.host,
            self.headers
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str())),
        )
    }
}

// Undecodable bytes become U+FFFD so the header stays present and fails to match.
fn lossy_text(value: &HeaderValue) -> String {
    String::from_utf8_lossy(value.as_bytes()).into_owned()
}
