use std::fmt;
use std::future::{Ready, ready};
use std::pin::Pin;
use std::task::{Context, Poll};

use actix_web::body::{EitherBody, MessageBody};
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::StatusCode;
use actix_web::http::header::{CONTENT_TYPE, HeaderValue};
use actix_web::{Error, HttpMessage, HttpRequest, HttpResponse, ResponseError};
use bunner_csrf_rs::{
    Enforcement, ForbiddenResponse, InvalidCrossOriginRequest, RequestContext, SkipOriginCheck,
};

use super::SharedGuard;

type LocalBoxFuture<'a, T> = Pin<Box<dyn std::future::Future<Output = T> + 'a>>;

pub struct BunnerOriginGuard {
    guard: SharedGuard,
    exempt_prefixes: Vec<&'static str>,
}

impl BunnerOriginGuard {
    pub fn new(guard: SharedGuard) -> Self {
        Self {
            guard,
            exempt_prefixes: Vec::new(),
        }
    }

    pub fn exempt_path_prefix(mut self, prefix: &'static str) -> Self {
        self.exempt_prefixes.push(prefix);
        self
    }
}

impl<S, B> Transform<S, ServiceRequest> for BunnerOriginGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = BunnerOriginGuardMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BunnerOriginGuardMiddleware {
            service,
            guard: self.guard.clone(),
            exempt_prefixes: self.exempt_prefixes.clone(),
        }))
    }
}

pub struct BunnerOriginGuardMiddleware<S> {
    service: S,
    guard: SharedGuard,
    exempt_prefixes: Vec<&'static str>,
}

impl<S, B> Service<ServiceRequest> for BunnerOriginGuardMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let path = req.path();
        if self
            .exempt_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix))
        {
            req.extensions_mut().insert(SkipOriginCheck);
        }

        if req.extensions().get::<SkipOriginCheck>().is_some() {
            let fut = self.service.call(req);
            return Box::pin(async move { Ok(fut.await?.map_into_left_body()) });
        }

        let owned_ctx = OwnedRequestContext::from_request(req.request());

        match self.guard.enforce(&owned_ctx.as_request_context()) {
            Ok(Enforcement::Proceed) => {
                let fut = self.service.call(req);
                Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
            }
            Ok(Enforcement::Respond(forbidden)) => {
                Box::pin(async move { Ok(forbidden_response(req, forbidden)) })
            }
            Err(err) => {
                let error: Error = GuardError(err).into();
                Box::pin(async move { Err(error) })
            }
        }
    }
}

/// Lets actix's error handling turn a raised rejection into a response.
#[derive(Debug)]
pub struct GuardError(InvalidCrossOriginRequest);

impl fmt::Display for GuardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl ResponseError for GuardError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status()).unwrap_or(StatusCode::FORBIDDEN)
    }

    fn error_response(&self) -> HttpResponse {
        tracing::warn!(error = %self.0, "request blocked by origin guard");
        HttpResponse::build(self.status_code())
            .insert_header((CONTENT_TYPE, "text/plain"))
            .body(self.0.message())
    }
}

fn forbidden_response<B>(
    req: ServiceRequest,
    forbidden: ForbiddenResponse,
) -> ServiceResponse<EitherBody<B>> {
    let status = StatusCode::from_u16(forbidden.status).unwrap_or(StatusCode::FORBIDDEN);
    let response = HttpResponse::build(status)
        .insert_header((CONTENT_TYPE, forbidden.content_type))
        .body(forbidden.body)
        .map_into_right_body();
    req.into_response(response)
}

struct OwnedRequestContext {
    method: String,
    host: String,
    headers: Vec<(String, String)>,
}

impl OwnedRequestContext {
    fn from_request(request: &HttpRequest) -> Self {
        Self {
            method: request.method().as_str().to_string(),
            host: request.connection_info().host().to_string(),
            headers: request
                .headers()
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
