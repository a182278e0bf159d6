use bunner_csrf_rs::constants::{header, method};
use bunner_csrf_rs::{
    Decision, Enforcement, GuardOptions, InvalidCrossOriginRequest, OriginGuard, RejectionMode,
    RequestContext, Verdict,
};

#[derive(Default)]
pub struct GuardBuilder {
    trusted_origins: Vec<String>,
    rejection_mode: Option<RejectionMode>,
}

impl GuardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trusted_origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.trusted_origins
            .extend(origins.into_iter().map(Into::into));
        self
    }

    pub fn rejection_mode(mut self, mode: RejectionMode) -> Self {
        self.rejection_mode = Some(mode);
        self
    }

    pub fn build(self) -> OriginGuard {
        let GuardOptions {
            rejection_mode: default_mode,
            ..
        } = GuardOptions::default();

        OriginGuard::new(
            GuardOptions::new()
                .trusted_origins(self.trusted_origins)
                .rejection_mode(self.rejection_mode.unwrap_or(default_mode)),
        )
        .expect("valid guard configuration")
    }
}

pub struct RequestBuilder {
    method: String,
    host: String,
    headers: Vec<(String, String)>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::POST.into(),
            host: "app.example.com".into(),
            headers: Vec::new(),
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn origin(self, origin: impl Into<String>) -> Self {
        self.header(header::ORIGIN, origin)
    }

    pub fn sec_fetch_site(self, value: impl Into<String>) -> Self {
        self.header(header::SEC_FETCH_SITE, value)
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    fn with_context<T>(&self, f: impl FnOnce(&RequestContext<'_>) -> T) -> T {
        let ctx = RequestContext::from_headers(
            &self.method,
            &self.host,
            self.headers
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str())),
        );
        f(&ctx)
    }

    pub fn decide(self, guard: &OriginGuard) -> Decision {
        self.with_context(|ctx| guard.decide(ctx))
    }

    pub fn evaluate(self, guard: &OriginGuard) -> Verdict {
        self.with_context(|ctx| guard.evaluate(ctx))
    }

    pub fn enforce(self, guard: &OriginGuard) -> Result<Enforcement, InvalidCrossOriginRequest> {
        self.with_context(|ctx| guard.enforce(ctx))
    }
}

pub fn guard() -> GuardBuilder {
    GuardBuilder::new()
}

pub fn request() -> RequestBuilder {
    RequestBuilder::new()
}
