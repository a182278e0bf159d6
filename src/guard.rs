use crate::constants::{method, sec_fetch_site};
use crate::context::RequestContext;
use crate::options::{ConfigError, GuardOptions, RejectionMode};
use crate::origin::{host_matches, normalize_origin};
use crate::result::{
    Decision, Enforcement, ForbiddenResponse, InvalidCrossOriginRequest, Rule, Verdict,
};
use crate::trusted_origins::TrustedOrigins;

type RuleCheck = fn(&OriginGuard, &RequestContext<'_>) -> Option<Verdict>;

/// Checks in precedence order. The first one returning a verdict wins.
const RULES: [RuleCheck; 6] = [
    OriginGuard::check_safe_method,
    OriginGuard::check_trusted_origin,
    OriginGuard::check_same_origin_fetch,
    OriginGuard::check_cross_origin_fetch,
    OriginGuard::check_missing_origin,
    OriginGuard::check_host,
];

/// Cross-origin request guard driven by `Sec-Fetch-Site`, `Origin` and `Host`.
///
/// Built once from [`GuardOptions`] and immutable afterwards; share it behind an
/// `Arc` across request handlers. Requests flagged as exempt by the host
/// framework must not be passed to the guard at all.
#[derive(Debug, Clone)]
pub struct OriginGuard {
    trusted_origins: TrustedOrigins,
    rejection_mode: RejectionMode,
}

impl OriginGuard {
    pub fn new(options: GuardOptions) -> Result<Self, ConfigError> {
        let GuardOptions {
            trusted_origins,
            rejection_mode,
        } = options;
        let trusted_origins = TrustedOrigins::try_from_iter(&trusted_origins)?;

        tracing::debug!(
            trusted_origins = trusted_origins.len(),
            rejection_mode = %rejection_mode,
            "origin guard configured"
        );

        Ok(Self {
            trusted_origins,
            rejection_mode,
        })
    }

    pub fn trusted_origins(&self) -> &TrustedOrigins {
        &self.trusted_origins
    }

    pub fn rejection_mode(&self) -> RejectionMode {
        self.rejection_mode
    }

    pub fn decide(&self, request: &RequestContext<'_>) -> Decision {
        self.evaluate(request).decision
    }

    /// Run the rule chain and report which rule settled the request.
    pub fn evaluate(&self, request: &RequestContext<'_>) -> Verdict {
        let verdict = RULES
            .iter()
            .find_map(|check| check(self, request))
            .unwrap_or(Verdict::reject(Rule::HostMismatch));

        match verdict.decision {
            Decision::Allow => tracing::trace!(
                rule = %verdict.rule,
                method = request.method,
                "request allowed"
            ),
            Decision::Reject => {
                let origin = request.origin.map(normalize_origin);
                tracing::debug!(
                    rule = %verdict.rule,
                    method = request.method,
                    origin = origin.as_deref(),
                    sec_fetch_site = request.sec_fetch_site,
                    host = request.host,
                    "cross-origin request rejected"
                );
            }
        }

        verdict
    }

    /// Decide and translate the decision according to the rejection mode.
    pub fn enforce(
        &self,
        request: &RequestContext<'_>,
    ) -> Result<Enforcement, InvalidCrossOriginRequest> {
        self.enforce_decision(self.decide(request))
    }

    /// Translate an already computed decision according to the rejection mode.
    pub fn enforce_decision(
        &self,
        decision: Decision,
    ) -> Result<Enforcement, InvalidCrossOriginRequest> {
        match (decision, self.rejection_mode) {
            (Decision::Allow, _) => Ok(Enforcement::Proceed),
            (Decision::Reject, RejectionMode::RespondForbidden) => {
                Ok(Enforcement::Respond(ForbiddenResponse::default()))
            }
            (Decision::Reject, RejectionMode::RaiseError) => Err(InvalidCrossOriginRequest),
        }
    }

    fn check_safe_method(&self, request: &RequestContext<'_>) -> Option<Verdict> {
        method::SAFE
            .iter()
            .any(|safe| *safe == request.method)
            .then(|| Verdict::allow(Rule::SafeMethod))
    }

    fn check_trusted_origin(&self, request: &RequestContext<'_>) -> Option<Verdict> {
        let origin = request.origin?;
        self.trusted_origins
            .contains_header_origin(origin)
            .then(|| Verdict::allow(Rule::TrustedOrigin))
    }

    fn check_same_origin_fetch(&self, request: &RequestContext<'_>) -> Option<Verdict> {
        matches!(
            request.sec_fetch_site?,
            sec_fetch_site::SAME_ORIGIN | sec_fetch_site::NONE
        )
        .then(|| Verdict::allow(Rule::SameOriginFetch))
    }

    // Reached only when the value is neither `same-origin` nor `none`.
    fn check_cross_origin_fetch(&self, request: &RequestContext<'_>) -> Option<Verdict> {
        request
            .sec_fetch_site
            .map(|_| Verdict::reject(Rule::CrossOriginFetch))
    }

    fn check_missing_origin(&self, request: &RequestContext<'_>) -> Option<Verdict> {
        request
            .origin
            .is_none()
            .then(|| Verdict::allow(Rule::MissingOrigin))
    }

    fn check_host(&self, request: &RequestContext<'_>) -> Option<Verdict> {
        let origin = request.origin?;
        if host_matches(origin, request.host) {
            Some(Verdict::allow(Rule::HostMatch))
        } else {
            Some(Verdict::reject(Rule::HostMismatch))
        }
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;
