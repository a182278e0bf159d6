use crate::constants::rejection;
use std::fmt;
use thiserror::Error;

/// Outcome of evaluating a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Allow,
    Reject,
}

impl Decision {
    pub fn is_allow(self) -> bool {
        matches!(self, Decision::Allow)
    }

    pub fn is_reject(self) -> bool {
        matches!(self, Decision::Reject)
    }
}

/// The check that settled a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// `GET`, `HEAD` or `OPTIONS`.
    SafeMethod,
    /// `Origin` is in the trusted set.
    TrustedOrigin,
    /// `Sec-Fetch-Site` is `same-origin` or `none`.
    SameOriginFetch,
    /// `Sec-Fetch-Site` carries any other value.
    CrossOriginFetch,
    /// Neither `Origin` nor `Sec-Fetch-Site` was sent.
    MissingOrigin,
    /// `Origin` agrees with the request host.
    HostMatch,
    /// `Origin` disagrees with the request host.
    HostMismatch,
}

impl Rule {
    pub fn as_str(self) -> &'static str {
        match self {
            Rule::SafeMethod => "safe_method",
            Rule::TrustedOrigin => "trusted_origin",
            Rule::SameOriginFetch => "same_origin_fetch",
            Rule::CrossOriginFetch => "cross_origin_fetch",
            Rule::MissingOrigin => "missing_origin",
            Rule::HostMatch => "host_match",
            Rule::HostMismatch => "host_mismatch",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decision together with the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Verdict {
    pub rule: Rule,
    pub decision: Decision,
}

impl Verdict {
    pub(crate) fn allow(rule: Rule) -> Self {
        Self {
            rule,
            decision: Decision::Allow,
        }
    }

    pub(crate) fn reject(rule: Rule) -> Self {
        Self {
            rule,
            decision: Decision::Reject,
        }
    }
}

/// Fixed response emitted for a rejected request in
/// [`RejectionMode::RespondForbidden`](crate::RejectionMode::RespondForbidden).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForbiddenResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: &'static str,
}

impl Default for ForbiddenResponse {
    fn default() -> Self {
        Self {
            status: rejection::STATUS,
            content_type: rejection::CONTENT_TYPE,
            body: rejection::MESSAGE,
        }
    }
}

/// What the host framework must do with the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Enforcement {
    /// Continue down the pipeline untouched.
    Proceed,
    /// Write this response and stop processing.
    Respond(ForbiddenResponse),
}

/// Raised for a rejected request in
/// [`RejectionMode::RaiseError`](crate::RejectionMode::RaiseError).
#[derive(Debug, Error, Clone, Copy, Default, PartialEq, Eq)]
#[error("cross-origin request detected")]
pub struct InvalidCrossOriginRequest;

impl InvalidCrossOriginRequest {
    pub fn status(&self) -> u16 {
        rejection::STATUS
    }

    pub fn message(&self) -> &'static str {
        rejection::MESSAGE
    }
}
