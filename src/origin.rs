use crate::constants::scheme;
use crate::uri::UriParts;
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// Origin values longer than this are treated as malformed without parsing.
pub(crate) const MAX_ORIGIN_LENGTH: usize = 4_096;

/// Reasons an origin string cannot be read as `(scheme, host, port)`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OriginParseError {
    #[error("origin has no scheme")]
    MissingScheme,
    #[error("origin has no host")]
    MissingHost,
    #[error("origin host is not a valid authority host")]
    InvalidHost,
    #[error("origin port '{0}' is not a valid port number")]
    InvalidPort(String),
    #[error("origin length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
}

/// A web origin: scheme, host and optional port.
///
/// Two origins are equal when their canonical forms are equal, so an explicit
/// default port compares equal to an omitted one. Scheme and host are kept as
/// written; no case folding is applied.
#[derive(Debug, Clone)]
pub struct Origin {
    scheme: String,
    host: String,
    port: Option<u16>,
}

impl Origin {
    pub fn parse(value: &str) -> Result<Self, OriginParseError> {
        let parts = parse_parts(value)?;
        Ok(Self {
            scheme: parts.scheme.to_owned(),
            host: parts.host.to_owned(),
            port: parts.port,
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Port as written in the source string, default ports included.
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Port that must appear in the canonical form, `None` when the scheme
    /// default applies.
    pub fn explicit_port(&self) -> Option<u16> {
        explicit_port(&self.scheme, self.port)
    }

    /// `host` or `host:port`, in the shape a `Host` header would carry.
    pub fn host_with_port(&self) -> String {
        match self.explicit_port() {
            Some(port) => format!("{}:{}", self.host, port),
            None => self.host.clone(),
        }
    }

    pub fn to_canonical(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.host)?;
        if let Some(port) = self.explicit_port() {
            write!(f, ":{port}")?;
        }
        Ok(())
    }
}

impl PartialEq for Origin {
    fn eq(&self, other: &Self) -> bool {
        self.scheme == other.scheme
            && self.host == other.host
            && self.explicit_port() == other.explicit_port()
    }
}

impl Eq for Origin {}

impl Hash for Origin {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.scheme.hash(state);
        self.host.hash(state);
        self.explicit_port().hash(state);
    }
}

/// Default port of the `http` and `https` schemes. Matching is exact.
pub fn default_port(scheme_name: &str) -> Option<u16> {
    match scheme_name {
        scheme::HTTP => Some(80),
        scheme::HTTPS => Some(443),
        _ => None,
    }
}

fn explicit_port(scheme_name: &str, port: Option<u16>) -> Option<u16> {
    port.filter(|port| default_port(scheme_name) != Some(*port))
}

/// Canonical `scheme://host[:port]` form of a request `Origin` header.
///
/// Values that cannot be read as an origin come back unchanged so that lookups
/// against the trusted set fail instead of erroring.
pub fn normalize_origin(value: &str) -> String {
    match parse_parts(value) {
        Ok(parts) => parts.canonical(),
        Err(_) => value.to_owned(),
    }
}

/// Whether the origin's host, plus any non-default port, equals `host`
/// byte for byte.
///
/// Path, query and fragment of the origin are ignored. Malformed origins never
/// match.
pub fn host_matches(origin: &str, host: &str) -> bool {
    let Ok(parts) = parse_parts(origin) else {
        return false;
    };

    match explicit_port(parts.scheme, parts.port) {
        None => parts.host == host,
        Some(port) => host
            .strip_prefix(parts.host)
            .and_then(|rest| rest.strip_prefix(':'))
            .is_some_and(|rest| rest == port.to_string()),
    }
}

pub(crate) struct OriginParts<'a> {
    pub(crate) scheme: &'a str,
    pub(crate) host: &'a str,
    pub(crate) port: Option<u16>,
}

impl OriginParts<'_> {
    pub(crate) fn canonical(&self) -> String {
        match explicit_port(self.scheme, self.port) {
            Some(port) => format!("{}://{}:{}", self.scheme, self.host, port),
            None => format!("{}://{}", self.scheme, self.host),
        }
    }
}

pub(crate) fn parse_parts(value: &str) -> Result<OriginParts<'_>, OriginParseError> {
    if value.len() > MAX_ORIGIN_LENGTH {
        return Err(OriginParseError::TooLong {
            length: value.len(),
            max: MAX_ORIGIN_LENGTH,
        });
    }

    let uri = UriParts::split(value);
    let scheme = uri.scheme.ok_or(OriginParseError::MissingScheme)?;
    let (host, port) = uri.host_and_port()?.ok_or(OriginParseError::MissingHost)?;
    if host.is_empty() {
        return Err(OriginParseError::MissingHost);
    }

    Ok(OriginParts { scheme, host, port })
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
