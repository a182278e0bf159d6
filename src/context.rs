use crate::constants::header;

/// Per-request view consumed by [`OriginGuard`](crate::OriginGuard).
///
/// `origin` and `sec_fetch_site` hold the first value of their header when it
/// is repeated. `host` is the effective target host, including any
/// non-default port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub sec_fetch_site: Option<&'a str>,
    pub host: &'a str,
}

impl<'a> RequestContext<'a> {
    /// Build a view from raw `(name, value)` header pairs.
    ///
    /// Header names match case-insensitively and the first occurrence wins.
    /// The pairs are walked once.
    pub fn from_headers<I>(method: &'a str, host: &'a str, headers: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut origin = None;
        let mut sec_fetch_site = None;

        for (name, value) in headers {
            if origin.is_none() && name.eq_ignore_ascii_case(header::ORIGIN) {
                origin = Some(value);
            } else if sec_fetch_site.is_none() && name.eq_ignore_ascii_case(header::SEC_FETCH_SITE)
            {
                sec_fetch_site = Some(value);
            }

            if origin.is_some() && sec_fetch_site.is_some() {
                break;
            }
        }

        Self {
            method,
            origin,
            sec_fetch_site,
            host,
        }
    }
}

/// First value of `name` among `headers`, compared case-insensitively.
pub fn header_value<'a, I>(headers: I, name: &str) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    headers
        .into_iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .map(|(_, value)| value)
}

/// Marker a host framework attaches to a request to exempt it from the guard.
///
/// The guard never reads it; middleware checks for it before evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipOriginCheck;

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
