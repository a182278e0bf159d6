pub mod constants;
mod context;
mod guard;
mod options;
mod origin;
mod result;
mod trusted_origins;
mod uri;

pub use context::{RequestContext, SkipOriginCheck, header_value};
pub use guard::OriginGuard;
pub use options::{ConfigError, GuardOptions, RejectionMode};
pub use origin::{Origin, OriginParseError, default_port, host_matches, normalize_origin};
pub use result::{
    Decision, Enforcement, ForbiddenResponse, InvalidCrossOriginRequest, Rule, Verdict,
};
pub use trusted_origins::{TrustedOrigins, validate_trusted_origin};
