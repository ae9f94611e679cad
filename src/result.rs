use crate::headers::Headers;
use thiserror::Error;

/// Overall decision returned by the policy engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    /// Not a CORS request (no `Origin`), or an OPTIONS request the policy ignores.
    NotApplicable,
    /// Forward to the wrapped handler, then add `headers` to its response.
    SimpleAccepted { headers: Headers },
    /// Forward to the wrapped handler without permission headers; `headers`
    /// holds at most a `Vary` entry.
    SimpleRejected { headers: Headers },
    /// Answer the preflight directly with `status` and an empty body.
    PreflightAccepted { headers: Headers, status: u16 },
    PreflightRejected(PreflightRejection),
}

impl CorsDecision {
    /// Whether the wrapped handler must not be invoked.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            CorsDecision::PreflightAccepted { .. } | CorsDecision::PreflightRejected(_)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightRejection {
    pub headers: Headers,
    pub reason: PreflightRejectionReason,
}

impl PreflightRejection {
    pub fn status(&self) -> u16 {
        self.reason.status()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PreflightRejectionReason {
    #[error("origin not allowed")]
    OriginNotAllowed,
    #[error("Access-Control-Request-Method header missing")]
    MissingAccessControlRequestMethod,
    #[error("method '{requested_method}' not allowed")]
    MethodNotAllowed { requested_method: String },
    #[error("headers '{requested_headers}' not allowed")]
    HeadersNotAllowed { requested_headers: String },
}

impl PreflightRejectionReason {
    /// `403` for a foreign origin, `400` for a malformed or disallowed request.
    pub fn status(&self) -> u16 {
        match self {
            PreflightRejectionReason::OriginNotAllowed => 403,
            PreflightRejectionReason::MissingAccessControlRequestMethod
            | PreflightRejectionReason::MethodNotAllowed { .. }
            | PreflightRejectionReason::HeadersNotAllowed { .. } => 400,
        }
    }
}
