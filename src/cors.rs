use crate::constants::{MAX_AGE_CEILING, method};
use crate::context::RequestContext;
use crate::header_builder::HeaderBuilder;
use crate::headers::HeaderCollection;
use crate::options::{CorsOptions, ValidationError};
use crate::origin::OriginDecision;
use crate::result::{CorsDecision, PreflightRejection, PreflightRejectionReason};
use tracing::{debug, trace, warn};

/// Core CORS policy engine that evaluates requests using [`CorsOptions`].
///
/// Immutable after construction; share one instance behind an `Arc`.
pub struct Cors {
    options: CorsOptions,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        if let Some(max_age) = options.max_age
            && max_age > MAX_AGE_CEILING
        {
            warn!(
                max_age,
                ceiling = MAX_AGE_CEILING,
                "configured max-age exceeds ceiling; preflight responses will use the ceiling"
            );
        }
        Ok(Self { options })
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        let is_options = request.method.eq_ignore_ascii_case(method::OPTIONS);
        if is_options && self.options.ignore_options {
            return CorsDecision::NotApplicable;
        }

        let Some(origin) = request.origin else {
            return CorsDecision::NotApplicable;
        };

        let decision = self.options.origin.resolve(Some(origin));
        if is_options {
            self.process_preflight(request, origin, decision)
        } else {
            self.process_simple(origin, decision)
        }
    }

    fn process_preflight(
        &self,
        request: &RequestContext<'_>,
        origin: &str,
        decision: OriginDecision,
    ) -> CorsDecision {
        let builder = HeaderBuilder::new(&self.options);
        let mut headers = HeaderCollection::new();

        if matches!(decision, OriginDecision::Disallow | OriginDecision::Skip) {
            builder.build_origin_headers(&mut headers, origin, decision);
            return Self::reject(origin, headers, PreflightRejectionReason::OriginNotAllowed);
        }

        let Some(requested_method) = request.access_control_request_method else {
            builder.build_vary_header(&mut headers);
            return Self::reject(
                origin,
                headers,
                PreflightRejectionReason::MissingAccessControlRequestMethod,
            );
        };

        if !self.options.methods.allows_method(requested_method) {
            builder.build_vary_header(&mut headers);
            return Self::reject(
                origin,
                headers,
                PreflightRejectionReason::MethodNotAllowed {
                    requested_method: requested_method.to_string(),
                },
            );
        }

        let requested_headers = request
            .access_control_request_headers
            .as_deref()
            .unwrap_or_default();
        if !self.options.allowed_headers.allows_headers(requested_headers) {
            builder.build_vary_header(&mut headers);
            return Self::reject(
                origin,
                headers,
                PreflightRejectionReason::HeadersNotAllowed {
                    requested_headers: requested_headers.to_string(),
                },
            );
        }

        builder.build_origin_headers(&mut headers, origin, decision);
        builder.build_credentials_header(&mut headers);
        builder.build_methods_header(&mut headers);
        builder.build_allowed_headers(&mut headers);
        builder.build_max_age_header(&mut headers);

        trace!(origin, requested_method, "preflight accepted");
        CorsDecision::PreflightAccepted {
            headers: headers.into_headers(),
            status: self.options.options_success_status,
        }
    }

    fn process_simple(&self, origin: &str, decision: OriginDecision) -> CorsDecision {
        let builder = HeaderBuilder::new(&self.options);
        let mut headers = HeaderCollection::new();
        builder.build_origin_headers(&mut headers, origin, decision);

        if matches!(decision, OriginDecision::Disallow | OriginDecision::Skip) {
            debug!(origin, "origin not allowed; forwarding without CORS headers");
            return CorsDecision::SimpleRejected {
                headers: headers.into_headers(),
            };
        }

        builder.build_credentials_header(&mut headers);
        builder.build_exposed_headers(&mut headers);

        trace!(origin, "simple request accepted");
        CorsDecision::SimpleAccepted {
            headers: headers.into_headers(),
        }
    }

    fn reject(
        origin: &str,
        headers: HeaderCollection,
        reason: PreflightRejectionReason,
    ) -> CorsDecision {
        debug!(origin, %reason, status = reason.status(), "preflight rejected");
        CorsDecision::PreflightRejected(PreflightRejection {
            headers: headers.into_headers(),
            reason,
        })
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
