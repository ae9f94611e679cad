use crate::constants::header;
use crate::headers::HeaderCollection;
use crate::options::CorsOptions;
use crate::origin::OriginDecision;

pub(crate) struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a CorsOptions) -> Self {
        Self { options }
    }

    /// `Access-Control-Allow-Origin` plus the matching `Vary` entry.
    ///
    /// A wildcard policy echoes the request origin when credentials are on,
    /// since browsers refuse `*` on credentialed responses.
    pub(crate) fn build_origin_headers(
        &self,
        headers: &mut HeaderCollection,
        request_origin: &str,
        decision: OriginDecision,
    ) {
        match decision {
            OriginDecision::Any if !self.options.credentials => {
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
            }
            OriginDecision::Any => {
                headers.add_vary(header::ORIGIN);
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, request_origin);
            }
            OriginDecision::Mirror => {
                self.build_vary_header(headers);
                headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, request_origin);
            }
            OriginDecision::Disallow | OriginDecision::Skip => {
                self.build_vary_header(headers);
            }
        }
    }

    pub(crate) fn build_vary_header(&self, headers: &mut HeaderCollection) {
        if self.options.origin.varies_by_origin() {
            headers.add_vary(header::ORIGIN);
        }
    }

    pub(crate) fn build_credentials_header(&self, headers: &mut HeaderCollection) {
        if self.options.credentials {
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
    }

    pub(crate) fn build_methods_header(&self, headers: &mut HeaderCollection) {
        if let Some(value) = self.options.methods.header_value() {
            headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, value);
        }
    }

    pub(crate) fn build_allowed_headers(&self, headers: &mut HeaderCollection) {
        if let Some(value) = self.options.allowed_headers.header_value() {
            headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
        }
    }

    pub(crate) fn build_exposed_headers(&self, headers: &mut HeaderCollection) {
        if let Some(value) = self.options.exposed_headers.header_value() {
            headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, value);
        }
    }

    pub(crate) fn build_max_age_header(&self, headers: &mut HeaderCollection) {
        if let Some(seconds) = self.options.effective_max_age() {
            headers.push(header::ACCESS_CONTROL_MAX_AGE, seconds.to_string());
        }
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
