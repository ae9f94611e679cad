use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::{DEFAULT_OPTIONS_SUCCESS_STATUS, MAX_AGE_CEILING};
use crate::exposed_headers::ExposedHeaders;
use crate::origin::{Origin, OriginMatcher};
use crate::util::is_http_token;
use thiserror::Error;

/// Policy configuration. Build it with a struct literal over
/// `..CorsOptions::default()` and hand it to [`crate::Cors::new`].
#[derive(Clone)]
pub struct CorsOptions {
    pub origin: Origin,
    pub methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub exposed_headers: ExposedHeaders,
    pub credentials: bool,
    /// Seconds; emitted values never exceed [`MAX_AGE_CEILING`].
    pub max_age: Option<u64>,
    /// Let OPTIONS requests through to the wrapped handler untouched.
    pub ignore_options: bool,
    pub options_success_status: u16,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            origin: Origin::Any,
            methods: AllowedMethods::default(),
            allowed_headers: AllowedHeaders::default(),
            exposed_headers: ExposedHeaders::default(),
            credentials: false,
            max_age: None,
            ignore_options: false,
            options_success_status: DEFAULT_OPTIONS_SUCCESS_STATUS,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("allowed method '{0}' is not a valid HTTP token")]
    InvalidMethod(String),
    #[error("header name '{0}' is not a valid HTTP token")]
    InvalidHeaderName(String),
    #[error("allowed origin list contains an empty origin")]
    EmptyOrigin,
    #[error("preflight success status must be in the 200..=299 range, got {0}")]
    InvalidOptionsSuccessStatus(u16),
}

impl CorsOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(method) = self
            .methods
            .values()
            .iter()
            .find(|method| !is_http_token(method))
        {
            return Err(ValidationError::InvalidMethod(method.clone()));
        }

        if let Some(name) = self
            .allowed_headers
            .values()
            .iter()
            .chain(self.exposed_headers.iter())
            .find(|name| !is_http_token(name))
        {
            return Err(ValidationError::InvalidHeaderName(name.clone()));
        }

        if let Origin::List(matchers) = &self.origin
            && matchers
                .iter()
                .any(|matcher| matches!(matcher, OriginMatcher::Exact(value) if value.is_empty()))
        {
            return Err(ValidationError::EmptyOrigin);
        }

        if !(200..=299).contains(&self.options_success_status) {
            return Err(ValidationError::InvalidOptionsSuccessStatus(
                self.options_success_status,
            ));
        }

        Ok(())
    }

    /// The `Access-Control-Max-Age` value to emit, if any.
    pub fn effective_max_age(&self) -> Option<u64> {
        match self.max_age {
            Some(0) | None => None,
            Some(value) => Some(value.min(MAX_AGE_CEILING)),
        }
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
