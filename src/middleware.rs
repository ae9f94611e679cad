//! Synchronous handler composition: `filter(options)` yields a function that
//! wraps a downstream [`Handler`] in a [`CorsHandler`].

use crate::constants::header;
use crate::context::RequestContext;
use crate::cors::Cors;
use crate::headers::Headers;
use crate::options::{CorsOptions, ValidationError};
use crate::result::CorsDecision;
use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::{Request, Response, StatusCode};
use std::sync::Arc;

/// Something that turns a request into a response.
pub trait Handler<B> {
    type Body;

    fn handle(&self, request: Request<B>) -> Response<Self::Body>;
}

/// Adapts a closure into a [`Handler`]. Created by [`handler_fn`].
#[derive(Clone, Copy)]
pub struct HandlerFn<F> {
    f: F,
}

pub fn handler_fn<F>(f: F) -> HandlerFn<F> {
    HandlerFn { f }
}

impl<F, B, R> Handler<B> for HandlerFn<F>
where
    F: Fn(Request<B>) -> Response<R>,
{
    type Body = R;

    fn handle(&self, request: Request<B>) -> Response<R> {
        (self.f)(request)
    }
}

/// A downstream handler guarded by a shared [`Cors`] policy.
pub struct CorsHandler<H> {
    cors: Arc<Cors>,
    inner: H,
}

impl<H> CorsHandler<H> {
    pub fn new(cors: Arc<Cors>, inner: H) -> Self {
        Self { cors, inner }
    }
}

impl<H: Clone> Clone for CorsHandler<H> {
    fn clone(&self) -> Self {
        Self {
            cors: Arc::clone(&self.cors),
            inner: self.inner.clone(),
        }
    }
}

impl<H, B> Handler<B> for CorsHandler<H>
where
    H: Handler<B>,
    H::Body: Default,
{
    type Body = H::Body;

    fn handle(&self, request: Request<B>) -> Response<H::Body> {
        let decision = self.cors.check(&RequestContext::from_request(&request));
        match decision {
            CorsDecision::NotApplicable => self.inner.handle(request),
            CorsDecision::SimpleAccepted { headers } | CorsDecision::SimpleRejected { headers } => {
                let mut response = self.inner.handle(request);
                apply_headers(response.headers_mut(), &headers);
                response
            }
            CorsDecision::PreflightAccepted { headers, status } => {
                preflight_response(status, &headers)
            }
            CorsDecision::PreflightRejected(rejection) => {
                preflight_response(rejection.status(), &rejection.headers)
            }
        }
    }
}

/// Validates `options` once and returns the wrapping function.
///
/// ```
/// use cors_filter::{CorsOptions, Handler, filter, handler_fn};
/// use http::{Request, Response};
///
/// let wrap = filter(CorsOptions::default()).expect("valid options");
/// let app = wrap(handler_fn(|_req: Request<()>| Response::new("hello")));
///
/// let request = Request::get("/").header("Origin", "https://app.test").body(()).unwrap();
/// let response = app.handle(request);
/// assert_eq!(response.headers()["access-control-allow-origin"], "*");
/// ```
pub fn filter<H>(options: CorsOptions) -> Result<impl Fn(H) -> CorsHandler<H>, ValidationError> {
    let cors = Arc::new(Cors::new(options)?);
    Ok(move |inner: H| CorsHandler::new(Arc::clone(&cors), inner))
}

/// Terminal response for a preflight; the body is always empty.
pub(crate) fn preflight_response<R: Default>(status: u16, headers: &Headers) -> Response<R> {
    let mut response = Response::new(R::default());
    *response.status_mut() = StatusCode::from_u16(status).unwrap_or(StatusCode::OK);
    apply_headers(response.headers_mut(), headers);
    response
}

/// Writes decision headers onto a response. `Vary` entries are appended to
/// whatever the handler already set; everything else replaces.
pub fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers {
        let (Ok(header_name), Ok(header_value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) else {
            continue;
        };

        if name.eq_ignore_ascii_case(header::VARY) {
            append_vary(map, header_value);
        } else {
            map.insert(header_name, header_value);
        }
    }
}

fn append_vary(map: &mut HeaderMap, value: HeaderValue) {
    let already_listed = map.get_all(http::header::VARY).iter().any(|existing| {
        existing.to_str().is_ok_and(|existing| {
            existing
                .split(',')
                .any(|part| part.trim().eq_ignore_ascii_case(value.to_str().unwrap_or_default()))
        })
    });
    if !already_listed {
        map.append(http::header::VARY, value);
    }
}

#[cfg(test)]
#[path = "middleware_test.rs"]
mod middleware_test;
