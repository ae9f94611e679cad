//! [`tower`] integration: the same policy as [`crate::CorsHandler`], as a
//! `Layer` for async stacks such as axum or hyper.

use crate::context::RequestContext;
use crate::cors::Cors;
use crate::middleware::{apply_headers, preflight_response};
use crate::options::{CorsOptions, ValidationError};
use crate::result::CorsDecision;
use http::{Request, Response};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::{Layer, Service};

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

#[derive(Clone)]
pub struct CorsLayer {
    cors: Arc<Cors>,
}

impl CorsLayer {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        Ok(Self::from_shared(Arc::new(Cors::new(options)?)))
    }

    pub fn from_shared(cors: Arc<Cors>) -> Self {
        Self { cors }
    }
}

impl<S> Layer<S> for CorsLayer {
    type Service = CorsService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CorsService {
            inner,
            cors: Arc::clone(&self.cors),
        }
    }
}

#[derive(Clone)]
pub struct CorsService<S> {
    inner: S,
    cors: Arc<Cors>,
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for CorsService<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>,
    S::Future: Send + 'static,
    S::Error: 'static,
    ResBody: Default + Send + 'static,
{
    type Response = Response<ResBody>;
    type Error = S::Error;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request<ReqBody>) -> Self::Future {
        let decision = self.cors.check(&RequestContext::from_request(&request));

        match decision {
            CorsDecision::NotApplicable => Box::pin(self.inner.call(request)),
            CorsDecision::SimpleAccepted { headers } | CorsDecision::SimpleRejected { headers } => {
                let future = self.inner.call(request);
                Box::pin(async move {
                    let mut response = future.await?;
                    apply_headers(response.headers_mut(), &headers);
                    Ok(response)
                })
            }
            CorsDecision::PreflightAccepted { headers, status } => {
                let response = preflight_response(status, &headers);
                Box::pin(async move { Ok(response) })
            }
            CorsDecision::PreflightRejected(rejection) => {
                let response = preflight_response(rejection.status(), &rejection.headers);
                Box::pin(async move { Ok(response) })
            }
        }
    }
}

#[cfg(test)]
#[path = "layer_test.rs"]
mod layer_test;
