//! CORS policy enforcement for HTTP handlers.
//!
//! [`Cors`] turns a request into a [`CorsDecision`]; [`filter`] and
//! [`CorsLayer`] apply that decision around a downstream handler.

mod allowed_headers;
mod allowed_methods;
pub mod constants;
mod context;
mod cors;
mod exposed_headers;
mod header_builder;
mod headers;
mod layer;
mod middleware;
mod options;
mod origin;
mod result;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use context::RequestContext;
pub use cors::Cors;
pub use exposed_headers::ExposedHeaders;
pub use headers::Headers;
pub use layer::{CorsLayer, CorsService};
pub use middleware::{CorsHandler, Handler, HandlerFn, apply_headers, filter, handler_fn};
pub use options::{CorsOptions, ValidationError};
pub use origin::{Origin, OriginDecision, OriginMatcher, OriginPredicateFn, PatternError};
pub use result::{CorsDecision, PreflightRejection, PreflightRejectionReason};
pub use util::canonical_header_name;
