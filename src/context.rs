use crate::constants::header;
use http::{HeaderMap, Method, Request};
use std::borrow::Cow;

/// Borrowed view of the request fields the policy engine looks at.
///
/// Header fields are `None` when the header is absent. A header that is
/// present but not valid UTF-8 is reported as `Some("")`.
///
/// `Access-Control-Request-Headers` may arrive on several field lines; they
/// are joined with `,` into one list. Undecodable bytes in it are replaced
/// so they can never match a configured header name.
#[derive(Debug, Clone)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<Cow<'a, str>>,
}

impl<'a> RequestContext<'a> {
    pub fn from_parts(method: &'a Method, headers: &'a HeaderMap) -> Self {
        Self {
            method: method.as_str(),
            origin: header_value(headers, header::ORIGIN),
            access_control_request_method: header_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_METHOD,
            ),
            access_control_request_headers: joined_header_values(
                headers,
                header::ACCESS_CONTROL_REQUEST_HEADERS,
            ),
        }
    }

    pub fn from_request<B>(request: &'a Request<B>) -> Self {
        Self::from_parts(request.method(), request.headers())
    }
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .map(|value| value.to_str().unwrap_or_default())
}

fn joined_header_values<'a>(headers: &'a HeaderMap, name: &str) -> Option<Cow<'a, str>> {
    let mut values = headers
        .get_all(name)
        .iter()
        .map(|value| String::from_utf8_lossy(value.as_bytes()));

    let mut joined = values.next()?;
    for value in values {
        let list = joined.to_mut();
        list.push(',');
        list.push_str(&value);
    }

    Some(joined)
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
