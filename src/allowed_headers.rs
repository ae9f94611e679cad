use crate::constants::header;
use crate::util::{canonical_header_name, split_header_list};

/// Request headers a preflight may ask for, emitted in `Access-Control-Allow-Headers`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AllowedHeaders {
    values: Vec<String>,
}

impl Default for AllowedHeaders {
    fn default() -> Self {
        Self::list([
            header::ACCEPT,
            header::ACCEPT_LANGUAGE,
            header::CONTENT_LANGUAGE,
            header::ORIGIN,
        ])
    }
}

impl AllowedHeaders {
    /// Builds the list in canonical spelling, dropping case-insensitive duplicates.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut deduped: Vec<String> = Vec::new();
        for value in values {
            let canonical = canonical_header_name(&value.into());
            if !deduped
                .iter()
                .any(|existing| existing.eq_ignore_ascii_case(&canonical))
            {
                deduped.push(canonical);
            }
        }

        Self { values: deduped }
    }

    /// Every entry of a comma-separated `Access-Control-Request-Headers` value
    /// must be configured. A blank value is always allowed.
    pub fn allows_headers(&self, request_headers: &str) -> bool {
        split_header_list(request_headers).all(|requested| {
            self.values
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(requested))
        })
    }

    pub fn header_value(&self) -> Option<String> {
        if self.values.is_empty() {
            None
        } else {
            Some(self.values.join(","))
        }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
