use crate::util::canonical_header_name;
use std::ops::Deref;

/// Response headers readable by the calling script, emitted in
/// `Access-Control-Expose-Headers` on actual (non-preflight) responses.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ExposedHeaders {
    values: Vec<String>,
}

impl ExposedHeaders {
    /// Keeps insertion order, canonicalizes spelling and removes duplicates.
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

    pub fn header_value(&self) -> Option<String> {
        if self.values.is_empty() {
            None
        } else {
            Some(self.values.join(","))
        }
    }
}

impl Deref for ExposedHeaders {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

#[cfg(test)]
#[path = "exposed_headers_test.rs"]
mod exposed_headers_test;
