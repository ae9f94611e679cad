use crate::constants::method;

/// Methods permitted in a preflight, emitted in `Access-Control-Allow-Methods`.
///
/// Entries are trimmed and upper-cased; case-insensitive duplicates are dropped.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AllowedMethods {
    values: Vec<String>,
}

impl AllowedMethods {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut deduped: Vec<String> = Vec::new();
        for value in values {
            let normalized = value.into().trim().to_ascii_uppercase();
            if !deduped.contains(&normalized) {
                deduped.push(normalized);
            }
        }

        Self { values: deduped }
    }

    pub fn allows_method(&self, requested: &str) -> bool {
        let requested = requested.trim();
        !requested.is_empty()
            && self
                .values
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(requested))
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

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::list([method::GET, method::HEAD, method::POST])
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
