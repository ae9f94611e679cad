use crate::util::equals_ignore_case;
use regex_automata::meta::{BuildError, Regex};
use std::sync::Arc;
use thiserror::Error;

pub type OriginPredicateFn = dyn Fn(&str) -> bool + Send + Sync;

/// Which origins may receive CORS permission headers.
#[derive(Clone, Default)]
pub enum Origin {
    /// Any origin; `"*"` is emitted unless credentials force an echo.
    #[default]
    Any,
    List(Vec<OriginMatcher>),
    /// Validator callback deciding per origin.
    Predicate(Arc<OriginPredicateFn>),
}

/// Outcome of matching a request origin against an [`Origin`] policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginDecision {
    /// Allowed by a wildcard policy.
    Any,
    /// Allowed by a specific matcher; the request origin is echoed back.
    Mirror,
    Disallow,
    /// The request carries no origin.
    Skip,
}

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to compile origin pattern")]
    Build(#[source] Box<BuildError>),
    #[error("origin pattern length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
}

const MAX_PATTERN_LENGTH: usize = 50_000;
const MAX_ORIGIN_LENGTH: usize = 4_096;

#[derive(Clone, Debug)]
pub enum OriginMatcher {
    /// Case-insensitive comparison of the full `scheme://host[:port]` string.
    Exact(String),
    Pattern(Regex),
}

impl OriginMatcher {
    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into().trim().to_string())
    }

    /// Compiles a case-insensitive pattern. Anchor it (`^...$`) to match whole origins.
    pub fn pattern_str(pattern: &str) -> Result<Self, PatternError> {
        if pattern.len() > MAX_PATTERN_LENGTH {
            return Err(PatternError::TooLong {
                length: pattern.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        Regex::new(&format!("(?i:{pattern})"))
            .map(Self::Pattern)
            .map_err(|err| PatternError::Build(Box::new(err)))
    }

    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            OriginMatcher::Exact(value) => equals_ignore_case(value, candidate),
            OriginMatcher::Pattern(regex) => regex.is_match(candidate.as_bytes()),
        }
    }

    fn is_wildcard(&self) -> bool {
        matches!(self, OriginMatcher::Exact(value) if value == "*")
    }
}

impl From<String> for OriginMatcher {
    fn from(value: String) -> Self {
        OriginMatcher::exact(value)
    }
}

impl From<&str> for OriginMatcher {
    fn from(value: &str) -> Self {
        OriginMatcher::exact(value)
    }
}

impl Origin {
    pub fn any() -> Self {
        Self::Any
    }

    /// Builds an allow-list. A `"*"` entry turns the whole list into [`Origin::Any`];
    /// exact duplicates (ignoring case) are dropped.
    pub fn list<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OriginMatcher>,
    {
        let mut matchers: Vec<OriginMatcher> = Vec::new();
        for matcher in values.into_iter().map(Into::into) {
            if matcher.is_wildcard() {
                return Self::Any;
            }
            let duplicate = match &matcher {
                OriginMatcher::Exact(value) => matchers.iter().any(
                    |existing| matches!(existing, OriginMatcher::Exact(seen) if equals_ignore_case(seen, value)),
                ),
                OriginMatcher::Pattern(_) => false,
            };
            if !duplicate {
                matchers.push(matcher);
            }
        }

        Self::List(matchers)
    }

    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(predicate))
    }

    pub fn resolve(&self, request_origin: Option<&str>) -> OriginDecision {
        let Some(origin) = request_origin else {
            return OriginDecision::Skip;
        };

        // Undecodable origins reach here as "".
        if origin.trim().is_empty() || origin.len() > MAX_ORIGIN_LENGTH {
            return OriginDecision::Disallow;
        }

        let allowed = match self {
            Origin::Any => return OriginDecision::Any,
            Origin::List(matchers) => matchers.iter().any(|matcher| matcher.matches(origin)),
            Origin::Predicate(predicate) => predicate(origin),
        };

        if allowed {
            OriginDecision::Mirror
        } else {
            OriginDecision::Disallow
        }
    }

    /// Whether the allowed-origin answer depends on which origin asked.
    ///
    /// True for lists of more than one origin, any pattern, and predicates.
    pub fn varies_by_origin(&self) -> bool {
        match self {
            Origin::Any => false,
            Origin::List(matchers) => {
                matchers.len() > 1
                    || matchers
                        .iter()
                        .any(|matcher| matches!(matcher, OriginMatcher::Pattern(_)))
            }
            Origin::Predicate(_) => true,
        }
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
