//! The query cache: keyed, request-coalescing fetch state shared by all views.
//!
//! A [`CacheKey`] names a remote operation, a [`QueryCache`] guarantees at most
//! one in-flight fetch per key, and a [`QueryState`] is the loading / error /
//! success envelope that views consume. Cancellation is explicit: observers
//! carry a [`CancelToken`] and a cancelled observer's result is a no-op.

mod cache;
mod cancel;

pub use cache::QueryCache;
pub use cancel::{cancel_pair, CancelHandle, CancelToken};

use std::fmt;
use std::fmt::{Display, Formatter};

/// Uniquely identifies a cacheable query: (service name, operation name,
/// parameters). Equality is structural.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct CacheKey {
    service: String,
    operation: String,
    params: Vec<String>,
}

impl CacheKey {
    pub fn new(service: impl Into<String>, operation: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            operation: operation.into(),
            params: Vec::new(),
        }
    }

    /// Appends a parameter to the key. Parameters are compared positionally.
    pub fn with_param(mut self, param: impl Display) -> Self {
        self.params.push(param.to_string());
        self
    }
}

impl Display for CacheKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.service, self.operation)?;
        for param in &self.params {
            write!(f, "/{param}")?;
        }
        Ok(())
    }
}

/// The loading / error / success envelope around a fetched value.
///
/// Exactly one of the following holds at any time: `is_loading`, `is_error`
/// (with `error` carrying the message), or `data` being present.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct QueryState<T> {
    pub data: Option<T>,
    pub is_loading: bool,
    pub is_error: bool,
    pub error: Option<String>,
}

impl<T> QueryState<T> {
    /// The state before a fetch has settled.
    pub fn loading() -> Self {
        Self {
            data: None,
            is_loading: true,
            is_error: false,
            error: None,
        }
    }

    /// The state after a fetch resolved.
    pub fn ready(data: T) -> Self {
        Self {
            data: Some(data),
            is_loading: false,
            is_error: false,
            error: None,
        }
    }

    /// The state after a fetch rejected.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            data: None,
            is_loading: false,
            is_error: true,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_key_structural_equality() {
        let a = CacheKey::new("cardService", "getNextTransaction").with_param(true);
        let b = CacheKey::new("cardService", "getNextTransaction").with_param(true);
        let c = CacheKey::new("cardService", "getNextTransaction").with_param(false);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_cache_key_display() {
        let key = CacheKey::new("cardService", "getNextTransaction").with_param(true);
        assert_eq!(key.to_string(), "cardService/getNextTransaction/true");
    }

    #[test]
    fn test_query_state_constructors() {
        let loading: QueryState<u8> = QueryState::loading();
        assert!(loading.is_loading && !loading.is_error && loading.data.is_none());

        let ready = QueryState::ready(7u8);
        assert_eq!(ready.data, Some(7));
        assert!(!ready.is_loading && !ready.is_error);

        let failed: QueryState<u8> = QueryState::failed("boom");
        assert!(failed.is_error && !failed.is_loading);
        assert_eq!(failed.error.as_deref(), Some("boom"));
    }
}
