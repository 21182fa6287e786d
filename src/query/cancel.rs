//! Explicit cancellation for query observers.
//!
//! A view holds a [`CancelHandle`] for as long as it is mounted and passes the
//! matching [`CancelToken`] into `QueryCache::observe`. Calling `cancel`, or
//! simply dropping the handle on teardown, detaches the observer: the shared
//! fetch keeps running, but its result is never applied to that observer.

use tokio::sync::watch;

/// Creates a connected handle/token pair.
pub fn cancel_pair() -> (CancelHandle, CancelToken) {
    let (tx, rx) = watch::channel(false);
    (CancelHandle { tx }, CancelToken { rx: Some(rx) })
}

/// The view-side end: cancels the paired token explicitly or on drop.
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }
}

/// The observer-side end, awaited inside the query cache.
#[derive(Debug, Clone)]
pub struct CancelToken {
    /// `None` means the token can never be cancelled.
    rx: Option<watch::Receiver<bool>>,
}

impl CancelToken {
    /// A token that is never cancelled, for observers with no teardown.
    pub fn never() -> Self {
        Self { rx: None }
    }

    /// True once `cancel` was called or the handle was dropped.
    pub fn is_cancelled(&self) -> bool {
        match &self.rx {
            None => false,
            Some(rx) => *rx.borrow() || rx.has_changed().is_err(),
        }
    }

    /// Resolves when the token is cancelled. Never resolves for
    /// [`CancelToken::never`].
    pub async fn cancelled(&self) {
        match self.rx.clone() {
            None => std::future::pending().await,
            Some(mut rx) => loop {
                if *rx.borrow() {
                    return;
                }
                // A dropped handle means the owning view was torn down.
                if rx.changed().await.is_err() {
                    return;
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_explicit_cancel() {
        let (handle, token) = cancel_pair();
        assert!(!token.is_cancelled());
        handle.cancel();
        assert!(token.is_cancelled());
        token.cancelled().await; // resolves immediately
    }

    #[tokio::test]
    async fn test_drop_cancels() {
        let (handle, token) = cancel_pair();
        drop(handle);
        assert!(token.is_cancelled());
        token.cancelled().await;
    }

    #[tokio::test]
    async fn test_never_token_pends() {
        let token = CancelToken::never();
        assert!(!token.is_cancelled());
        let timed_out = tokio::time::timeout(Duration::from_millis(10), token.cancelled())
            .await
            .is_err();
        assert!(timed_out);
    }
}
