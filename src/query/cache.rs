//! The request-coalescing cache behind every dashboard card.

use crate::query::{CacheKey, CancelToken, QueryState};
use std::collections::HashMap;
use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{watch, Mutex};
use tracing::{debug, trace};

/// A settled fetch: the value, or the error's message.
type Settled<T> = std::result::Result<T, String>;

/// What the cache knows about one key.
enum Slot<T> {
    /// A fetch is running; the receiver resolves when it settles.
    InFlight(watch::Receiver<Option<Settled<T>>>),
    /// The last fetch settled at `at`. Failures are cached like successes.
    Resolved { outcome: Settled<T>, at: Instant },
}

/// A process-wide store of query results keyed by [`CacheKey`].
///
/// For a given key, at most one fetch is in flight at a time: concurrent
/// observers of the same key await the same settlement, so identical requests
/// issued within the freshness window cost one network call. A resolved entry
/// (success or failure) is served from the cache until it is older than the
/// freshness window or [`invalidate`](Self::invalidate) removes it. There is
/// no retry: a failed fetch stays failed until the entry expires or is
/// invalidated.
///
/// All mutation goes through the internal mutex, which serializes writes per
/// key. Clones share the same store.
pub struct QueryCache<T> {
    slots: Arc<Mutex<HashMap<CacheKey, Slot<T>>>>,
    freshness: Duration,
}

impl<T> Clone for QueryCache<T> {
    fn clone(&self) -> Self {
        Self {
            slots: Arc::clone(&self.slots),
            freshness: self.freshness,
        }
    }
}

impl<T> QueryCache<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Creates an empty cache whose resolved entries stay fresh for
    /// `freshness`.
    pub fn new(freshness: Duration) -> Self {
        Self {
            slots: Arc::new(Mutex::new(HashMap::new())),
            freshness,
        }
    }

    /// Observes `key`, running `fetch` only if there is neither a fresh
    /// resolved entry nor a fetch already in flight.
    ///
    /// The returned state is `ready` or `failed` once the fetch settles. If
    /// `cancel` fires first the observer detaches and gets `loading` back;
    /// the shared fetch keeps running and its result still lands in the cache
    /// for other observers, it is just never applied to the cancelled one.
    pub async fn observe<F, Fut, E>(
        &self,
        key: CacheKey,
        fetch: F,
        cancel: CancelToken,
    ) -> QueryState<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = std::result::Result<T, E>> + Send + 'static,
        E: Display + Send + 'static,
    {
        let mut rx = {
            let mut slots = self.slots.lock().await;
            match slots.get(&key) {
                Some(Slot::Resolved { outcome, at }) if at.elapsed() < self.freshness => {
                    trace!("{key}: serving cached result");
                    return state_from(outcome);
                }
                Some(Slot::InFlight(rx)) => {
                    trace!("{key}: joining in-flight fetch");
                    rx.clone()
                }
                _ => {
                    debug!("{key}: starting fetch");
                    let (tx, rx) = watch::channel(None);
                    slots.insert(key.clone(), Slot::InFlight(rx.clone()));
                    let slots = Arc::clone(&self.slots);
                    let slot_key = key.clone();
                    let future = fetch();
                    // The fetch runs detached from the observer so that a
                    // cancelled or dropped observer cannot abort it.
                    tokio::spawn(async move {
                        let outcome = future.await.map_err(|e| e.to_string());
                        let mut slots = slots.lock().await;
                        slots.insert(
                            slot_key,
                            Slot::Resolved {
                                outcome: outcome.clone(),
                                at: Instant::now(),
                            },
                        );
                        let _ = tx.send(Some(outcome));
                    });
                    rx
                }
            }
        };

        loop {
            let settled: Option<Settled<T>> = rx.borrow().clone();
            if let Some(outcome) = settled {
                return state_from(&outcome);
            }
            tokio::select! {
                _ = cancel.cancelled() => {
                    trace!("{key}: observer cancelled, result will not be applied");
                    return QueryState::loading();
                }
                changed = rx.changed() => {
                    if changed.is_err() {
                        return QueryState::failed("fetch task ended without settling");
                    }
                }
            }
        }
    }

    /// The current state of `key` without triggering a fetch. A stale entry
    /// reads as `loading`, like an absent one.
    pub async fn peek(&self, key: &CacheKey) -> QueryState<T> {
        let slots = self.slots.lock().await;
        match slots.get(key) {
            Some(Slot::Resolved { outcome, at }) if at.elapsed() < self.freshness => {
                state_from(outcome)
            }
            _ => QueryState::loading(),
        }
    }

    /// Removes the entry for `key`, forcing the next observation to refetch.
    pub async fn invalidate(&self, key: &CacheKey) {
        let mut slots = self.slots.lock().await;
        if slots.remove(key).is_some() {
            debug!("{key}: invalidated");
        }
    }
}

fn state_from<T: Clone>(outcome: &Settled<T>) -> QueryState<T> {
    match outcome {
        Ok(value) => QueryState::ready(value.clone()),
        Err(message) => QueryState::failed(message.clone()),
    }
}
