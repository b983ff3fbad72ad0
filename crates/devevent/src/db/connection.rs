use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use futures_util::future::{BoxFuture, FutureExt, Shared};

use devevent_core::storage::Result;

/// Establishes a connection to a database.
///
/// Implemented by the MongoDB backend; tests use counting fakes.
#[async_trait]
pub trait Connector: Send + Sync + 'static {
    /// Cheaply clonable connection handle.
    type Handle: Clone + Send + Sync + 'static;

    /// Performs one connection attempt.
    async fn connect(&self) -> Result<Self::Handle>;
}

type PendingConnection<H> = Shared<BoxFuture<'static, Result<H>>>;

enum Slot<H> {
    Empty,
    Connecting {
        attempt: u64,
        future: PendingConnection<H>,
    },
    Connected(H),
}

struct CacheState<H> {
    slot: Slot<H>,
    attempts: u64,
}

/// Memoized connection handle with a single in-flight attempt.
///
/// - A resolved handle is returned immediately without I/O.
/// - Callers arriving while an attempt is in flight await that same attempt.
/// - Otherwise a new attempt is started and shared.
///
/// A failed attempt hands the same error to every waiter and empties the
/// cache, so the next call starts a fresh attempt. Nothing retries on its own.
///
/// The mutex is only held to inspect or swap the slot, never across an await.
pub struct ConnectionCache<C: Connector> {
    connector: Arc<C>,
    state: Mutex<CacheState<C::Handle>>,
}

impl<C: Connector> ConnectionCache<C> {
    /// Creates an empty cache around a connector. No connection is made yet.
    pub fn new(connector: C) -> Self {
        Self {
            connector: Arc::new(connector),
            state: Mutex::new(CacheState {
                slot: Slot::Empty,
                attempts: 0,
            }),
        }
    }

    /// Returns the cached connection handle, connecting if needed.
    pub async fn connect(&self) -> Result<C::Handle> {
        let (attempt, pending) = {
            let mut guard = self.lock();
            let state = &mut *guard;

            match &state.slot {
                Slot::Connected(handle) => {
                    tracing::trace!("Reusing cached database connection");
                    return Ok(handle.clone());
                }
                Slot::Connecting { attempt, future } => {
                    tracing::debug!(attempt, "Awaiting in-flight connection attempt");
                    (*attempt, future.clone())
                }
                Slot::Empty => {
                    state.attempts += 1;
                    let attempt = state.attempts;
                    let connector = Arc::clone(&self.connector);
                    let future = async move { connector.connect().await }
                        .boxed()
                        .shared();

                    state.slot = Slot::Connecting {
                        attempt,
                        future: future.clone(),
                    };
                    tracing::info!(attempt, "Starting database connection attempt");
                    (attempt, future)
                }
            }
        };

        let result = pending.await;

        let mut state = self.lock();
        let settles_current = matches!(
            &state.slot,
            Slot::Connecting { attempt: current, .. } if *current == attempt
        );
        if settles_current {
            state.slot = match &result {
                Ok(handle) => {
                    tracing::debug!(attempt, "Database connection cached");
                    Slot::Connected(handle.clone())
                }
                Err(err) => {
                    tracing::warn!(attempt, error = %err, "Database connection attempt failed");
                    Slot::Empty
                }
            };
        }

        result
    }

    /// Returns true once a handle has been cached.
    pub fn is_connected(&self) -> bool {
        matches!(self.lock().slot, Slot::Connected(_))
    }

    /// Number of connection attempts started so far.
    pub fn attempts(&self) -> u64 {
        self.lock().attempts
    }

    /// Drops the cached handle (or forgets an in-flight attempt).
    ///
    /// The next [`connect`](Self::connect) starts a new attempt. Callers
    /// already awaiting the forgotten attempt still receive its result.
    pub fn reset(&self) {
        let mut state = self.lock();
        if !matches!(state.slot, Slot::Empty) {
            tracing::info!("Database connection cache reset");
        }
        state.slot = Slot::Empty;
    }

    fn lock(&self) -> MutexGuard<'_, CacheState<C::Handle>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use devevent_core::storage::RepositoryError;
    use futures_util::future::join_all;

    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    struct FakeHandle {
        attempt: usize,
    }

    /// Connector that counts attempts and fails the first `failures` of them.
    struct CountingConnector {
        calls: Arc<AtomicUsize>,
        failures: usize,
        delay: Duration,
    }

    impl CountingConnector {
        fn new(calls: Arc<AtomicUsize>) -> Self {
            Self {
                calls,
                failures: 0,
                delay: Duration::from_millis(20),
            }
        }

        fn failing_first(mut self, failures: usize) -> Self {
            self.failures = failures;
            self
        }
    }

    #[async_trait]
    impl Connector for CountingConnector {
        type Handle = Arc<FakeHandle>;

        async fn connect(&self) -> Result<Self::Handle> {
            let attempt = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            tokio::time::sleep(self.delay).await;
            if attempt <= self.failures {
                return Err(RepositoryError::ConnectionFailed(format!(
                    "attempt {attempt} refused"
                )));
            }
            Ok(Arc::new(FakeHandle { attempt }))
        }
    }

    #[tokio::test]
    async fn test_concurrent_callers_share_one_attempt() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cache = ConnectionCache::new(CountingConnector::new(Arc::clone(&calls)));

        let results = join_all((0..16).map(|_| cache.connect())).await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        let first = results[0].as_ref().unwrap();
        for result in &results {
            assert!(Arc::ptr_eq(first, result.as_ref().unwrap()));
        }
        assert!(cache.is_connected());
    }

    #[tokio::test]
    async fn test_concurrent_tasks_share_one_attempt() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cache = Arc::new(ConnectionCache::new(CountingConnector::new(Arc::clone(
            &calls,
        ))));

        let tasks: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                tokio::spawn(async move { cache.connect().await })
            })
            .collect();

        let mut handles = Vec::new();
        for task in tasks {
            handles.push(task.await.unwrap().unwrap());
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(handles.iter().all(|h| Arc::ptr_eq(h, &handles[0])));
    }

    #[tokio::test]
    async fn test_cached_handle_is_reused_without_reconnecting() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cache = ConnectionCache::new(CountingConnector::new(Arc::clone(&calls)));

        let first = cache.connect().await.unwrap();
        let second = cache.connect().await.unwrap();
        let third = cache.connect().await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.attempts(), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&first, &third));
    }

    #[tokio::test]
    async fn test_nothing_connects_until_first_call() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cache = ConnectionCache::new(CountingConnector::new(Arc::clone(&calls)));

        assert!(!cache.is_connected());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_failure_reaches_every_waiter_then_clears() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cache = ConnectionCache::new(
            CountingConnector::new(Arc::clone(&calls)).failing_first(1),
        );

        let results = join_all((0..4).map(|_| cache.connect())).await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        for result in &results {
            assert_eq!(
                result.as_ref().unwrap_err(),
                &RepositoryError::ConnectionFailed("attempt 1 refused".to_string())
            );
        }
        assert!(!cache.is_connected());

        let handle = cache.connect().await.unwrap();
        assert_eq!(handle.attempt, 2);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_reset_forces_a_new_attempt() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cache = ConnectionCache::new(CountingConnector::new(Arc::clone(&calls)));

        let first = cache.connect().await.unwrap();
        cache.reset();
        assert!(!cache.is_connected());

        let second = cache.connect().await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(first.attempt, 1);
        assert_eq!(second.attempt, 2);
    }
}
