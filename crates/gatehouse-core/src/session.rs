//! In-memory identity provider with snapshot subscription.
//!
//! `SessionFeed` is the reference implementation of `IdentityProvider`. It
//! holds the current `ActorSnapshot` behind a `Mutex` and notifies
//! registered watchers on every accepted publish, replacing a UI
//! framework's reactive re-render with an explicit observer: the resolver
//! is invoked as a pure function each time the feed emits a new snapshot.
//!
//! `publish()` enforces the monotonic-loading guarantee: once a session's
//! identity has loaded, a snapshot that reports loading again is rejected,
//! so `Verdict::Pending` can never recur within one session lifecycle.

use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use gatehouse_contracts::error::{GatehouseError, GatehouseResult};

use crate::snapshot::ActorSnapshot;
use crate::traits::IdentityProvider;

/// A watcher invoked with every accepted snapshot.
pub type SnapshotWatcher = Box<dyn Fn(&ActorSnapshot) + Send>;

/// An in-memory, observable actor-snapshot feed.
///
/// # Thread safety
///
/// `snapshot()`, `subscribe()`, and `publish()` all acquire internal locks;
/// clones of the feed share the same state. The snapshot lock is released
/// before watchers run, so a watcher may call `snapshot()` freely.
#[derive(Clone)]
pub struct SessionFeed {
    snapshot: Arc<Mutex<ActorSnapshot>>,
    watchers: Arc<Mutex<Vec<SnapshotWatcher>>>,
}

impl SessionFeed {
    /// Create a feed whose initial snapshot reports identity loading.
    pub fn new() -> Self {
        Self {
            snapshot: Arc::new(Mutex::new(ActorSnapshot::loading())),
            watchers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Register a watcher invoked with every snapshot accepted after this
    /// call. Watchers run synchronously inside `publish()`, in
    /// registration order.
    pub fn subscribe(&self, watcher: impl Fn(&ActorSnapshot) + Send + 'static) {
        self.watchers.lock().unwrap().push(Box::new(watcher));
    }

    /// Replace the current snapshot and notify watchers.
    ///
    /// Rejects a snapshot whose `identity_loaded` flag regresses from true
    /// to false with `GatehouseError::SessionRegression` — within one
    /// session lifecycle, loading strictly precedes the loaded states and
    /// never recurs. Rejected snapshots never reach watchers.
    pub fn publish(&self, snapshot: ActorSnapshot) -> GatehouseResult<()> {
        {
            let mut current = self.snapshot.lock().unwrap();

            if current.identity_loaded && !snapshot.identity_loaded {
                warn!(
                    session_id = %current.session_id.0,
                    "rejecting snapshot: identity_loaded regressed from true to false"
                );
                return Err(GatehouseError::SessionRegression {
                    reason: "identity_loaded regressed from true to false".to_string(),
                });
            }

            debug!(
                session_id = %snapshot.session_id.0,
                identity_loaded = snapshot.identity_loaded,
                signed_in = snapshot.signed_in,
                memberships = snapshot.memberships.len(),
                "publishing actor snapshot"
            );

            *current = snapshot.clone();
        }

        let watchers = self.watchers.lock().unwrap();
        for watcher in watchers.iter() {
            watcher(&snapshot);
        }
        Ok(())
    }
}

impl Default for SessionFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityProvider for SessionFeed {
    fn snapshot(&self) -> ActorSnapshot {
        self.snapshot.lock().unwrap().clone()
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
