//! Store change notification
//!
//! The store notifies registered listeners synchronously after every
//! completed command. Registration is scoped: [`subscribe`] returns a
//! [`ListenerGuard`] that unsubscribes on drop, so a view adapter tied to
//! its own lifecycle cannot leak a callback.
//!
//! Listeners are invoked outside the registry lock, so a callback may
//! subscribe or unsubscribe without deadlocking.
//!
//! [`subscribe`]: ListenerSet::subscribe

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// A change the store has just applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// A fetch is in flight; `is_loading` is now true
    LoadStarted,
    /// Records were ingested and all derived state recomputed
    Loaded {
        /// Number of records now in the store
        count: usize,
    },
    /// The fetch failed; `error` is set and markers are unchanged
    LoadFailed {
        /// Displayable failure message
        error: String,
    },
    /// A filter command changed the visible subset
    FilterChanged,
    /// Filters were reset to defaults
    FiltersReset,
}

type Listener = Arc<dyn Fn(&StoreEvent) + Send + Sync>;

/// Statistics for the listener registry
#[derive(Debug, Default)]
pub struct ListenerStats {
    /// Total listeners ever registered
    pub registered: AtomicU64,
    /// Total event deliveries (events times listeners)
    pub notifications_sent: AtomicU64,
}

#[derive(Default)]
struct ListenerRegistry {
    listeners: RwLock<HashMap<u64, Listener>>,
    next_id: AtomicU64,
    stats: ListenerStats,
}

/// Registry of store change listeners
#[derive(Default)]
pub struct ListenerSet {
    registry: Arc<ListenerRegistry>,
}

impl ListenerSet {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; dropping the guard unregisters it
    pub fn subscribe(&self, listener: impl Fn(&StoreEvent) + Send + Sync + 'static) -> ListenerGuard {
        let id = self.registry.next_id.fetch_add(1, Ordering::Relaxed);
        self.registry.listeners.write().insert(id, Arc::new(listener));
        self.registry.stats.registered.fetch_add(1, Ordering::Relaxed);

        ListenerGuard {
            registry: Arc::clone(&self.registry),
            id,
        }
    }

    /// Notify every registered listener, synchronously, in registration-independent order
    pub fn notify(&self, event: &StoreEvent) {
        // Snapshot under the read lock, invoke outside it.
        let listeners: Vec<Listener> = self.registry.listeners.read().values().cloned().collect();
        for listener in &listeners {
            listener(event);
        }
        self.registry
            .stats
            .notifications_sent
            .fetch_add(listeners.len() as u64, Ordering::Relaxed);
    }

    /// Number of currently registered listeners
    pub fn len(&self) -> usize {
        self.registry.listeners.read().len()
    }

    /// Whether no listeners are registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total deliveries so far
    pub fn notifications_sent(&self) -> u64 {
        self.registry.stats.notifications_sent.load(Ordering::Relaxed)
    }
}

/// Scoped listener registration
///
/// Returned by [`ListenerSet::subscribe`]; the listener stays registered
/// for exactly as long as the guard is alive.
pub struct ListenerGuard {
    registry: Arc<ListenerRegistry>,
    id: u64,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.registry.listeners.write().remove(&self.id);
    }
}
