//! Observer registry for learning events.
//!
//! Handlers are invoked synchronously, in subscription order, after the
//! event is committed to the log and with no log lock held. A handler may
//! therefore call back into the feedback service.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::types::LearningEvent;

/// Receives every learning event after it is recorded.
pub trait LearningEventHandler: Send + Sync {
    fn on_event(&self, event: &LearningEvent);
}

impl<F> LearningEventHandler for F
where
    F: Fn(&LearningEvent) + Send + Sync,
{
    fn on_event(&self, event: &LearningEvent) {
        self(event)
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub(crate) struct EventDispatcher {
    handlers: Mutex<Vec<(SubscriptionId, Arc<dyn LearningEventHandler>)>>,
    next_id: AtomicU64,
}

impl EventDispatcher {
    pub(crate) fn subscribe(&self, handler: Arc<dyn LearningEventHandler>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.handlers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, handler));
        id
    }

    pub(crate) fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.handlers.lock().unwrap_or_else(PoisonError::into_inner);
        let before = handlers.len();
        handlers.retain(|(existing, _)| *existing != id);
        handlers.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.handlers.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub(crate) fn dispatch(&self, event: &LearningEvent) {
        // Snapshot so handlers can subscribe or unsubscribe re-entrantly.
        let handlers: Vec<Arc<dyn LearningEventHandler>> = self
            .handlers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, h)| Arc::clone(h))
            .collect();
        for handler in handlers {
            handler.on_event(event);
        }
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.len())
            .finish()
    }
}
