//! Change subscription hub: explicit attach/detach lifecycle.
//!
//! Replaces the one-shot global event binding of the original UI script.
//! The manager notifies the hub after every save; subscribers (progress
//! renderers, loggers) receive the post-save counters and never need to
//! touch storage themselves.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// Emitted after a change has been saved. Carries the counters written by
/// that save so rendering needs no further reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub list: String,
    pub checked: u32,
    pub total: u32,
}

/// Handle returned by `attach`; pass to `detach` to stop receiving events.
pub type SubscriptionId = u64;

type Callback = Arc<dyn Fn(&ChangeEvent) + Send + Sync>;

/// Shared registry of subscription id -> callback. Subscribers are invoked
/// synchronously, in no guaranteed order, within the save path.
#[derive(Default)]
pub struct ChangeHub {
    next_id: AtomicU64,
    subscribers: RwLock<HashMap<SubscriptionId, Callback>>,
}

impl ChangeHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber; returns its id for later detach.
    pub fn attach<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&ChangeEvent) + Send + Sync + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.subscribers
            .write()
            .unwrap()
            .insert(id, Arc::new(callback));
        id
    }

    /// Remove a subscriber. Returns false if the id was already detached.
    pub fn detach(&self, id: SubscriptionId) -> bool {
        self.subscribers.write().unwrap().remove(&id).is_some()
    }

    /// Deliver an event to every attached subscriber.
    pub fn notify(&self, event: &ChangeEvent) {
        let callbacks: Vec<Callback> = self
            .subscribers
            .read()
            .unwrap()
            .values()
            .cloned()
            .collect();
        for cb in callbacks {
            cb(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn event(list: &str) -> ChangeEvent {
        ChangeEvent {
            list: list.to_string(),
            checked: 1,
            total: 2,
        }
    }

    #[test]
    fn attached_subscriber_receives_events() {
        let hub = ChangeHub::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let seen2 = Arc::clone(&seen);
        hub.attach(move |ev: &ChangeEvent| {
            seen2.lock().unwrap().push(ev.clone());
        });

        hub.notify(&event("Todo"));
        hub.notify(&event("Chores"));

        let got = seen.lock().unwrap();
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].list, "Todo");
        assert_eq!(got[1].list, "Chores");
    }

    #[test]
    fn detach_stops_delivery() {
        let hub = ChangeHub::new();
        let seen = Arc::new(Mutex::new(0usize));

        let seen2 = Arc::clone(&seen);
        let id = hub.attach(move |_: &ChangeEvent| {
            *seen2.lock().unwrap() += 1;
        });

        hub.notify(&event("Todo"));
        assert!(hub.detach(id));
        hub.notify(&event("Todo"));

        assert_eq!(*seen.lock().unwrap(), 1);
        // Second detach of the same id is a no-op.
        assert!(!hub.detach(id));
    }

    #[test]
    fn multiple_subscribers_all_notified() {
        let hub = ChangeHub::new();
        let a = Arc::new(Mutex::new(0usize));
        let b = Arc::new(Mutex::new(0usize));

        let a2 = Arc::clone(&a);
        hub.attach(move |_: &ChangeEvent| *a2.lock().unwrap() += 1);
        let b2 = Arc::clone(&b);
        hub.attach(move |_: &ChangeEvent| *b2.lock().unwrap() += 1);

        hub.notify(&event("Todo"));
        assert_eq!(*a.lock().unwrap(), 1);
        assert_eq!(*b.lock().unwrap(), 1);
    }
}
