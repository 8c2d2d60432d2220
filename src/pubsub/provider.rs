//! Provider: subscription registry plus FIFO message queue.

use crate::pubsub::subscriber::SharedSubscriber;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// Identifies one subscription registration.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct SubscriptionId(Uuid);

struct Registration {
    id: SubscriptionId,
    subscriber: SharedSubscriber,
}

/// Holds per-key subscriber registrations and the queue of published
/// messages awaiting delivery.
///
/// A message is delivered to the subscribers registered under the key
/// equal to the message text. Delivery happens in [`update`](Self::update),
/// in publish order.
#[derive(Default)]
pub struct Provider {
    subscribers: HashMap<String, Vec<Registration>>,
    msg_queue: VecDeque<String>,
}

/// Shared handle through which publishers and callers reach one
/// provider.
pub type SharedProvider = Arc<Mutex<Provider>>;

impl Provider {
    /// Create a provider with no subscribers and an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `subscriber` under `key`. Returns the id needed to
    /// unsubscribe this registration.
    pub fn subscribe(
        &mut self,
        key: impl Into<String>,
        subscriber: SharedSubscriber,
    ) -> SubscriptionId {
        let id = SubscriptionId(Uuid::new_v4());
        self.subscribers
            .entry(key.into())
            .or_default()
            .push(Registration { id, subscriber });
        id
    }

    /// Remove the registration `id` under `key`. Returns whether a
    /// registration was removed.
    pub fn unsubscribe(&mut self, key: &str, id: SubscriptionId) -> bool {
        match self.subscribers.get_mut(key) {
            Some(registrations) => {
                let before = registrations.len();
                registrations.retain(|registration| registration.id != id);
                registrations.len() < before
            }
            None => false,
        }
    }

    /// Append one message to the delivery queue.
    pub fn notify(&mut self, message: impl Into<String>) {
        self.msg_queue.push_back(message.into());
    }

    /// Deliver every queued message, in enqueue order, to the
    /// subscribers registered under the matching key, then leave the
    /// queue empty. Messages nobody subscribed to are dropped.
    pub fn update(&mut self) {
        while let Some(message) = self.msg_queue.pop_front() {
            if let Some(registrations) = self.subscribers.get(message.as_str()) {
                for registration in registrations {
                    if let Ok(mut subscriber) = registration.subscriber.lock() {
                        subscriber.run(&message);
                    }
                }
            }
        }
    }

    /// Number of live registrations under `key`.
    pub fn subscriber_count(&self, key: &str) -> usize {
        self.subscribers.get(key).map_or(0, Vec::len)
    }

    /// Number of published messages not yet delivered.
    pub fn queued_messages(&self) -> usize {
        self.msg_queue.len()
    }
}
