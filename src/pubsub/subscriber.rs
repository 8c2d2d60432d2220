//! Subscriber side of the publish-subscribe collaborator.

use std::sync::{Arc, Mutex};

/// Receives messages published under keys it subscribed to.
pub trait Subscriber: Send {
    /// Display name for diagnostics.
    fn name(&self) -> &str;

    /// Handle one delivered message.
    fn run(&mut self, message: &str);
}

/// Shared handle under which subscribers are registered with a
/// [`Provider`](crate::pubsub::Provider).
pub type SharedSubscriber = Arc<Mutex<dyn Subscriber>>;
