//! Publisher side of the publish-subscribe collaborator.

use crate::pubsub::provider::SharedProvider;

/// Appends published messages to its provider's queue.
///
/// Publishing only enqueues; delivery happens when someone calls
/// [`Provider::update`](crate::pubsub::Provider::update).
pub struct Publisher {
    provider: SharedProvider,
}

impl Publisher {
    /// Create a publisher feeding `provider`.
    pub fn new(provider: SharedProvider) -> Self {
        Self { provider }
    }

    /// Queue `message` for the next delivery pass.
    pub fn publish(&self, message: impl Into<String>) {
        if let Ok(mut provider) = self.provider.lock() {
            provider.notify(message);
        }
    }
}
