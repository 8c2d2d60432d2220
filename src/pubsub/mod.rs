//! Publish-subscribe collaborator.
//!
//! A [`Provider`] keeps per-key subscriber registrations and a FIFO
//! queue of published messages. [`Publisher`]s append to the queue;
//! [`Provider::update`] delivers each queued message, in publish order,
//! to the subscribers registered under the key matching the message
//! text, then drains the whole queue. Delivery keys and message bodies
//! are the same value in this reference design.

mod provider;
mod publisher;
mod subscriber;

pub use provider::{Provider, SharedProvider, SubscriptionId};
pub use publisher::Publisher;
pub use subscriber::{SharedSubscriber, Subscriber};
