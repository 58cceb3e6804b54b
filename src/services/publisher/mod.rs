// Publisher service
// Synchronous topic-based publish/subscribe with owner-scoped removal

use std::fmt;

/// Identifies who registered a handler, for bulk unsubscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OwnerId(pub u64);

type Handler<M> = Box<dyn FnMut(&M)>;

struct Subscription<T, M> {
    topic: T,
    owner: OwnerId,
    handler: Handler<M>,
}

/// Publisher delivering messages to handlers registered under a topic.
///
/// Handlers run synchronously, in registration order.
pub struct Publisher<T, M> {
    subscriptions: Vec<Subscription<T, M>>,
}

impl<T, M> Default for Publisher<T, M> {
    fn default() -> Self {
        Self {
            subscriptions: Vec::new(),
        }
    }
}

impl<T: fmt::Debug, M> fmt::Debug for Publisher<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.subscriptions.iter().map(|s| (&s.topic, s.owner)))
            .finish()
    }
}

impl<T: PartialEq, M> Publisher<T, M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, topic: T, owner: OwnerId, handler: impl FnMut(&M) + 'static) {
        self.subscriptions.push(Subscription {
            topic,
            owner,
            handler: Box::new(handler),
        });
    }

    /// Remove every handler registered by `owner`
    pub fn unsubscribe(&mut self, owner: OwnerId) -> usize {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.owner != owner);
        before - self.subscriptions.len()
    }

    /// Remove the handlers `owner` registered under `topic`
    pub fn unsubscribe_topic(&mut self, topic: &T, owner: OwnerId) -> usize {
        let before = self.subscriptions.len();
        self.subscriptions
            .retain(|s| !(s.owner == owner && &s.topic == topic));
        before - self.subscriptions.len()
    }

    /// Deliver `message` to every handler of `topic`; returns how many ran
    pub fn publish(&mut self, topic: &T, message: &M) -> usize {
        let mut delivered = 0;
        for subscription in self.subscriptions.iter_mut() {
            if &subscription.topic == topic {
                (subscription.handler)(message);
                delivered += 1;
            }
        }
        delivered
    }

    pub fn has_subscribers(&self, topic: &T) -> bool {
        self.subscriptions.iter().any(|s| &s.topic == topic)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscriptions.len()
    }
}
