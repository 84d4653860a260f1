//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use super::types::{EncounterId, LifecycleEvent, PlanEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Plans produced or advanced
    Plan,
    /// Session start, listening, and end
    Lifecycle,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Plan(PlanEvent),
    Lifecycle(LifecycleEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Plan(_) => Topic::Plan,
            Event::Lifecycle(_) => Topic::Lifecycle,
        }
    }

    pub fn encounter(&self) -> EncounterId {
        match self {
            Event::Plan(event) => event.encounter(),
            Event::Lifecycle(event) => event.encounter(),
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Publishing is best-effort: events without
/// subscribers are dropped, and slow subscribers observe `Lagged`.
#[derive(Clone)]
pub struct EventBus {
    plan: broadcast::Sender<Event>,
    lifecycle: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            plan: broadcast::channel(capacity).0,
            lifecycle: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Plan => &self.plan,
            Topic::Lifecycle => &self.lifecycle,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn routes_events_by_topic() {
        let bus = EventBus::with_capacity(4);
        let mut plans = bus.subscribe(Topic::Plan);
        let mut lifecycle = bus.subscribe(Topic::Lifecycle);

        bus.publish(Event::Lifecycle(LifecycleEvent::Started {
            encounter: EncounterId(7),
        }));

        let event = lifecycle.recv().await.unwrap();
        assert_eq!(event.topic(), Topic::Lifecycle);
        assert_eq!(event.encounter(), EncounterId(7));
        assert!(plans.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_harmless() {
        let bus = EventBus::default();
        bus.publish(Event::Lifecycle(LifecycleEvent::Listening {
            encounter: EncounterId(1),
        }));
    }
}
