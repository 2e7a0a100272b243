use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::trace;

use crate::types::PaneId;

/// Coarse layout notifications published after each committed mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    PaneOpened(PaneId),
    PaneClosed(PaneId),
    PaneMoved { pane: PaneId, from: usize, to: usize },
    PaneResized { pane: PaneId, width: f64 },
    ScrollChanged { offset: f64 },
    Shutdown,
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    /// Returns the number of receivers reached; zero when nobody listens.
    pub fn publish(&self, event: Event) -> usize {
        trace!(?event, "publish");
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(Event::PaneOpened(PaneId(1)));

        let event = rx.recv().await.unwrap();
        assert_eq!(event, Event::PaneOpened(PaneId(1)));
    }

    #[tokio::test]
    async fn multiple_subscribers() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(Event::Shutdown);

        assert!(matches!(rx1.recv().await.unwrap(), Event::Shutdown));
        assert!(matches!(rx2.recv().await.unwrap(), Event::Shutdown));
    }

    #[tokio::test]
    async fn layout_events_arrive_in_order() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();
        let pane = PaneId(2);

        bus.publish(Event::PaneOpened(pane));
        bus.publish(Event::PaneMoved {
            pane,
            from: 0,
            to: 1,
        });
        bus.publish(Event::PaneClosed(pane));

        assert!(matches!(rx.recv().await.unwrap(), Event::PaneOpened(id) if id == pane));
        assert!(matches!(
            rx.recv().await.unwrap(),
            Event::PaneMoved { from: 0, to: 1, .. }
        ));
        assert!(matches!(rx.recv().await.unwrap(), Event::PaneClosed(id) if id == pane));
    }

    #[test]
    fn publish_without_subscribers_returns_zero() {
        let bus = EventBus::new(16);
        assert_eq!(bus.publish(Event::ScrollChanged { offset: 10.0 }), 0);
    }

    #[test]
    fn publish_returns_subscriber_count() {
        let bus = EventBus::new(16);
        let _rx1 = bus.subscribe();
        let _rx2 = bus.subscribe();
        assert_eq!(bus.publish(Event::Shutdown), 2);
    }

    #[test]
    fn event_serialization_is_tagged() {
        let json = serde_json::to_string(&Event::PaneClosed(PaneId(4))).unwrap();
        assert_eq!(json, r#"{"type":"PaneClosed","data":4}"#);
    }

    #[test]
    fn unknown_event_deserializes() {
        let json = r#"{"type":"SomeNewEventWeNeverHeardOf","data":null}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert!(matches!(event, Event::Unknown));
    }
}
