use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use tokio::sync::RwLock;

pub struct InMemoryEventStore<Event: Clone + Send + Sync + 'static> {
    inner: RwLock<Vec<Event>>,
    offline: bool,
}

impl<Event: Clone + Send + Sync + 'static> Default for InMemoryEventStore<Event> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Event: Clone + Send + Sync + 'static> InMemoryEventStore<Event> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Vec::new()),
            offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    pub async fn events(&self) -> Vec<Event> {
        self.inner.read().await.clone()
    }
}

#[async_trait::async_trait]
impl<Event> EventStore<Event> for InMemoryEventStore<Event>
where
    Event: Clone + Send + Sync + 'static,
{
    async fn create(&self, event: Event) -> Result<(), EventStoreError> {
        if self.offline {
            return Err(EventStoreError::Backend("Event store offline".into()));
        }
        self.inner.write().await.push(event);
        Ok(())
    }
}

#[cfg(test)]
mod in_memory_event_store_tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct RecordedEvent {
        event_type: &'static str,
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_record_events_in_order() {
        let store = InMemoryEventStore::<RecordedEvent>::new();
        store
            .create(RecordedEvent {
                event_type: "create:user",
            })
            .await
            .expect("expected to create the first event");
        store
            .create(RecordedEvent {
                event_type: "update:user",
            })
            .await
            .expect("expected to create the second event");

        let events = store.events().await;
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_type, "create:user");
        assert_eq!(events[1].event_type, "update:user");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_when_offline() {
        let mut store = InMemoryEventStore::<RecordedEvent>::new();
        store.toggle_offline();
        let result = store
            .create(RecordedEvent {
                event_type: "create:user",
            })
            .await;
        assert!(matches!(result, Err(EventStoreError::Backend(msg)) if msg == "Event store offline"));
        assert!(store.events().await.is_empty());
    }
}
