use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventStoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

/// Append-only sink for audit events. Events are never read back by the write path.
#[async_trait]
pub trait EventStore<Event: Clone + Send + Sync + 'static>: Send + Sync {
    async fn create(&self, event: Event) -> Result<(), EventStoreError>;
}

pub mod in_memory;
