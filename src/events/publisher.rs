use serde_json::Value;
use std::sync::mpsc;

/// Synchronous fan-out publisher for lifecycle events.
///
/// The report pipeline is single-threaded, so events are delivered over plain
/// mpsc channels at publish time; subscribers drain their receiver whenever
/// they choose.
#[derive(Debug, Default)]
pub struct EventPublisher {
    senders: Vec<mpsc::Sender<PublishedEvent>>,
}

/// Event that has been published
#[derive(Debug, Clone)]
pub struct PublishedEvent {
    pub name: String,
    pub context: Value,
    pub published_at: chrono::DateTime<chrono::Utc>,
}

impl EventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish an event with the given name and context
    pub fn publish(
        &self,
        event_name: impl Into<String>,
        context: Value,
    ) -> Result<(), PublishError> {
        let event = PublishedEvent {
            name: event_name.into(),
            context,
            published_at: chrono::Utc::now(),
        };

        for sender in &self.senders {
            // A dropped receiver is acceptable - we publish even when no one
            // is listening.
            let _ = sender.send(event.clone());
        }
        Ok(())
    }

    /// Subscribe to all events published after this call
    pub fn subscribe(&mut self) -> mpsc::Receiver<PublishedEvent> {
        let (sender, receiver) = mpsc::channel();
        self.senders.push(sender);
        receiver
    }

    /// Get the number of registered subscribers
    pub fn subscriber_count(&self) -> usize {
        self.senders.len()
    }
}

/// Error types for event publishing
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("Event channel is closed")]
    ChannelClosed,
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
