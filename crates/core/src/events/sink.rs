//! Domain event sink trait and implementations.

use std::sync::{Arc, Mutex};

use super::DomainEvent;

/// Trait for receiving domain events.
///
/// Implementations translate domain events into platform-specific actions.
/// Core services emit events through this trait after successful mutations.
///
/// # Design Rules
///
/// - `emit()` must be fast and non-blocking (no network calls, no store writes)
/// - Failure to emit must not affect domain operations (best-effort)
pub trait DomainEventSink: Send + Sync {
    /// Emit a single domain event.
    fn emit(&self, event: DomainEvent);
}

/// No-op implementation for tests or contexts that don't need events.
#[derive(Clone, Default)]
pub struct NoOpDomainEventSink;

impl DomainEventSink for NoOpDomainEventSink {
    fn emit(&self, _event: DomainEvent) {
        // Intentionally empty - events are discarded
    }
}

/// Fan-out sink over a tokio broadcast channel.
///
/// Subscribers receive every event emitted after they subscribe; a slow
/// subscriber that lags past the channel capacity misses the oldest events
/// rather than blocking the writer.
pub struct BroadcastEventSink {
    sender: tokio::sync::broadcast::Sender<DomainEvent>,
}

impl BroadcastEventSink {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = tokio::sync::broadcast::channel(capacity);
        Self { sender }
    }

    /// Opens a new subscription to future events.
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<DomainEvent> {
        self.sender.subscribe()
    }
}

impl DomainEventSink for BroadcastEventSink {
    fn emit(&self, event: DomainEvent) {
        // send() only fails when there are no subscribers; that is fine.
        let _ = self.sender.send(event);
    }
}

/// Mock sink for testing - collects emitted events.
#[derive(Clone, Default)]
pub struct MockDomainEventSink {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl MockDomainEventSink {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Clears collected events.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    /// Returns the number of collected events.
    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Returns true if no events have been collected.
    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl DomainEventSink for MockDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_sink_does_not_panic() {
        let sink = NoOpDomainEventSink;
        sink.emit(DomainEvent::profile_saved("user_1"));
    }

    #[test]
    fn test_mock_sink_collects_events() {
        let sink = MockDomainEventSink::new();
        assert!(sink.is_empty());

        sink.emit(DomainEvent::profile_saved("user_1"));
        sink.emit(DomainEvent::goal_cards_generated(1));
        assert_eq!(sink.len(), 2);

        sink.clear();
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn test_broadcast_sink_delivers_to_subscriber() {
        let sink = BroadcastEventSink::new(16);
        let mut rx = sink.subscribe();

        sink.emit(DomainEvent::portfolio_changed(vec!["acc1".to_string()]));

        let event = rx.recv().await.unwrap();
        assert_eq!(
            event,
            DomainEvent::portfolio_changed(vec!["acc1".to_string()])
        );
    }

    #[test]
    fn test_broadcast_sink_without_subscribers_is_best_effort() {
        let sink = BroadcastEventSink::new(16);
        sink.emit(DomainEvent::ProfileCleared);
    }
}
