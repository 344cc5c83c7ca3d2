//! In-process session event fan-out over a `tokio::sync::broadcast` channel.

use futures::Stream;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::domain::repository::SessionEventPublisher;
use crate::domain::types::{SESSION_EVENT_CAPACITY, SessionEvent};

#[derive(Clone)]
pub struct BroadcastSessionEvents {
    tx: broadcast::Sender<SessionEvent>,
}

impl Default for BroadcastSessionEvents {
    fn default() -> Self {
        Self::new(SESSION_EVENT_CAPACITY)
    }
}

impl BroadcastSessionEvents {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Stream of events for `user_id` only. A lagging receiver skips what it
    /// missed and keeps going; the stream ends when the channel closes.
    pub fn subscribe(
        &self,
        user_id: Uuid,
    ) -> impl Stream<Item = SessionEvent> + Send + 'static + use<> {
        let rx = self.tx.subscribe();
        futures::stream::unfold(rx, move |mut rx| async move {
            loop {
                match rx.recv().await {
                    Ok(event) if event.user_id == user_id => return Some((event, rx)),
                    Ok(_) => continue,
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(%user_id, skipped, "session event subscriber lagged");
                        continue;
                    }
                    Err(broadcast::error::RecvError::Closed) => return None,
                }
            }
        })
    }
}

impl SessionEventPublisher for BroadcastSessionEvents {
    fn publish(&self, event: SessionEvent) {
        // Err only means nobody is subscribed right now.
        let _ = self.tx.send(event);
    }
}
