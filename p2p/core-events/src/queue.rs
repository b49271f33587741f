//! # Queued Events
//!
//! [`QueuedEvents`] is for core controllers with heavy notification handling, it copies the
//! blob handles into a bounded channel and returns, a background task then passes each
//! notification to the real [`CoreEvents`].
//!
//! The queue never waits: if it is full or the task has stopped the notification is dropped
//! and logged, the relay side is never blocked on the core.
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use tokio::{
    sync::mpsc::{self, error::TrySendError},
    task::JoinHandle,
};

use cuprate_relay_types::{OwnedRelayNotification, RelayMethod, RelayNotification, TxBlob};

use crate::{CoreEvents, CoreEventsError, QueueConfig, TryCoreEvents};

/// Spawns a task handling queued notifications with `inner`.
///
/// The task exits once every [`QueuedEvents`] handle has been dropped and the queue is drained.
///
/// # Panics
/// This function panics if called outside a [`tokio`] runtime.
pub fn spawn_queued_events<E>(inner: E, config: QueueConfig) -> (QueuedEvents, JoinHandle<()>)
where
    E: CoreEvents + Send + 'static,
{
    let (tx, mut rx) = mpsc::channel::<OwnedRelayNotification>(config.channel_capacity());

    let handle = tokio::spawn(async move {
        while let Some(notification) = rx.recv().await {
            inner.notify(notification.as_notification());
        }

        tracing::debug!("Relay notification queue closed.");
    });

    let events = QueuedEvents {
        tx,
        dropped: Arc::new(AtomicU64::new(0)),
    };

    (events, handle)
}

/// A [`CoreEvents`] that queues notifications for a background task, see [`spawn_queued_events`].
///
/// If the queue is full, or the task has stopped, the notification is lost: the inner
/// [`CoreEvents`] never sees those transactions. Every lost notification is logged and
/// counted, check [`QueuedEvents::dropped`] to detect it.
#[derive(Debug, Clone)]
pub struct QueuedEvents {
    tx: mpsc::Sender<OwnedRelayNotification>,
    dropped: Arc<AtomicU64>,
}

impl QueuedEvents {
    /// Returns the amount of notifications lost because the queue was full or closed.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl TryCoreEvents for QueuedEvents {
    fn try_on_transactions_relayed(
        &self,
        txs: &[TxBlob],
        method: RelayMethod,
    ) -> Result<(), CoreEventsError> {
        if txs.is_empty() {
            return Ok(());
        }

        self.tx
            .try_send(RelayNotification::new(txs, method).into_owned())
            .map_err(|e| match e {
                TrySendError::Full(_) => CoreEventsError::QueueFull,
                TrySendError::Closed(_) => CoreEventsError::QueueClosed,
            })
    }
}

impl CoreEvents for QueuedEvents {
    fn on_transactions_relayed(&self, txs: &[TxBlob], method: RelayMethod) {
        if let Err(e) = self.try_on_transactions_relayed(txs, method) {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            tracing::warn!(txs = txs.len(), %method, "Dropped relay notification: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc as std_mpsc;

    use bytes::Bytes;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{core_events_fn, RecordingEvents};

    #[tokio::test]
    async fn queued_notifications_delivered_in_order() {
        let recorder = Arc::new(RecordingEvents::new());
        let (events, handle) = spawn_queued_events(Arc::clone(&recorder), QueueConfig::default());

        for i in 0..10_u8 {
            events.on_transactions_relayed(&[Bytes::from(vec![i])], RelayMethod::Flood);
        }
        events.on_transactions_relayed(&[], RelayMethod::Flood);

        drop(events);
        handle.await.unwrap();

        let expected = (0..10_u8)
            .map(|i| (Bytes::from(vec![i]), RelayMethod::Flood))
            .collect::<Vec<_>>();
        assert_eq!(recorder.records(), expected);
        assert_eq!(recorder.batches().len(), 10);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn full_queue_drops() {
        // Blocks the handler until the sender is dropped, so the queue fills up.
        let (release_tx, release_rx) = std_mpsc::channel::<()>();
        let blocking = core_events_fn(move |_, _| {
            release_rx.recv().unwrap_err();
        });

        let (events, handle) = spawn_queued_events(blocking, QueueConfig { capacity: 1 });

        let tx = [Bytes::from_static(b"tx")];
        for _ in 0..5 {
            events.on_transactions_relayed(&tx, RelayMethod::Flood);
        }

        // At most one in the handler and one in the queue.
        assert!(events.dropped() >= 3);

        drop(release_tx);
        drop(events);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn closed_queue_drops() {
        let (events, handle) = spawn_queued_events(RecordingEvents::new(), QueueConfig::default());
        handle.abort();
        drop(handle.await);

        assert!(matches!(
            events.try_on_transactions_relayed(&[Bytes::from_static(b"tx")], RelayMethod::Local),
            Err(CoreEventsError::QueueClosed)
        ));

        events.on_transactions_relayed(&[Bytes::from_static(b"tx")], RelayMethod::Local);
        assert_eq!(events.dropped(), 1);
    }
}
