//! # Fan Out
//!
//! [`FanOut`] lets more than one [`CoreEvents`] be wired to the relay side, the core
//! controller plus a metrics observer for example.
use std::{fmt, sync::Arc};

use cuprate_relay_types::{RelayMethod, TxBlob};

use crate::CoreEvents;

/// A shared, thread-safe [`CoreEvents`].
pub type SharedCoreEvents = Arc<dyn CoreEvents + Send + Sync>;

/// A [`CoreEvents`] that passes every notification to each of its listeners.
///
/// Listeners are called one after another, in the order they were added.
#[derive(Clone, Default)]
pub struct FanOut {
    listeners: Vec<SharedCoreEvents>,
}

impl FanOut {
    /// Creates a [`FanOut`] with no listeners.
    pub const fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Adds a listener, returning the [`FanOut`].
    #[must_use]
    pub fn with<E>(mut self, listener: E) -> Self
    where
        E: CoreEvents + Send + Sync + 'static,
    {
        self.push(listener);
        self
    }

    /// Adds a listener.
    pub fn push<E>(&mut self, listener: E)
    where
        E: CoreEvents + Send + Sync + 'static,
    {
        self.listeners.push(Arc::new(listener));
    }

    /// Adds an already shared listener.
    pub fn push_shared(&mut self, listener: SharedCoreEvents) {
        self.listeners.push(listener);
    }

    /// Returns the amount of listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Returns [`true`] if there are no listeners.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for FanOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FanOut")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl CoreEvents for FanOut {
    fn on_transactions_relayed(&self, txs: &[TxBlob], method: RelayMethod) {
        if txs.is_empty() {
            return;
        }

        for listener in &self.listeners {
            listener.on_transactions_relayed(txs, method);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use bytes::Bytes;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{core_events_fn, RecordingEvents};

    #[test]
    fn listeners_called_in_order() {
        let order = Arc::new(Mutex::new(Vec::new()));

        let mut fan_out = FanOut::new();
        for i in 0..3 {
            let order = Arc::clone(&order);
            fan_out.push(core_events_fn(move |_, _| order.lock().unwrap().push(i)));
        }

        fan_out.on_transactions_relayed(&[Bytes::from_static(b"tx")], RelayMethod::Flood);

        assert_eq!(fan_out.len(), 3);
        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn every_listener_sees_the_batch() {
        let a = Arc::new(RecordingEvents::new());
        let b = Arc::new(RecordingEvents::new());

        let fan_out = FanOut::new().with(Arc::clone(&a)).with(Arc::clone(&b));

        let txs = [Bytes::from_static(b"a"), Bytes::from_static(b"b")];
        fan_out.on_transactions_relayed(&txs, RelayMethod::Local);

        assert_eq!(a.records(), b.records());
        assert_eq!(a.records().len(), 2);
    }

    #[test]
    fn shared_listener_held_elsewhere() {
        let recorder = Arc::new(RecordingEvents::new());
        let shared: SharedCoreEvents = Arc::<RecordingEvents>::clone(&recorder);

        let mut fan_out = FanOut::new();
        fan_out.push_shared(shared);
        assert!(!fan_out.is_empty());

        let txs = [Bytes::from_static(b"a")];
        fan_out.on_transactions_relayed(&txs, RelayMethod::Flood);

        assert_eq!(recorder.records(), vec![(txs[0].clone(), RelayMethod::Flood)]);
    }

    #[test]
    fn empty_batch_skips_listeners() {
        let recorder = Arc::new(RecordingEvents::new());
        let fan_out = FanOut::new().with(Arc::clone(&recorder));

        fan_out.on_transactions_relayed(&[], RelayMethod::Flood);

        assert!(recorder.batches().is_empty());
    }
}
