//! A recording [`CoreEvents`], used as a stand-in for the core controller in tests.
use std::sync::{Mutex, MutexGuard, PoisonError};

use cuprate_relay_types::{OwnedRelayNotification, RelayMethod, RelayNotification, TxBlob};

use crate::CoreEvents;

/// A [`CoreEvents`] that keeps every non-empty notification it receives.
///
/// Each batch is recorded under one lock, so concurrent batches never interleave.
#[derive(Debug, Default)]
pub struct RecordingEvents {
    batches: Mutex<Vec<OwnedRelayNotification>>,
}

impl RecordingEvents {
    /// Creates an empty [`RecordingEvents`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every recorded batch, in the order received.
    pub fn batches(&self) -> Vec<OwnedRelayNotification> {
        self.lock().clone()
    }

    /// Returns every recorded transaction paired with the [`RelayMethod`] it was relayed with.
    pub fn records(&self) -> Vec<(TxBlob, RelayMethod)> {
        self.lock()
            .iter()
            .flat_map(|batch| batch.txs.iter().map(move |tx| (tx.clone(), batch.method)))
            .collect()
    }

    /// Removes and returns every recorded batch.
    pub fn take(&self) -> Vec<OwnedRelayNotification> {
        std::mem::take(&mut *self.lock())
    }

    /// Locks the batches, recovering from a poisoned lock.
    fn lock(&self) -> MutexGuard<'_, Vec<OwnedRelayNotification>> {
        self.batches.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CoreEvents for RecordingEvents {
    fn on_transactions_relayed(&self, txs: &[TxBlob], method: RelayMethod) {
        if txs.is_empty() {
            return;
        }

        let batch = RelayNotification::new(txs, method).into_owned();
        self.lock().push(batch);
    }
}
