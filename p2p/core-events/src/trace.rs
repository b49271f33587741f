//! A [`tracing`] observer.
use cuprate_relay_types::{RelayMethod, TxBlob};

use crate::CoreEvents;

/// A [`CoreEvents`] that logs every notification.
///
/// Batches are logged at `DEBUG`, single transactions at `TRACE`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEvents;

impl CoreEvents for TracingEvents {
    fn on_transactions_relayed(&self, txs: &[TxBlob], method: RelayMethod) {
        if txs.is_empty() {
            return;
        }

        tracing::debug!(txs = txs.len(), %method, "Transactions relayed.");

        for (i, tx) in txs.iter().enumerate() {
            tracing::trace!(index = i, bytes = tx.len(), %method, "Relayed transaction.");
        }
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use strum::VariantArray;

    use super::*;

    #[test]
    fn every_method() {
        let txs = [Bytes::from_static(b"blob_a"), Bytes::from_static(b"blob_b")];

        for method in RelayMethod::VARIANTS {
            TracingEvents.on_transactions_relayed(&[], *method);
            TracingEvents.on_transactions_relayed(&txs, *method);
        }
    }
}
