//! Relay notifications.
//!
//! A [`RelayNotification`] is never stored, it borrows the relay subsystem's
//! blobs for the length of one call. [`OwnedRelayNotification`] exists for
//! receivers that need to move the batch somewhere else (a queue, a task).
use std::slice;

use bytes::Bytes;

use crate::RelayMethod;

/// An opaque, already serialized transaction, exactly as it is sent on the wire.
pub type TxBlob = Bytes;

/// A batch of transactions that were relayed together with one [`RelayMethod`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RelayNotification<'a> {
    /// The transactions, in the order the relay subsystem batched them.
    pub txs: &'a [TxBlob],
    /// How the transactions were relayed.
    pub method: RelayMethod,
}

impl<'a> RelayNotification<'a> {
    /// Creates a new [`RelayNotification`].
    pub const fn new(txs: &'a [TxBlob], method: RelayMethod) -> Self {
        Self { txs, method }
    }

    /// Returns [`true`] if there are no transactions in this notification.
    pub const fn is_empty(&self) -> bool {
        self.txs.is_empty()
    }

    /// Returns the amount of transactions in this notification.
    pub const fn len(&self) -> usize {
        self.txs.len()
    }

    /// Returns an iterator over every transaction paired with the [`RelayMethod`].
    pub fn iter(&self) -> impl Iterator<Item = (&'a TxBlob, RelayMethod)> {
        let method = self.method;
        self.txs.iter().map(move |tx| (tx, method))
    }

    /// Clones the blob handles out of the borrowed batch.
    ///
    /// This does not copy the transaction bytes, only the [`Bytes`] handles.
    pub fn into_owned(self) -> OwnedRelayNotification {
        OwnedRelayNotification {
            txs: self.txs.to_vec(),
            method: self.method,
        }
    }
}

impl<'a> IntoIterator for &RelayNotification<'a> {
    type Item = &'a TxBlob;
    type IntoIter = slice::Iter<'a, TxBlob>;

    fn into_iter(self) -> Self::IntoIter {
        self.txs.iter()
    }
}

/// An owned [`RelayNotification`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedRelayNotification {
    /// The transactions.
    pub txs: Vec<TxBlob>,
    /// How the transactions were relayed.
    pub method: RelayMethod,
}

impl OwnedRelayNotification {
    /// Borrows this as a [`RelayNotification`].
    pub fn as_notification(&self) -> RelayNotification<'_> {
        RelayNotification::new(&self.txs, self.method)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn iter_keeps_order_and_method() {
        let txs = [Bytes::from_static(b"a"), Bytes::from_static(b"b")];
        let notification = RelayNotification::new(&txs, RelayMethod::Flood);

        assert_eq!(notification.len(), 2);
        assert!(!notification.is_empty());
        assert_eq!(
            notification.iter().collect::<Vec<_>>(),
            vec![(&txs[0], RelayMethod::Flood), (&txs[1], RelayMethod::Flood)]
        );
    }

    #[test]
    fn into_owned_shares_bytes() {
        let txs = [Bytes::from(vec![1, 2, 3])];
        let owned = RelayNotification::new(&txs, RelayMethod::Local).into_owned();

        assert_eq!(owned.txs[0].as_ptr(), txs[0].as_ptr());
        assert_eq!(owned.as_notification(), RelayNotification::new(&txs, RelayMethod::Local));
    }

    #[test]
    fn ref_into_iter_keeps_order() {
        let txs = [
            Bytes::from_static(b"a"),
            Bytes::from_static(b"b"),
            Bytes::from_static(b"c"),
        ];
        let notification = RelayNotification::new(&txs, RelayMethod::Local);

        let mut seen = Vec::new();
        for tx in &notification {
            seen.push(tx.clone());
        }

        assert_eq!(seen, txs);
    }

    #[test]
    fn empty() {
        let notification = RelayNotification::new(&[], RelayMethod::Block);

        assert!(notification.is_empty());
        assert_eq!(notification.iter().count(), 0);
    }
}
