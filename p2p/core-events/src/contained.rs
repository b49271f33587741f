//! Fallible notification handling.
//!
//! Relay has already happened by the time [`CoreEvents::on_transactions_relayed`] is called so
//! errors can not be given back to the relay side. [`TryCoreEvents`] is for implementers that
//! can fail, wrapping one in [`Contained`] gives a [`CoreEvents`] that logs the error and moves on.
use std::sync::atomic::{AtomicU64, Ordering};

use cuprate_relay_types::{RelayMethod, TxBlob};

use crate::{CoreEvents, CoreEventsError};

/// A [`CoreEvents`] that can fail.
pub trait TryCoreEvents {
    /// Handles `txs` having been relayed with `method`.
    ///
    /// # Errors
    /// Returns [`Err`] if handling the notification failed.
    fn try_on_transactions_relayed(
        &self,
        txs: &[TxBlob],
        method: RelayMethod,
    ) -> Result<(), CoreEventsError>;
}

/// Turns a [`TryCoreEvents`] into a [`CoreEvents`] by logging errors and counting them.
#[derive(Debug, Default)]
pub struct Contained<T> {
    inner: T,
    failures: AtomicU64,
}

impl<T> Contained<T> {
    /// Wraps `inner`.
    pub const fn new(inner: T) -> Self {
        Self {
            inner,
            failures: AtomicU64::new(0),
        }
    }

    /// Returns the amount of notifications that failed.
    pub fn failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    /// Returns a reference to the inner [`TryCoreEvents`].
    pub const fn inner(&self) -> &T {
        &self.inner
    }

    /// Returns the inner [`TryCoreEvents`].
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: TryCoreEvents> CoreEvents for Contained<T> {
    fn on_transactions_relayed(&self, txs: &[TxBlob], method: RelayMethod) {
        if txs.is_empty() {
            return;
        }

        if let Err(e) = self.inner.try_on_transactions_relayed(txs, method) {
            self.failures.fetch_add(1, Ordering::Relaxed);
            tracing::warn!(txs = txs.len(), %method, "Error handling relayed transactions: {e}");
        }
    }
}
