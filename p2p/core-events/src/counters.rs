//! Relay counters.
use std::sync::atomic::{AtomicU64, Ordering};

use strum::EnumCount;

use cuprate_relay_types::{RelayMethod, TxBlob};

use crate::CoreEvents;

/// A metrics only [`CoreEvents`], counting batches and transactions for each [`RelayMethod`].
#[derive(Debug, Default)]
pub struct RelayCounters {
    batches: [AtomicU64; RelayMethod::COUNT],
    txs: [AtomicU64; RelayMethod::COUNT],
}

impl RelayCounters {
    /// Creates zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the amount of non-empty batches relayed with `method`.
    pub fn batches(&self, method: RelayMethod) -> u64 {
        self.batches[index(method)].load(Ordering::Relaxed)
    }

    /// Returns the amount of transactions relayed with `method`.
    pub fn txs(&self, method: RelayMethod) -> u64 {
        self.txs[index(method)].load(Ordering::Relaxed)
    }

    /// Returns the amount of transactions relayed with any [`RelayMethod`].
    pub fn total_txs(&self) -> u64 {
        self.txs.iter().map(|c| c.load(Ordering::Relaxed)).sum()
    }
}

/// The counter index of a [`RelayMethod`].
fn index(method: RelayMethod) -> usize {
    usize::from(method.as_u8())
}

impl CoreEvents for RelayCounters {
    fn on_transactions_relayed(&self, txs: &[TxBlob], method: RelayMethod) {
        if txs.is_empty() {
            return;
        }

        let i = index(method);
        self.batches[i].fetch_add(1, Ordering::Relaxed);
        self.txs[i].fetch_add(
            u64::try_from(txs.len()).unwrap_or(u64::MAX),
            Ordering::Relaxed,
        );
    }
}
