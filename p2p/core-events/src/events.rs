//! The [`CoreEvents`] trait.
use std::sync::Arc;

use cuprate_relay_types::{RelayMethod, RelayNotification, TxBlob};

/// Something that can be told about transactions being relayed.
///
/// This is implemented by the core controller and called by whatever relays transactions,
/// the relay side should only ever depend on this trait.
///
/// # Contract
///
/// - `txs` can be empty, implementers should treat that as a no-op.
/// - The call is synchronous, by the time it returns the notification must be handled.
///   Implementers with heavy processing should queue it internally and return (see `QueuedEvents`),
///   but must not claim work is done before it is.
/// - Every tx must be handled exactly once, in the order given.
///   The one exception is `QueuedEvents`: when its queue is full or closed the whole
///   notification is lost and only counted in `QueuedEvents::dropped`.
/// - This can not fail. Relay has already happened, so any error while handling the
///   notification must be dealt with by the implementer (see [`Contained`](crate::Contained)).
/// - This takes `&self` and may be called from any thread, implementers are responsible for
///   their own synchronisation. No ordering is guaranteed between concurrent callers.
pub trait CoreEvents {
    /// Called when `txs` have been relayed with `method`.
    ///
    /// `txs` is borrowed only for the length of this call.
    fn on_transactions_relayed(&self, txs: &[TxBlob], method: RelayMethod);

    /// Same as [`CoreEvents::on_transactions_relayed`] but takes a [`RelayNotification`].
    fn notify(&self, notification: RelayNotification<'_>) {
        self.on_transactions_relayed(notification.txs, notification.method);
    }
}

impl<T: CoreEvents + ?Sized> CoreEvents for &T {
    fn on_transactions_relayed(&self, txs: &[TxBlob], method: RelayMethod) {
        (**self).on_transactions_relayed(txs, method);
    }
}

impl<T: CoreEvents + ?Sized> CoreEvents for Box<T> {
    fn on_transactions_relayed(&self, txs: &[TxBlob], method: RelayMethod) {
        (**self).on_transactions_relayed(txs, method);
    }
}

impl<T: CoreEvents + ?Sized> CoreEvents for Arc<T> {
    fn on_transactions_relayed(&self, txs: &[TxBlob], method: RelayMethod) {
        (**self).on_transactions_relayed(txs, method);
    }
}

/// A [`CoreEvents`] made from a closure, see [`core_events_fn`].
#[derive(Debug, Clone, Copy)]
pub struct CoreEventsFn<F> {
    f: F,
}

/// Returns a [`CoreEvents`] that calls `f` for every non-empty batch.
///
/// ```rust
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// use bytes::Bytes;
/// use cuprate_core_events::{core_events_fn, CoreEvents};
/// use cuprate_relay_types::RelayMethod;
///
/// let seen = AtomicUsize::new(0);
/// let events = core_events_fn(|txs, _method| {
///     seen.fetch_add(txs.len(), Ordering::Relaxed);
/// });
///
/// events.on_transactions_relayed(&[Bytes::from_static(b"a"), Bytes::from_static(b"b")], RelayMethod::Flood);
/// events.on_transactions_relayed(&[], RelayMethod::Flood);
///
/// assert_eq!(seen.load(Ordering::Relaxed), 2);
/// ```
pub const fn core_events_fn<F>(f: F) -> CoreEventsFn<F>
where
    F: Fn(&[TxBlob], RelayMethod),
{
    CoreEventsFn { f }
}

impl<F> CoreEvents for CoreEventsFn<F>
where
    F: Fn(&[TxBlob], RelayMethod),
{
    fn on_transactions_relayed(&self, txs: &[TxBlob], method: RelayMethod) {
        if txs.is_empty() {
            return;
        }

        (self.f)(txs, method);
    }
}
