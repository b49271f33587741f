//! # Notify Relayed
//!
//! A [`tower::Layer`] for the relay side. [`NotifyRelayed`] wraps the service that actually
//! relays transactions and, once that service returns [`Ok`], tells the core with
//! [`CoreEvents::on_transactions_relayed`].
//!
//! If the inner service fails nothing was relayed, so nothing is notified.
use std::task::{Context, Poll};

use futures::{future::BoxFuture, FutureExt, TryFutureExt};
use tower::{Layer, Service};

use cuprate_relay_types::{RelayMethod, RelayNotification, TxBlob};

use crate::CoreEvents;

/// A request to relay a batch of transactions with a [`RelayMethod`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayRequest {
    /// The raw transactions.
    pub txs: Vec<TxBlob>,
    /// How to relay them.
    pub method: RelayMethod,
}

impl RelayRequest {
    /// Borrows this request as a [`RelayNotification`].
    pub fn as_notification(&self) -> RelayNotification<'_> {
        RelayNotification::new(&self.txs, self.method)
    }
}

/// A [`Layer`] that produces [`NotifyRelayed`] services.
#[derive(Debug, Clone)]
pub struct NotifyRelayedLayer<E> {
    events: E,
}

impl<E> NotifyRelayedLayer<E> {
    /// Creates a new [`NotifyRelayedLayer`], notifying `events`.
    pub const fn new(events: E) -> Self {
        Self { events }
    }
}

impl<S, E: Clone> Layer<S> for NotifyRelayedLayer<E> {
    type Service = NotifyRelayed<S, E>;

    fn layer(&self, inner: S) -> Self::Service {
        NotifyRelayed {
            inner,
            events: self.events.clone(),
        }
    }
}

/// A relay [`Service`] that notifies a [`CoreEvents`] after successful relays.
#[derive(Debug, Clone)]
pub struct NotifyRelayed<S, E> {
    /// The service doing the relaying.
    inner: S,
    /// Who to tell.
    events: E,
}

impl<S, E> NotifyRelayed<S, E> {
    /// Creates a new [`NotifyRelayed`].
    pub const fn new(inner: S, events: E) -> Self {
        Self { inner, events }
    }

    /// Returns a reference to the [`CoreEvents`] being notified.
    pub const fn events(&self) -> &E {
        &self.events
    }
}

impl<S, E> Service<RelayRequest> for NotifyRelayed<S, E>
where
    S: Service<RelayRequest>,
    S::Future: Send + 'static,
    E: CoreEvents + Clone + Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<S::Response, S::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: RelayRequest) -> Self::Future {
        // Cloning the blob handles, not the bytes.
        let notification = req.as_notification().into_owned();
        let events = self.events.clone();

        self.inner
            .call(req)
            .map_ok(move |res| {
                events.notify(notification.as_notification());
                res
            })
            .boxed()
    }
}
