#![doc = include_str!("../README.md")]

#[cfg(feature = "queue")]
mod config;
mod contained;
mod counters;
mod error;
mod events;
mod fan_out;
#[cfg(feature = "queue")]
mod queue;
mod recorder;
mod relay;
mod trace;

#[cfg(feature = "queue")]
pub use config::{QueueConfig, DEFAULT_QUEUE_CAPACITY};
pub use contained::{Contained, TryCoreEvents};
pub use counters::RelayCounters;
pub use error::CoreEventsError;
pub use events::{core_events_fn, CoreEvents, CoreEventsFn};
pub use fan_out::{FanOut, SharedCoreEvents};
#[cfg(feature = "queue")]
pub use queue::{spawn_queued_events, QueuedEvents};
pub use recorder::RecordingEvents;
pub use relay::{NotifyRelayed, NotifyRelayedLayer, RelayRequest};
pub use trace::TracingEvents;

pub use cuprate_relay_types::{
    OwnedRelayNotification, RelayMethod, RelayMethodError, RelayNotification, TxBlob,
};
