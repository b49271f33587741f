//! Errors that can happen while handling a relay notification.
//!
//! None of these ever reach the relay side, see [`Contained`](crate::Contained).

/// An error handling a relay notification.
#[derive(Debug, thiserror::Error)]
pub enum CoreEventsError {
    /// The notification queue was full.
    #[error("The relay notification queue is full.")]
    QueueFull,
    /// The task handling queued notifications has stopped.
    #[error("The relay notification queue is closed.")]
    QueueClosed,
    /// The implementer failed to process the notification.
    #[error("Failed to process relay notification: {0}")]
    Processing(tower::BoxError),
}
