#![doc = include_str!("../README.md")]

mod notification;
mod relay_method;

pub use notification::{OwnedRelayNotification, RelayNotification, TxBlob};
pub use relay_method::{RelayMethod, RelayMethodError};

#[cfg(test)]
mod test {
    use serde_json as _;
}
