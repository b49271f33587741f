//! The [`RelayMethod`] type.
use std::str::FromStr;

use strum::{AsRefStr, Display, EnumCount, EnumIs, FromRepr, IntoStaticStr, VariantArray};

/// An error working with a [`RelayMethod`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RelayMethodError {
    /// The raw value is not a valid [`RelayMethod`].
    #[error("Unknown relay method value: {0}")]
    UnknownValue(u8),
    /// The name is not a valid [`RelayMethod`].
    #[error("Unknown relay method name: {0}")]
    UnknownName(String),
}

/// How a transaction entered (or did not enter) network propagation.
///
/// This value crosses process and wire boundaries, the `u8` backing of
/// every variant is fixed and must never be re-ordered.
#[derive(
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Copy,
    Clone,
    Hash,
    EnumCount,
    Display,
    AsRefStr,
    EnumIs,
    FromRepr,
    IntoStaticStr,
    VariantArray,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "proptest", derive(proptest_derive::Arbitrary))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
#[repr(u8)]
pub enum RelayMethod {
    /// Known to us, but not relayed and not to be relayed to peers.
    None = 0,
    /// Created by this node's own user and broadcast by us.
    Local = 1,
    /// Seen because it was included in a block we accepted.
    Block = 2,
    /// Propagated to peers with the usual flood-fill gossip.
    Flood = 3,
}

impl RelayMethod {
    /// Returns the [`RelayMethod`] for a raw `u8`.
    ///
    /// # Errors
    /// Will return [`Err`] if `value` is not a valid [`RelayMethod`].
    ///
    /// ```rust
    /// # use cuprate_relay_types::{RelayMethod, RelayMethodError};
    /// assert_eq!(RelayMethod::from_u8(0), Ok(RelayMethod::None));
    /// assert_eq!(RelayMethod::from_u8(3), Ok(RelayMethod::Flood));
    /// assert_eq!(RelayMethod::from_u8(4), Err(RelayMethodError::UnknownValue(4)));
    /// ```
    #[inline]
    pub const fn from_u8(value: u8) -> Result<Self, RelayMethodError> {
        match Self::from_repr(value) {
            Some(this) => Ok(this),
            None => Err(RelayMethodError::UnknownValue(value)),
        }
    }

    /// Returns the raw `u8` of this [`RelayMethod`].
    ///
    /// ```rust
    /// # use cuprate_relay_types::RelayMethod;
    /// assert_eq!(RelayMethod::None.as_u8(), 0);
    /// assert_eq!(RelayMethod::Local.as_u8(), 1);
    /// assert_eq!(RelayMethod::Block.as_u8(), 2);
    /// assert_eq!(RelayMethod::Flood.as_u8(), 3);
    /// ```
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns [`true`] if this method pushes the transaction out to peers.
    ///
    /// [`RelayMethod::Block`] txs were already public through the block and
    /// [`RelayMethod::None`] txs are never sent, so both return [`false`].
    ///
    /// ```rust
    /// # use cuprate_relay_types::RelayMethod;
    /// assert!(RelayMethod::Local.is_gossip());
    /// assert!(RelayMethod::Flood.is_gossip());
    /// assert!(!RelayMethod::Block.is_gossip());
    /// assert!(!RelayMethod::None.is_gossip());
    /// ```
    #[inline]
    pub const fn is_gossip(self) -> bool {
        matches!(self, Self::Local | Self::Flood)
    }
}

impl TryFrom<u8> for RelayMethod {
    type Error = RelayMethodError;

    #[inline]
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value)
    }
}

impl From<RelayMethod> for u8 {
    #[inline]
    fn from(value: RelayMethod) -> Self {
        value.as_u8()
    }
}

impl FromStr for RelayMethod {
    type Err = RelayMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowercase = s.to_lowercase();

        Self::VARIANTS
            .iter()
            .copied()
            .find(|method| method.as_ref() == lowercase)
            .ok_or_else(|| RelayMethodError::UnknownName(s.to_string()))
    }
}
