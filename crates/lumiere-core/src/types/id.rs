//! Newtype wrappers around [`NonZeroU64`] for domain entity identifiers.
//!
//! Album and photo ids are positive integers assigned from monotonic
//! counters. Distinct types prevent passing a `PhotoId` where an
//! `AlbumId` is expected.

use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapper around `NonZeroU64`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub NonZeroU64);

        impl $name {
            /// Create an identifier, returning `None` for zero.
            pub fn new(value: u64) -> Option<Self> {
                NonZeroU64::new(value).map(Self)
            }

            /// Return the raw integer value.
            pub fn get(self) -> u64 {
                self.0.get()
            }

            /// The identifier following this one.
            pub fn next(self) -> Option<Self> {
                self.0.checked_add(1).map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<NonZeroU64>().map(Self)
            }
        }

        impl From<NonZeroU64> for $name {
            fn from(value: NonZeroU64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> u64 {
                id.get()
            }
        }
    };
}

define_id!(
    /// Unique identifier for an album.
    AlbumId
);

define_id!(
    /// Unique identifier for a photo within the store.
    PhotoId
);
