//! Strongly typed, zero-cost identifier wrappers.
//!
//! Each agent population (vehicles, pedestrians, roamers) is stored in a
//! plain `Vec` and identified by its index.  Wrapping the index in a typed
//! ID keeps the three populations from being confused in output rows and
//! error messages.  The inner integer is `pub` for direct indexing; prefer
//! the `.index()` helper for clarity.

use std::fmt;

/// Generate a typed ID wrapper around a `u32` index.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }
    };
}

typed_id! {
    /// Index of a vehicle in the vehicle store.
    pub struct VehicleId;
}

typed_id! {
    /// Index of a pedestrian in the pedestrian store.
    pub struct PedestrianId;
}

typed_id! {
    /// Index of a roaming agent in the roamer store.
    pub struct RoamerId;
}
