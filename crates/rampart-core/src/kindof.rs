//! Kind-of classification flags.
//!
//! Every object template carries a small bitset describing what the object
//! fundamentally is (structure, infantry, vehicle, ...). Modules and scan
//! filters test against these rather than against template names.

use serde::{Deserialize, Serialize};

/// Names of the kind-of bits, in bit order. The INI bit-string converter
/// resolves authored names against this list.
pub const KINDOF_NAMES: &[&str] = &[
    "OBSTACLE",
    "SELECTABLE",
    "IMMOBILE",
    "CAN_ATTACK",
    "STRUCTURE",
    "INFANTRY",
    "VEHICLE",
    "AIRCRAFT",
    "HEALER",
    "PROJECTILE",
    "SALVAGER",
    "UNATTACKABLE",
];

/// A bitset over [`KINDOF_NAMES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KindFlags(pub u32);

impl KindFlags {
    /// The empty set.
    pub const NONE: KindFlags = KindFlags(0);

    /// Set the bit at `index`.
    pub fn set(&mut self, index: u32) {
        self.0 |= 1 << index;
    }

    /// Clear the bit at `index`.
    pub fn clear(&mut self, index: u32) {
        self.0 &= !(1 << index);
    }

    /// True if the bit at `index` is set.
    pub fn test(&self, index: u32) -> bool {
        self.0 & (1 << index) != 0
    }

    /// True if any bit of `mask` is also set in `self`.
    pub fn any_of(&self, mask: KindFlags) -> bool {
        self.0 & mask.0 != 0
    }

    /// True if no bits are set.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}
