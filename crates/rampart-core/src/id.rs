//! Identifier newtypes.
//!
//! Ids are sequential integers, not random — the wider engine requires
//! deterministic replay, so anything that feeds the state CRC must come out
//! identical on every peer.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(
    /// Identifier of a live simulation object.
    ObjectId
);
id_newtype!(
    /// Identifier of an entry in the object template store.
    ObjectTemplateId
);
id_newtype!(
    /// Identifier of an entry in the weapon template store.
    WeaponTemplateId
);
id_newtype!(
    /// Identifier of an entry in the armor template store.
    ArmorTemplateId
);
id_newtype!(
    /// Identifier of an entry in the effects-list store.
    FxListId
);
