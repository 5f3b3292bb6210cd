//! Scan filters for area-effect modules.

use rampart_core::KindFlags;
use rampart_core::module_data::AllegianceFlags;

use crate::object::Object;

/// Relationship between a scanning object's side and a target's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Allegiance {
    /// Same, non-empty side.
    Ally,
    /// Different, both non-neutral.
    Enemy,
    /// The target has no side.
    Neutral,
}

/// Classify a target side relative to the scanner's side.
pub fn allegiance_between(scanner_side: &str, target_side: &str) -> Allegiance {
    if target_side.is_empty() {
        Allegiance::Neutral
    } else if scanner_side.eq_ignore_ascii_case(target_side) {
        Allegiance::Ally
    } else {
        Allegiance::Enemy
    }
}

/// A composable predicate over candidate objects in an area scan.
/// Matching zero objects is a normal outcome, never an error.
#[derive(Debug, Clone, Copy)]
pub struct ScanFilter {
    /// Which allegiances pass, relative to the scanner's side.
    pub affects: AllegianceFlags,
    /// Reject dead objects.
    pub alive_only: bool,
    /// If non-empty, targets must share at least one kind bit.
    pub kind_mask: KindFlags,
}

impl ScanFilter {
    /// True if the target passes every predicate.
    pub fn matches(&self, scanner_side: &str, target: &Object) -> bool {
        if self.alive_only && !target.body.alive() {
            return false;
        }
        let allowed = match allegiance_between(scanner_side, &target.side) {
            Allegiance::Ally => self.affects.allies,
            Allegiance::Enemy => self.affects.enemies,
            Allegiance::Neutral => self.affects.neutrals,
        };
        if !allowed {
            return false;
        }
        self.kind_mask.is_empty() || target.kind_of.any_of(self.kind_mask)
    }
}
