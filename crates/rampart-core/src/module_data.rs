//! Shared per-template module configuration.
//!
//! Every behavior module attached to an object template has one immutable
//! data record, parsed once at load time and shared by all instances of that
//! template. Per-instance mutable state lives with the module instance in
//! the logic crate, never here.

use serde::{Deserialize, Serialize};

use crate::frames::Frame;
use crate::geometry::RgbColor;
use crate::id::FxListId;
use crate::kindof::KindFlags;

/// Which sides an area-effect module applies to, relative to the owning
/// object's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllegianceFlags {
    /// Apply to objects on the same side.
    pub allies: bool,
    /// Apply to objects on a different, non-neutral side.
    pub enemies: bool,
    /// Apply to objects with no side.
    pub neutrals: bool,
}

impl Default for AllegianceFlags {
    fn default() -> Self {
        Self {
            allies: true,
            enemies: false,
            neutrals: false,
        }
    }
}

/// Configuration shared by every update module. Embedded by each concrete
/// update-module data struct; the field-table composer contributes these
/// fields once, through an accessor, instead of repeating them per module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateModuleFields {
    /// Whether the module begins active or waits for an explicit wake.
    pub starts_active: bool,
}

impl Default for UpdateModuleFields {
    fn default() -> Self {
        Self { starts_active: true }
    }
}

/// Configuration for `AutoHealBehavior`: periodic healing of the owning
/// object, or of nearby objects when a radius is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoHealModuleData {
    /// Fields shared by all update modules.
    pub update: UpdateModuleFields,
    /// Health restored per pulse.
    pub healing_amount: f32,
    /// Frames between pulses.
    pub healing_delay: Frame,
    /// Frames to wait after taking damage before healing resumes.
    pub start_healing_delay: Frame,
    /// Scan radius in world units. Zero means the module heals only its
    /// owning object.
    pub radius: f32,
    /// Stop permanently after the first pulse that healed anything.
    pub single_burst: bool,
    /// Sides the area scan applies to.
    pub affects: AllegianceFlags,
    /// If non-empty, area targets must match at least one of these kinds.
    pub affects_kind_of: KindFlags,
    /// Effects list played while pulsing, owned by the module instance.
    pub pulse_fx: Option<FxListId>,
}

impl Default for AutoHealModuleData {
    fn default() -> Self {
        Self {
            update: UpdateModuleFields::default(),
            healing_amount: 0.0,
            healing_delay: 1,
            start_healing_delay: 0,
            radius: 0.0,
            single_burst: false,
            affects: AllegianceFlags::default(),
            affects_kind_of: KindFlags::NONE,
            pulse_fx: None,
        }
    }
}

/// Configuration for `LifetimeUpdate`: the owning object dies a random
/// number of frames after creation, drawn from the configured range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifetimeModuleData {
    /// Fields shared by all update modules.
    pub update: UpdateModuleFields,
    /// Minimum lifetime in frames.
    pub min_frames: Frame,
    /// Maximum lifetime in frames.
    pub max_frames: Frame,
}

impl Default for LifetimeModuleData {
    fn default() -> Self {
        Self {
            update: UpdateModuleFields::default(),
            min_frames: 1,
            max_frames: 1,
        }
    }
}

/// Configuration for `HealGlowDraw`: tints the drawable while its object
/// carries the recently-healed status. Requires an `AutoHealBehavior` on
/// the same template to set that status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealGlowDrawData {
    /// Tint applied while glowing.
    pub glow_color: RgbColor,
    /// Frames the glow persists after the last heal pulse.
    pub fade_frames: Frame,
}

impl Default for HealGlowDrawData {
    fn default() -> Self {
        Self {
            glow_color: RgbColor::from_bytes(0, 255, 0),
            fade_frames: 30,
        }
    }
}

/// The parsed, immutable configuration of one module attached to a
/// template. A tagged union rather than a trait object so templates stay
/// plain data that can be cloned, compared, and serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ModuleData {
    /// Periodic self or area healing.
    AutoHeal(AutoHealModuleData),
    /// Timed self-destruction.
    Lifetime(LifetimeModuleData),
    /// Client-side heal glow tint.
    HealGlowDraw(HealGlowDrawData),
}

impl ModuleData {
    /// The module type name as it appears in configuration files.
    pub fn module_name(&self) -> &'static str {
        match self {
            ModuleData::AutoHeal(_) => "AutoHealBehavior",
            ModuleData::Lifetime(_) => "LifetimeUpdate",
            ModuleData::HealGlowDraw(_) => "HealGlowDraw",
        }
    }

    /// True for client-side draw modules, false for logic-side behaviors.
    pub fn is_draw_module(&self) -> bool {
        matches!(self, ModuleData::HealGlowDraw(_))
    }

    /// Module type names that must also be present on the template.
    /// Composition is validated when an object is constructed; a missing
    /// companion is a fatal configuration-integrity error.
    pub fn required_modules(&self) -> &'static [&'static str] {
        match self {
            ModuleData::HealGlowDraw(_) => &["AutoHealBehavior"],
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_inert() {
        let data = AutoHealModuleData::default();
        assert!(data.update.starts_active);
        assert_eq!(data.radius, 0.0);
        assert!(data.affects.allies);
        assert!(!data.affects.enemies);
    }

    #[test]
    fn heal_glow_requires_auto_heal() {
        let data = ModuleData::HealGlowDraw(HealGlowDrawData::default());
        assert_eq!(data.required_modules(), ["AutoHealBehavior"]);
        assert!(data.is_draw_module());
    }

    #[test]
    fn module_names_match_config_keywords() {
        let data = ModuleData::Lifetime(LifetimeModuleData::default());
        assert_eq!(data.module_name(), "LifetimeUpdate");
        assert!(!data.is_draw_module());
        assert!(data.required_modules().is_empty());
    }
}
