//! Entity templates: the named, registry-owned records that configuration
//! files populate.
//!
//! Templates are plain data. Cross-references between them are stored as
//! resolved ids into the owning [`crate::Catalog`], or `None` where the
//! configuration explicitly said `None`.

use serde::{Deserialize, Serialize};

use crate::frames::Frame;
use crate::geometry::RgbColor;
use crate::id::{ArmorTemplateId, FxListId, ObjectTemplateId, WeaponTemplateId};
use crate::kindof::KindFlags;
use crate::module_data::ModuleData;

/// Damage type names, in index order. Weapon damage types and armor
/// coefficients are both keyed by position in this list.
pub const DAMAGE_NAMES: &[&str] = &[
    "EXPLOSION",
    "CRUSH",
    "ARMOR_PIERCING",
    "SMALL_ARMS",
    "FLAME",
    "POISON",
    "LASER",
    "HEALING",
];

/// A named template that can live in a [`crate::TemplateStore`].
pub trait Template: Default {
    /// The typed id handed out for entries of this template kind.
    type Id: Copy + Eq + std::fmt::Debug;

    /// Wrap a raw store index in the typed id.
    fn make_id(raw: u32) -> Self::Id;

    /// Unwrap the typed id back to the raw store index.
    fn raw_id(id: Self::Id) -> u32;

    /// The template's name as declared in its block header.
    fn name(&self) -> &str;

    /// Set the template's name. Called once when a block is opened.
    fn set_name(&mut self, name: &str);
}

macro_rules! impl_template {
    ($ty:ident, $id:ident) => {
        impl Template for $ty {
            type Id = $id;

            fn make_id(raw: u32) -> $id {
                $id(raw)
            }

            fn raw_id(id: $id) -> u32 {
                id.0
            }

            fn name(&self) -> &str {
                &self.name
            }

            fn set_name(&mut self, name: &str) {
                self.name = name.to_string();
            }
        }
    };
}

/// One module attached to an object template: the authored tag plus the
/// parsed configuration shared by every instance of the template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleSlot {
    /// The authored module tag (e.g. `ModuleTag_01`). Tags distinguish
    /// multiple modules of the same type and key saved module records.
    pub tag: String,
    /// The parsed module configuration.
    pub data: ModuleData,
}

/// Template for a simulation object: unit, structure, projectile, crate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ObjectTemplate {
    /// Template name from the block header.
    pub name: String,
    /// Owning side name. Empty means neutral.
    pub side: String,
    /// Health the object spawns with.
    pub max_health: f32,
    /// Armor reference, or `None`.
    pub armor: Option<ArmorTemplateId>,
    /// Primary weapon reference, or `None`.
    pub weapon: Option<WeaponTemplateId>,
    /// Effects list played on death, or `None`.
    pub death_fx: Option<FxListId>,
    /// Classification flags.
    pub kind_of: KindFlags,
    /// Vision range in world units.
    pub vision_range: f32,
    /// Color used for map and selection display.
    pub display_color: RgbColor,
    /// Attached modules, in declaration order.
    pub modules: Vec<ModuleSlot>,
}

impl ObjectTemplate {
    /// Find the first module slot whose type name matches, case-insensitive.
    pub fn find_module(&self, module_name: &str) -> Option<&ModuleSlot> {
        self.modules
            .iter()
            .find(|slot| slot.data.module_name().eq_ignore_ascii_case(module_name))
    }

    /// True if a module of the given type is attached.
    pub fn has_module(&self, module_name: &str) -> bool {
        self.find_module(module_name).is_some()
    }
}

impl_template!(ObjectTemplate, ObjectTemplateId);

/// Template for a weapon.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WeaponTemplate {
    /// Template name from the block header.
    pub name: String,
    /// Damage dealt per shot.
    pub primary_damage: f32,
    /// Damage falloff radius in world units. Zero means single target.
    pub primary_damage_radius: f32,
    /// Maximum firing range in world units.
    pub attack_range: f32,
    /// Frames between shots, converted from authored milliseconds.
    pub delay_between_shots: Frame,
    /// Index into [`DAMAGE_NAMES`].
    pub damage_type: u32,
    /// Projectile speed in world units per frame, converted from authored
    /// units per second.
    pub projectile_speed: f32,
    /// Effects list played when firing, or `None`.
    pub fire_fx: Option<FxListId>,
}

impl_template!(WeaponTemplate, WeaponTemplateId);

/// Template for an armor set: one damage coefficient per damage type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmorTemplate {
    /// Template name from the block header.
    pub name: String,
    /// Damage multiplier per damage type, indexed like [`DAMAGE_NAMES`].
    /// 1.0 passes damage through unchanged.
    pub coefficients: Vec<f32>,
}

impl Default for ArmorTemplate {
    fn default() -> Self {
        Self {
            name: String::new(),
            coefficients: vec![1.0; DAMAGE_NAMES.len()],
        }
    }
}

impl ArmorTemplate {
    /// The damage multiplier for a damage type index. Out-of-range indices
    /// pass through unchanged.
    pub fn coefficient(&self, damage_type: u32) -> f32 {
        self.coefficients
            .get(damage_type as usize)
            .copied()
            .unwrap_or(1.0)
    }
}

impl_template!(ArmorTemplate, ArmorTemplateId);

/// A named effects list: opaque names handed to the renderer and audio
/// facades. The logic core never interprets the contents.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FxList {
    /// Template name from the block header.
    pub name: String,
    /// Sound event name, possibly quoted in the source file.
    pub sound: String,
    /// Particle system names.
    pub particle_systems: Vec<String>,
    /// Optional tint applied while the effect runs.
    pub tint: Option<RgbColor>,
}

impl_template!(FxList, FxListId);
