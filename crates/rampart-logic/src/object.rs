//! Live simulation objects.
//!
//! An [`Object`] is one instance of an object template: scalar state (body,
//! status, position), a client-side [`Drawable`], and the module instances
//! built from the template's module slots. Template configuration is never
//! duplicated here beyond what modules copy for themselves.

use rampart_core::xfer::{Snapshot, Xfer, XferMode, XferResult};
use rampart_core::{Coord3D, FOREVER, Frame, KindFlags, ObjectId, ObjectTemplateId, RgbColor};

use crate::module::{DrawModule, UpdateModule};

/// Per-object status bits, set by logic modules and read by the client
/// side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ObjectStatus(pub u32);

impl ObjectStatus {
    /// The object received healing recently; draw modules may glow.
    pub const RECENTLY_HEALED: ObjectStatus = ObjectStatus(1);

    /// Set the given bits.
    pub fn set(&mut self, bits: ObjectStatus) {
        self.0 |= bits.0;
    }

    /// Clear the given bits.
    pub fn clear(&mut self, bits: ObjectStatus) {
        self.0 &= !bits.0;
    }

    /// True if any of the given bits are set.
    pub fn test(&self, bits: ObjectStatus) -> bool {
        self.0 & bits.0 != 0
    }
}

/// Health state of one object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    /// Health ceiling, from the template.
    pub max_health: f32,
    /// Current health.
    pub health: f32,
    /// Frame of the most recent damage, if any.
    pub last_damage_frame: Option<Frame>,
}

impl BodyState {
    /// Create a body at full health.
    pub fn new(max_health: f32) -> Self {
        Self {
            max_health,
            health: max_health,
            last_damage_frame: None,
        }
    }

    /// True while health remains.
    pub fn alive(&self) -> bool {
        self.health > 0.0
    }

    /// True at the health ceiling.
    pub fn at_full_health(&self) -> bool {
        self.health >= self.max_health
    }

    /// Apply damage, clamped at zero. Returns the health actually lost.
    pub fn damage(&mut self, amount: f32, frame: Frame) -> f32 {
        let applied = amount.min(self.health).max(0.0);
        self.health -= applied;
        self.last_damage_frame = Some(frame);
        applied
    }

    /// Apply healing, clamped at the ceiling. Returns the health actually
    /// restored.
    pub fn heal(&mut self, amount: f32) -> f32 {
        let applied = amount.min(self.max_health - self.health).max(0.0);
        self.health += applied;
        applied
    }
}

/// Client-side render state. The logic core only writes it; a renderer
/// would consume it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Drawable {
    /// Tint currently applied by draw modules, if any.
    pub tint: Option<RgbColor>,
}

/// One live object in the simulation.
pub struct Object {
    /// This object's id, unique for the life of the game.
    pub id: ObjectId,
    /// The template this object was built from.
    pub template: ObjectTemplateId,
    /// The template's name, kept for save records and event text.
    pub template_name: String,
    /// Owning side, copied from the template. Empty means neutral.
    pub side: String,
    /// Classification flags, copied from the template.
    pub kind_of: KindFlags,
    /// World position.
    pub position: Coord3D,
    /// Health state.
    pub body: BodyState,
    /// Status bits.
    pub status: ObjectStatus,
    /// Client-side render state.
    pub drawable: Drawable,
    /// Logic-side modules, in template slot order.
    pub update_modules: Vec<Box<dyn UpdateModule>>,
    /// Client-side modules, in template slot order.
    pub draw_modules: Vec<Box<dyn DrawModule>>,
}

impl std::fmt::Debug for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Object")
            .field("id", &self.id)
            .field("template", &self.template_name)
            .field("health", &self.body.health)
            .field("modules", &(self.update_modules.len() + self.draw_modules.len()))
            .finish()
    }
}

const OBJECT_XFER_VERSION: u8 = 1;

impl Snapshot for Object {
    fn xfer(&mut self, xfer: &mut dyn Xfer) -> XferResult<()> {
        let mut version = OBJECT_XFER_VERSION;
        xfer.xfer_version(&mut version, OBJECT_XFER_VERSION)?;
        xfer.xfer_f32(&mut self.position.x)?;
        xfer.xfer_f32(&mut self.position.y)?;
        xfer.xfer_f32(&mut self.position.z)?;
        xfer.xfer_f32(&mut self.body.max_health)?;
        xfer.xfer_f32(&mut self.body.health)?;
        // Option<Frame> with FOREVER standing in for "never damaged".
        let mut last_damage = self.body.last_damage_frame.unwrap_or(FOREVER);
        xfer.xfer_frame(&mut last_damage)?;
        if xfer.mode() == XferMode::Load {
            self.body.last_damage_frame = (last_damage != FOREVER).then_some(last_damage);
        }
        xfer.xfer_u32(&mut self.status.0)?;
        // Module records follow in slot order; each carries its own
        // version byte.
        for module in &mut self.update_modules {
            module.xfer(xfer)?;
        }
        for module in &mut self.draw_modules {
            module.xfer(xfer)?;
        }
        Ok(())
    }
}
