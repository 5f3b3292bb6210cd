//! The module system: traits, the update context, and the factory that
//! instantiates modules from template data.
//!
//! Modules run to completion synchronously, one at a time. The running
//! module is moved out of its owner (and the owner out of the object map),
//! so the context can hand the module mutable access to its owner and to
//! every other object without aliasing.

use std::collections::BTreeMap;

use rampart_core::xfer::Snapshot;
use rampart_core::{Catalog, FOREVER, Frame, ModuleData, ObjectId, ObjectTemplate};

use crate::auto_heal::AutoHealBehavior;
use crate::error::{LogicError, LogicResult};
use crate::event::EventLog;
use crate::heal_glow::HealGlowDraw;
use crate::lifetime::LifetimeUpdate;
use crate::object::Object;
use crate::random::LogicRandom;

/// How long an update module sleeps after running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleepTime {
    /// Run again on the next frame.
    NextFrame,
    /// Run again after this many frames. Zero is treated as one; a module
    /// cannot run twice in a frame.
    Frames(Frame),
    /// Never run again until something external wakes it.
    Forever,
}

impl SleepTime {
    /// The absolute wake frame this sleep resolves to.
    pub fn wake_frame(self, now: Frame) -> Frame {
        match self {
            SleepTime::NextFrame => now.saturating_add(1),
            SleepTime::Frames(frames) => now.saturating_add(frames.max(1)),
            SleepTime::Forever => FOREVER,
        }
    }
}

/// External signals a module wants to be woken for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModuleInterest(pub u32);

impl ModuleInterest {
    /// No external interests.
    pub const NONE: ModuleInterest = ModuleInterest(0);
    /// Wake when the owning object takes damage.
    pub const DAMAGE: ModuleInterest = ModuleInterest(1);

    /// True if any interest bit is shared with `other`.
    pub fn contains(self, other: ModuleInterest) -> bool {
        self.0 & other.0 != 0
    }
}

/// Everything a running module may touch. The owner is held apart from the
/// object map, which holds every *other* live object.
pub struct UpdateContext<'a> {
    /// The current frame.
    pub frame: Frame,
    /// The module's owning object.
    pub owner: &'a mut Object,
    /// Every other live object.
    pub others: &'a mut BTreeMap<ObjectId, Object>,
    /// The immutable template catalog.
    pub catalog: &'a Catalog,
    /// The event log.
    pub events: &'a mut EventLog,
    /// The deterministic RNG.
    pub rng: &'a mut LogicRandom,
}

/// Behavior common to logic and draw modules.
pub trait Module: Snapshot {
    /// The module type name, matching the configuration keyword.
    fn name(&self) -> &'static str;

    /// The authored tag distinguishing this instance on its template.
    fn tag(&self) -> &str;

    /// External signals this module wants wakes for.
    fn interest(&self) -> ModuleInterest {
        ModuleInterest::NONE
    }

    /// Notification that the owner took damage. Runs before the
    /// damage-interest wake, so the module can arm itself.
    fn on_damage(&mut self) {}

    /// Release transient resources (running effects, handles) before the
    /// owner is destroyed.
    fn on_delete(&mut self, _ctx: &mut UpdateContext<'_>) {}
}

/// A logic-side module driven by the sleep scheduler.
pub trait UpdateModule: Module {
    /// Run once, then report how long to sleep.
    fn update(&mut self, ctx: &mut UpdateContext<'_>) -> SleepTime;

    /// Upper bound for the construction-time random phase offset. Modules
    /// with a natural period return it so same-template objects spawned
    /// together don't all pulse on the same frame.
    fn initial_delay(&self) -> Frame {
        0
    }

    /// False if the module waits for an external wake before its first run.
    fn starts_active(&self) -> bool {
        true
    }
}

/// A client-side module run against its owner after every logic frame.
pub trait DrawModule: Module {
    /// Update the owner's drawable state.
    fn draw(&mut self, owner: &mut Object, frame: Frame);
}

impl std::fmt::Debug for dyn UpdateModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "UpdateModule({} {:?})", self.name(), self.tag())
    }
}

impl std::fmt::Debug for dyn DrawModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DrawModule({} {:?})", self.name(), self.tag())
    }
}

/// Instantiate every module slot on a template, validating companion
/// requirements first. A missing companion is fatal: the configuration
/// promises behavior the object cannot deliver.
pub fn create_modules(
    template: &ObjectTemplate,
) -> LogicResult<(Vec<Box<dyn UpdateModule>>, Vec<Box<dyn DrawModule>>)> {
    for slot in &template.modules {
        for companion in slot.data.required_modules() {
            if !template.has_module(companion) {
                return Err(LogicError::MissingCompanionModule {
                    template: template.name.clone(),
                    module: slot.data.module_name(),
                    companion,
                });
            }
        }
    }
    let mut updates: Vec<Box<dyn UpdateModule>> = Vec::new();
    let mut draws: Vec<Box<dyn DrawModule>> = Vec::new();
    for slot in &template.modules {
        match &slot.data {
            ModuleData::AutoHeal(data) => {
                updates.push(Box::new(AutoHealBehavior::new(slot.tag.clone(), data.clone())));
            }
            ModuleData::Lifetime(data) => {
                updates.push(Box::new(LifetimeUpdate::new(slot.tag.clone(), data.clone())));
            }
            ModuleData::HealGlowDraw(data) => {
                draws.push(Box::new(HealGlowDraw::new(slot.tag.clone(), data.clone())));
            }
        }
    }
    Ok((updates, draws))
}

/// Placeholder standing in for a module while it runs against the full
/// context.
pub(crate) struct NoopModule;

impl Snapshot for NoopModule {
    fn xfer(&mut self, _xfer: &mut dyn rampart_core::Xfer) -> rampart_core::XferResult<()> {
        Ok(())
    }
}

impl Module for NoopModule {
    fn name(&self) -> &'static str {
        "noop"
    }

    fn tag(&self) -> &str {
        ""
    }
}

impl UpdateModule for NoopModule {
    fn update(&mut self, _ctx: &mut UpdateContext<'_>) -> SleepTime {
        SleepTime::Forever
    }
}
