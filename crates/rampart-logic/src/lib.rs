//! The Rampart simulation core.
//!
//! [`GameLogic`] owns the live object set and steps it one fixed-rate frame
//! at a time. Behavior comes from modules instantiated per object from
//! template configuration: update modules run on the sleep scheduler, draw
//! modules run against their owner after every frame. Everything is
//! deterministic by construction — all randomness flows through one seeded
//! generator, and the full state participates in versioned save/load and
//! the desync CRC.

/// The `AutoHealBehavior` update module.
pub mod auto_heal;
/// Simulation error types.
pub mod error;
/// The simulation event log.
pub mod event;
/// Allegiance classification and area-scan filters.
pub mod filter;
/// The `HealGlowDraw` draw module.
pub mod heal_glow;
/// The `LifetimeUpdate` update module.
pub mod lifetime;
/// The game logic orchestrator.
pub mod logic;
/// Module traits, the update context, and the module factory.
pub mod module;
/// Live objects and their scalar state.
pub mod object;
/// The deterministic, draw-counted simulation RNG.
pub mod random;
/// Sleep/wake scheduling for update modules.
pub mod scheduler;

/// Re-export of the auto-heal module.
pub use auto_heal::AutoHealBehavior;
/// Re-export of the error types.
pub use error::{LogicError, LogicResult};
/// Re-export of the event log types.
pub use event::{Event, EventKind, EventLog};
/// Re-export of the scan-filter types.
pub use filter::{Allegiance, ScanFilter, allegiance_between};
/// Re-export of the heal-glow module.
pub use heal_glow::HealGlowDraw;
/// Re-export of the lifetime module.
pub use lifetime::LifetimeUpdate;
/// Re-export of the orchestrator.
pub use logic::GameLogic;
/// Re-export of the module traits and context.
pub use module::{
    DrawModule, Module, ModuleInterest, SleepTime, UpdateContext, UpdateModule, create_modules,
};
/// Re-export of the live-object types.
pub use object::{BodyState, Drawable, Object, ObjectStatus};
/// Re-export of the simulation RNG.
pub use random::LogicRandom;
/// Re-export of the scheduler types.
pub use scheduler::{ModuleKey, Scheduler};
