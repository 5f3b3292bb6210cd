//! `LifetimeUpdate`: the owning object dies a random number of frames
//! after creation.

use rampart_core::Frame;
use rampart_core::module_data::LifetimeModuleData;
use rampart_core::xfer::{Snapshot, Xfer, XferResult};

use crate::module::{Module, SleepTime, UpdateContext, UpdateModule};

const LIFETIME_XFER_VERSION: u8 = 1;

/// Sleeps until a death frame drawn from the configured range, then
/// depletes the owner's health. Destruction itself happens in the
/// orchestrator's death sweep.
pub struct LifetimeUpdate {
    tag: String,
    data: LifetimeModuleData,
    /// Chosen on first update; zero means not chosen yet.
    death_frame: Frame,
}

impl LifetimeUpdate {
    /// Build from the shared template configuration.
    pub fn new(tag: String, data: LifetimeModuleData) -> Self {
        Self {
            tag,
            data,
            death_frame: 0,
        }
    }

    /// The frame this object dies on, once chosen.
    pub fn death_frame(&self) -> Option<Frame> {
        (self.death_frame != 0).then_some(self.death_frame)
    }
}

impl Snapshot for LifetimeUpdate {
    fn xfer(&mut self, xfer: &mut dyn Xfer) -> XferResult<()> {
        let mut version = LIFETIME_XFER_VERSION;
        xfer.xfer_version(&mut version, LIFETIME_XFER_VERSION)?;
        xfer.xfer_frame(&mut self.death_frame)?;
        Ok(())
    }
}

impl Module for LifetimeUpdate {
    fn name(&self) -> &'static str {
        "LifetimeUpdate"
    }

    fn tag(&self) -> &str {
        &self.tag
    }
}

impl UpdateModule for LifetimeUpdate {
    fn update(&mut self, ctx: &mut UpdateContext<'_>) -> SleepTime {
        if self.death_frame == 0 {
            let lo = self.data.min_frames.min(self.data.max_frames);
            let hi = self.data.min_frames.max(self.data.max_frames);
            let lifetime = ctx.rng.random_range(lo, hi).max(1);
            self.death_frame = ctx.frame.saturating_add(lifetime);
        }
        if ctx.frame >= self.death_frame {
            let remaining = ctx.owner.body.health;
            ctx.owner.body.damage(remaining, ctx.frame);
            return SleepTime::Forever;
        }
        SleepTime::Frames(self.death_frame - ctx.frame)
    }
}
