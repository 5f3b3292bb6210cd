//! `HealGlowDraw`: tints the owner's drawable while it was recently
//! healed. Requires an `AutoHealBehavior` companion to set the status.

use rampart_core::xfer::{Snapshot, Xfer, XferMode, XferResult};
use rampart_core::{FOREVER, Frame};
use rampart_core::module_data::HealGlowDrawData;

use crate::module::{DrawModule, Module};
use crate::object::{Object, ObjectStatus};

const HEAL_GLOW_XFER_VERSION: u8 = 1;

/// Consumes the owner's recently-healed status and keeps the glow tint on
/// for the configured fade window after the last pulse.
pub struct HealGlowDraw {
    tag: String,
    data: HealGlowDrawData,
    glow_until: Option<Frame>,
}

impl HealGlowDraw {
    /// Build from the shared template configuration.
    pub fn new(tag: String, data: HealGlowDrawData) -> Self {
        Self {
            tag,
            data,
            glow_until: None,
        }
    }

    /// Last frame of the current glow window, if glowing.
    pub fn glow_until(&self) -> Option<Frame> {
        self.glow_until
    }
}

impl Snapshot for HealGlowDraw {
    fn xfer(&mut self, xfer: &mut dyn Xfer) -> XferResult<()> {
        let mut version = HEAL_GLOW_XFER_VERSION;
        xfer.xfer_version(&mut version, HEAL_GLOW_XFER_VERSION)?;
        let mut until = self.glow_until.unwrap_or(FOREVER);
        xfer.xfer_frame(&mut until)?;
        if xfer.mode() == XferMode::Load {
            self.glow_until = (until != FOREVER).then_some(until);
        }
        Ok(())
    }
}

impl Module for HealGlowDraw {
    fn name(&self) -> &'static str {
        "HealGlowDraw"
    }

    fn tag(&self) -> &str {
        &self.tag
    }
}

impl DrawModule for HealGlowDraw {
    fn draw(&mut self, owner: &mut Object, frame: Frame) {
        if owner.status.test(ObjectStatus::RECENTLY_HEALED) {
            self.glow_until = Some(frame.saturating_add(self.data.fade_frames));
            owner.status.clear(ObjectStatus::RECENTLY_HEALED);
        }
        match self.glow_until {
            Some(until) if frame <= until => {
                owner.drawable.tint = Some(self.data.glow_color);
            }
            Some(_) => {
                self.glow_until = None;
                owner.drawable.tint = None;
            }
            None => {}
        }
    }
}
