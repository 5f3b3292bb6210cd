//! `AutoHealBehavior`: periodic healing of the owning object, or of
//! filtered nearby objects when a radius is configured.

use rampart_core::module_data::AutoHealModuleData;
use rampart_core::Frame;
use rampart_core::xfer::{Snapshot, Xfer, XferResult};

use crate::event::{Event, EventKind};
use crate::filter::ScanFilter;
use crate::module::{Module, ModuleInterest, SleepTime, UpdateContext, UpdateModule};
use crate::object::ObjectStatus;

/// Save-record version. Version 2 added burst exhaustion; version 1
/// records carried the next pulse frame, now owned by the scheduler's wake
/// table.
const AUTO_HEAL_XFER_VERSION: u8 = 2;

/// Heals the owner (radius zero) or nearby filtered objects (radius
/// positive) on a fixed pulse cadence. Damage wakes and arms the module;
/// healing resumes only after the configured post-damage delay.
pub struct AutoHealBehavior {
    tag: String,
    data: AutoHealModuleData,
    active: bool,
    burst_exhausted: bool,
    /// A pulse effect is currently running on the client side.
    fx_running: bool,
}

impl AutoHealBehavior {
    /// Build from the shared template configuration.
    pub fn new(tag: String, data: AutoHealModuleData) -> Self {
        let active = data.update.starts_active;
        Self {
            tag,
            data,
            active,
            burst_exhausted: false,
            fx_running: false,
        }
    }

    /// One-shot modules stop permanently after their first productive
    /// pulse.
    pub fn burst_exhausted(&self) -> bool {
        self.burst_exhausted
    }

    /// True while the configured pulse effect plays on the client side.
    pub fn fx_running(&self) -> bool {
        self.fx_running
    }

    fn heal_area(&self, ctx: &mut UpdateContext<'_>) -> bool {
        let filter = ScanFilter {
            affects: self.data.affects,
            alive_only: true,
            kind_mask: self.data.affects_kind_of,
        };
        let origin = ctx.owner.position;
        let radius_sq = self.data.radius * self.data.radius;
        let side = ctx.owner.side.clone();
        let mut healed_any = false;

        // The owner is its own ally and sits at the scan origin.
        if filter.matches(&side, ctx.owner) {
            let applied = ctx.owner.body.heal(self.data.healing_amount);
            if applied > 0.0 {
                healed_any = true;
                ctx.owner.status.set(ObjectStatus::RECENTLY_HEALED);
                let id = ctx.owner.id;
                ctx.events.push(Event::new(
                    ctx.frame,
                    EventKind::Healed {
                        id,
                        amount: applied,
                    },
                    format!("{id} healed {applied} by {}", self.tag),
                ));
            }
        }
        for target in ctx.others.values_mut() {
            if target.position.dist_sq(&origin) > radius_sq {
                continue;
            }
            if !filter.matches(&side, target) {
                continue;
            }
            let applied = target.body.heal(self.data.healing_amount);
            if applied > 0.0 {
                healed_any = true;
                target.status.set(ObjectStatus::RECENTLY_HEALED);
                ctx.events.push(Event::new(
                    ctx.frame,
                    EventKind::Healed {
                        id: target.id,
                        amount: applied,
                    },
                    format!("{} healed {applied} by {}", target.id, self.tag),
                ));
            }
        }
        healed_any
    }

    fn heal_self(&self, ctx: &mut UpdateContext<'_>) -> bool {
        let applied = ctx.owner.body.heal(self.data.healing_amount);
        if applied <= 0.0 {
            return false;
        }
        ctx.owner.status.set(ObjectStatus::RECENTLY_HEALED);
        let id = ctx.owner.id;
        ctx.events.push(Event::new(
            ctx.frame,
            EventKind::Healed {
                id,
                amount: applied,
            },
            format!("{id} healed {applied} by {}", self.tag),
        ));
        true
    }
}

impl Snapshot for AutoHealBehavior {
    fn xfer(&mut self, xfer: &mut dyn Xfer) -> XferResult<()> {
        let mut version = AUTO_HEAL_XFER_VERSION;
        xfer.xfer_version(&mut version, AUTO_HEAL_XFER_VERSION)?;
        xfer.xfer_bool(&mut self.active)?;
        if version >= 2 {
            xfer.xfer_bool(&mut self.burst_exhausted)?;
        } else {
            // Version 1 stored the next pulse frame here; the scheduler's
            // wake table owns that now.
            let mut legacy_next_pulse: Frame = 0;
            xfer.xfer_frame(&mut legacy_next_pulse)?;
        }
        Ok(())
    }
}

impl Module for AutoHealBehavior {
    fn name(&self) -> &'static str {
        "AutoHealBehavior"
    }

    fn tag(&self) -> &str {
        &self.tag
    }

    fn interest(&self) -> ModuleInterest {
        ModuleInterest::DAMAGE
    }

    fn on_damage(&mut self) {
        self.active = true;
    }

    fn on_delete(&mut self, _ctx: &mut UpdateContext<'_>) {
        // Stop the client-side pulse effect with its owner.
        self.fx_running = false;
    }
}

impl UpdateModule for AutoHealBehavior {
    fn update(&mut self, ctx: &mut UpdateContext<'_>) -> SleepTime {
        if !self.active || self.burst_exhausted {
            return SleepTime::Forever;
        }
        if let Some(last_damage) = ctx.owner.body.last_damage_frame {
            let resume = last_damage.saturating_add(self.data.start_healing_delay);
            if ctx.frame < resume {
                return SleepTime::Frames(resume - ctx.frame);
            }
        }

        let area = self.data.radius > 0.0;
        let healed_any = if area {
            self.heal_area(ctx)
        } else {
            self.heal_self(ctx)
        };

        if healed_any && self.data.pulse_fx.is_some() {
            self.fx_running = true;
        }
        if healed_any && self.data.single_burst {
            self.burst_exhausted = true;
            return SleepTime::Forever;
        }
        if !area && ctx.owner.body.at_full_health() {
            // Nothing left to heal; damage interest wakes us again.
            return SleepTime::Forever;
        }
        SleepTime::Frames(self.data.healing_delay)
    }

    fn initial_delay(&self) -> Frame {
        self.data.healing_delay
    }

    fn starts_active(&self) -> bool {
        self.data.update.starts_active
    }
}
