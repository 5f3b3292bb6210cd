//! The game logic orchestrator.
//!
//! Owns the live objects, the frame counter, the module scheduler, the
//! deterministic RNG, and the event log. Modules run to completion one at
//! a time; while one runs, it and its owner are moved out of their
//! containers so the update context can expose everything else mutably.

use std::collections::BTreeMap;
use std::sync::Arc;

use rampart_core::xfer::{
    Snapshot, Xfer, XferCrc, XferError, XferLoad, XferMode, XferResult, XferSave, xfer_count,
};
use rampart_core::{Catalog, Coord3D, FOREVER, Frame, ObjectId};

use crate::error::{LogicError, LogicResult};
use crate::event::{Event, EventKind, EventLog};
use crate::module::{ModuleInterest, NoopModule, UpdateContext, create_modules};
use crate::object::{BodyState, Object};
use crate::random::LogicRandom;
use crate::scheduler::{ModuleKey, Scheduler};

const GAME_LOGIC_XFER_VERSION: u8 = 1;

/// The top-level simulation state.
pub struct GameLogic {
    catalog: Arc<Catalog>,
    frame: Frame,
    next_object_id: u32,
    objects: BTreeMap<ObjectId, Object>,
    scheduler: Scheduler,
    rng: LogicRandom,
    events: EventLog,
}

impl std::fmt::Debug for GameLogic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameLogic")
            .field("frame", &self.frame)
            .field("objects", &self.objects.len())
            .field("events", &self.events.len())
            .finish()
    }
}

impl GameLogic {
    /// Create an empty simulation over a loaded catalog.
    pub fn new(catalog: Arc<Catalog>, seed: u64) -> Self {
        Self {
            catalog,
            frame: 0,
            next_object_id: 1,
            objects: BTreeMap::new(),
            scheduler: Scheduler::new(),
            rng: LogicRandom::new(seed),
            events: EventLog::new(0),
        }
    }

    /// The current frame.
    pub fn frame(&self) -> Frame {
        self.frame
    }

    /// The template catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The event log.
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Number of live objects.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Fetch a live object.
    pub fn object(&self, id: ObjectId) -> Option<&Object> {
        self.objects.get(&id)
    }

    /// Iterate over live objects in id order.
    pub fn objects(&self) -> impl Iterator<Item = &Object> {
        self.objects.values()
    }

    /// Spawn an object at the world origin.
    pub fn spawn(&mut self, template_name: &str) -> LogicResult<ObjectId> {
        self.spawn_at(template_name, Coord3D::default())
    }

    /// Spawn an object from a named template. Builds and validates the
    /// module set and schedules each active update module with a random
    /// phase offset, so same-template objects spawned together don't all
    /// pulse on the same frame.
    pub fn spawn_at(&mut self, template_name: &str, position: Coord3D) -> LogicResult<ObjectId> {
        let template_id = self
            .catalog
            .objects
            .find(template_name)
            .ok_or_else(|| LogicError::UnknownTemplate(template_name.to_string()))?;
        let template = self
            .catalog
            .objects
            .get(template_id)
            .ok_or_else(|| LogicError::UnknownTemplate(template_name.to_string()))?;
        let (update_modules, draw_modules) = create_modules(template)?;

        let id = ObjectId(self.next_object_id);
        self.next_object_id += 1;
        let object = Object {
            id,
            template: template_id,
            template_name: template.name.clone(),
            side: template.side.clone(),
            kind_of: template.kind_of,
            position,
            body: BodyState::new(template.max_health),
            status: Default::default(),
            drawable: Default::default(),
            update_modules,
            draw_modules,
        };

        for (slot, module) in object.update_modules.iter().enumerate() {
            let key = ModuleKey {
                object: id,
                slot: slot as u32,
            };
            let wake = if module.starts_active() {
                let phase = self.rng.random_range(0, module.initial_delay());
                self.frame.saturating_add(1).saturating_add(phase)
            } else {
                FOREVER
            };
            self.scheduler.set_wake(key, wake);
        }

        self.events.push(Event::new(
            self.frame,
            EventKind::Spawned {
                id,
                template: object.template_name.clone(),
            },
            format!("{id} spawned from {}", object.template_name),
        ));
        self.objects.insert(id, object);
        Ok(id)
    }

    /// Advance one frame: run every due module to completion, sweep dead
    /// objects, then run the client-side draw pass.
    pub fn step(&mut self) {
        self.frame += 1;
        while let Some(key) = self.scheduler.pop_due(self.frame) {
            let Some(mut object) = self.objects.remove(&key.object) else {
                continue;
            };
            let slot = key.slot as usize;
            if slot >= object.update_modules.len() {
                self.objects.insert(object.id, object);
                continue;
            }
            let mut module =
                std::mem::replace(&mut object.update_modules[slot], Box::new(NoopModule));
            let sleep = {
                let mut ctx = UpdateContext {
                    frame: self.frame,
                    owner: &mut object,
                    others: &mut self.objects,
                    catalog: self.catalog.as_ref(),
                    events: &mut self.events,
                    rng: &mut self.rng,
                };
                module.update(&mut ctx)
            };
            object.update_modules[slot] = module;
            let id = object.id;
            self.objects.insert(id, object);
            self.scheduler.set_wake(key, sleep.wake_frame(self.frame));
        }
        self.sweep_dead();
        self.run_draw_modules();
    }

    /// Advance `frames` frames.
    pub fn run(&mut self, frames: u32) {
        for _ in 0..frames {
            self.step();
        }
    }

    /// Apply typed damage through the target's armor. Wakes
    /// damage-interested modules for the next frame (lower-only; a module
    /// already due sooner keeps its earlier wake). Returns the health
    /// actually lost.
    pub fn damage(&mut self, id: ObjectId, amount: f32, damage_type: u32) -> LogicResult<f32> {
        let frame = self.frame;
        let object = self
            .objects
            .get_mut(&id)
            .ok_or(LogicError::UnknownObject(id))?;
        let coefficient = self
            .catalog
            .objects
            .get(object.template)
            .and_then(|t| t.armor)
            .and_then(|armor_id| self.catalog.armors.get(armor_id))
            .map_or(1.0, |armor| armor.coefficient(damage_type));
        let applied = object.body.damage(amount * coefficient, frame);
        self.events.push(Event::new(
            frame,
            EventKind::Damaged {
                id,
                amount: applied,
            },
            format!("{id} took {applied} damage"),
        ));
        for (slot, module) in object.update_modules.iter_mut().enumerate() {
            if module.interest().contains(ModuleInterest::DAMAGE) {
                module.on_damage();
                self.scheduler.wake_no_later_than(
                    ModuleKey {
                        object: id,
                        slot: slot as u32,
                    },
                    frame.saturating_add(1),
                );
            }
        }
        Ok(applied)
    }

    /// Destroy an object immediately.
    pub fn kill(&mut self, id: ObjectId) -> LogicResult<()> {
        if !self.objects.contains_key(&id) {
            return Err(LogicError::UnknownObject(id));
        }
        self.destroy(id, "killed");
        Ok(())
    }

    fn sweep_dead(&mut self) {
        let dead: Vec<ObjectId> = self
            .objects
            .values()
            .filter(|object| !object.body.alive())
            .map(|object| object.id)
            .collect();
        for id in dead {
            self.destroy(id, "health depleted");
        }
    }

    fn destroy(&mut self, id: ObjectId, cause: &str) {
        let Some(mut object) = self.objects.remove(&id) else {
            return;
        };
        let mut update_modules = std::mem::take(&mut object.update_modules);
        let mut draw_modules = std::mem::take(&mut object.draw_modules);
        {
            let mut ctx = UpdateContext {
                frame: self.frame,
                owner: &mut object,
                others: &mut self.objects,
                catalog: self.catalog.as_ref(),
                events: &mut self.events,
                rng: &mut self.rng,
            };
            for module in &mut update_modules {
                module.on_delete(&mut ctx);
            }
            for module in &mut draw_modules {
                module.on_delete(&mut ctx);
            }
        }
        for slot in 0..update_modules.len() {
            self.scheduler.remove(ModuleKey {
                object: id,
                slot: slot as u32,
            });
        }
        self.events.push(Event::new(
            self.frame,
            EventKind::Died {
                id,
                cause: cause.to_string(),
            },
            format!("{id} ({}) died: {cause}", object.template_name),
        ));
    }

    fn run_draw_modules(&mut self) {
        let frame = self.frame;
        for object in self.objects.values_mut() {
            let mut draw_modules = std::mem::take(&mut object.draw_modules);
            for module in &mut draw_modules {
                module.draw(object, frame);
            }
            object.draw_modules = draw_modules;
        }
    }

    /// Serialize the full live state.
    pub fn save(&mut self) -> LogicResult<Vec<u8>> {
        let mut xfer = XferSave::new();
        self.xfer(&mut xfer)?;
        Ok(xfer.into_data())
    }

    /// Rebuild a simulation from saved bytes and the catalog the save was
    /// made against.
    pub fn load(catalog: Arc<Catalog>, data: Vec<u8>) -> LogicResult<Self> {
        let mut logic = Self::new(catalog, 0);
        let mut xfer = XferLoad::new(data);
        logic.xfer(&mut xfer)?;
        Ok(logic)
    }

    /// The desync-detection checksum over the reduced state.
    pub fn state_crc(&mut self) -> LogicResult<u32> {
        let mut xfer = XferCrc::new();
        self.crc(&mut xfer)?;
        Ok(xfer.crc())
    }

    fn rebuild_object(&self, id: ObjectId, template_name: &str) -> XferResult<Object> {
        let template_id = self
            .catalog
            .objects
            .find(template_name)
            .ok_or_else(|| XferError::UnknownName(template_name.to_string()))?;
        let template = self
            .catalog
            .objects
            .get(template_id)
            .ok_or_else(|| XferError::UnknownName(template_name.to_string()))?;
        let (update_modules, draw_modules) =
            create_modules(template).map_err(|_| XferError::UnknownName(template_name.to_string()))?;
        Ok(Object {
            id,
            template: template_id,
            template_name: template.name.clone(),
            side: template.side.clone(),
            kind_of: template.kind_of,
            position: Coord3D::default(),
            body: BodyState::new(template.max_health),
            status: Default::default(),
            drawable: Default::default(),
            update_modules,
            draw_modules,
        })
    }
}

impl Snapshot for GameLogic {
    fn xfer(&mut self, xfer: &mut dyn Xfer) -> XferResult<()> {
        let mut version = GAME_LOGIC_XFER_VERSION;
        xfer.xfer_version(&mut version, GAME_LOGIC_XFER_VERSION)?;
        xfer.xfer_frame(&mut self.frame)?;
        xfer.xfer_u32(&mut self.next_object_id)?;
        self.rng.xfer(xfer)?;

        let count = xfer_count(xfer, self.objects.len())?;
        if xfer.mode() == XferMode::Load {
            if !self.objects.is_empty() {
                return Err(XferError::NonEmptyCollection);
            }
            for _ in 0..count {
                let mut raw_id = 0u32;
                xfer.xfer_u32(&mut raw_id)?;
                let mut template_name = String::new();
                xfer.xfer_string(&mut template_name)?;
                let mut object = self.rebuild_object(ObjectId(raw_id), &template_name)?;
                object.xfer(xfer)?;
                self.objects.insert(object.id, object);
            }
        } else {
            for object in self.objects.values_mut() {
                let mut raw_id = object.id.0;
                xfer.xfer_u32(&mut raw_id)?;
                let mut template_name = object.template_name.clone();
                xfer.xfer_string(&mut template_name)?;
                object.xfer(xfer)?;
            }
        }

        self.scheduler.xfer(xfer)?;
        Ok(())
    }

    fn crc(&mut self, xfer: &mut dyn Xfer) -> XferResult<()> {
        // Reduced contribution: enough to catch a diverged simulation,
        // cheap enough to fold every frame.
        xfer.xfer_frame(&mut self.frame)?;
        for object in self.objects.values_mut() {
            let mut raw_id = object.id.0;
            xfer.xfer_u32(&mut raw_id)?;
            xfer.xfer_f32(&mut object.body.health)?;
            xfer.xfer_u32(&mut object.status.0)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rampart_core::LoadType;
    use rampart_ini::Ini;

    use super::*;

    const TEST_CONFIG: &str = "\
Object MedicTent
  Side = America
  Health = 200
  KindOf = STRUCTURE IMMOBILE
  Behavior = AutoHealBehavior ModuleTag_Heal
    HealingAmount = 10
    HealingDelay = 100
    StartHealingDelay = 100
  End
  Draw = HealGlowDraw ModuleTag_Glow
    FadeTime = 100
  End
End

Object FieldMedic
  Side = America
  Health = 100
  KindOf = INFANTRY HEALER
  Behavior = AutoHealBehavior ModuleTag_Aura
    HealingAmount = 5
    HealingDelay = 100
    Radius = 50
    Affects = ALLIES
  End
End

Object Rifleman
  Side = America
  Health = 100
  KindOf = INFANTRY
End

Object Rebel
  Side = GLA
  Health = 100
  KindOf = INFANTRY
End

Object Flare
  Side = America
  Health = 10
  KindOf = PROJECTILE
  Behavior = LifetimeUpdate ModuleTag_Life
    MinLifetime = 100
    MaxLifetime = 300
  End
End

Object CratePowerup
  Health = 50
  Behavior = AutoHealBehavior ModuleTag_Burst
    HealingAmount = 100
    HealingDelay = 34
    SingleBurst = Yes
  End
End
";

    fn test_catalog() -> Arc<Catalog> {
        let mut catalog = Catalog::new();
        let mut ini = Ini::for_str(TEST_CONFIG);
        assert_eq!(ini.load_type(), LoadType::Overwrite);
        ini.load(&mut catalog).unwrap();
        Arc::new(catalog)
    }

    #[test]
    fn spawn_unknown_template_fails() {
        let mut logic = GameLogic::new(test_catalog(), 1);
        assert!(matches!(
            logic.spawn("NoSuchThing"),
            Err(LogicError::UnknownTemplate(_))
        ));
    }

    #[test]
    fn lifetime_kills_within_configured_range() {
        let mut logic = GameLogic::new(test_catalog(), 7);
        let id = logic.spawn("Flare").unwrap();
        // MinLifetime 100ms / MaxLifetime 300ms is 3..=9 frames.
        logic.run(12);
        assert!(logic.object(id).is_none());
        let died = logic
            .events()
            .events()
            .iter()
            .any(|e| matches!(e.kind, EventKind::Died { id: dead, .. } if dead == id));
        assert!(died);
    }

    #[test]
    fn damaged_object_heals_back_after_delay() {
        let mut logic = GameLogic::new(test_catalog(), 3);
        let id = logic.spawn("MedicTent").unwrap();
        logic.run(2);
        logic.damage(id, 50.0, 0).unwrap();
        assert_eq!(logic.object(id).unwrap().body.health, 150.0);

        // StartHealingDelay is 100ms = 3 frames; healing pulses every 3
        // frames for 10 each. 60 frames is ample to refill 50.
        logic.run(60);
        let body = logic.object(id).unwrap().body;
        assert!(body.at_full_health(), "health {}", body.health);
    }

    #[test]
    fn heal_glow_tints_after_heal() {
        let mut logic = GameLogic::new(test_catalog(), 3);
        let id = logic.spawn("MedicTent").unwrap();
        logic.damage(id, 50.0, 0).unwrap();
        logic.run(10);
        // At least one pulse landed; glow is active within the fade window.
        assert!(logic.object(id).unwrap().drawable.tint.is_some());
        // No healing possible once full: glow fades out.
        logic.run(60);
        assert!(logic.object(id).unwrap().drawable.tint.is_none());
    }

    #[test]
    fn area_heal_respects_filters() {
        let mut logic = GameLogic::new(test_catalog(), 11);
        logic
            .spawn_at("FieldMedic", Coord3D::new(0.0, 0.0, 0.0))
            .unwrap();
        let near_ally = logic
            .spawn_at("Rifleman", Coord3D::new(10.0, 0.0, 0.0))
            .unwrap();
        let far_ally = logic
            .spawn_at("Rifleman", Coord3D::new(500.0, 0.0, 0.0))
            .unwrap();
        let near_enemy = logic
            .spawn_at("Rebel", Coord3D::new(-10.0, 0.0, 0.0))
            .unwrap();
        for id in [near_ally, far_ally, near_enemy] {
            logic.damage(id, 40.0, 0).unwrap();
        }
        logic.run(30);

        assert!(logic.object(near_ally).unwrap().body.at_full_health());
        assert_eq!(logic.object(far_ally).unwrap().body.health, 60.0);
        assert_eq!(logic.object(near_enemy).unwrap().body.health, 60.0);
    }

    #[test]
    fn single_burst_heals_once() {
        let mut logic = GameLogic::new(test_catalog(), 5);
        let id = logic.spawn("CratePowerup").unwrap();
        logic.damage(id, 30.0, 0).unwrap();
        logic.run(10);
        assert!(logic.object(id).unwrap().body.at_full_health());

        logic.damage(id, 30.0, 0).unwrap();
        logic.run(30);
        // The burst is spent; no further healing.
        assert_eq!(logic.object(id).unwrap().body.health, 20.0);
    }

    #[test]
    fn kill_runs_module_cleanup_and_unschedules() {
        let mut logic = GameLogic::new(test_catalog(), 5);
        let id = logic.spawn("MedicTent").unwrap();
        logic.run(1);
        logic.kill(id).unwrap();
        assert!(logic.object(id).is_none());
        assert!(matches!(logic.kill(id), Err(LogicError::UnknownObject(_))));
        // Stepping past the old wake frames must not panic or resurrect.
        logic.run(20);
        assert_eq!(logic.object_count(), 0);
    }

    #[test]
    fn equal_seeds_give_equal_runs() {
        let run = |seed: u64| {
            let mut logic = GameLogic::new(test_catalog(), seed);
            logic.spawn("Flare").unwrap();
            logic.spawn("MedicTent").unwrap();
            logic.run(20);
            (
                logic.state_crc().unwrap(),
                logic
                    .events()
                    .events()
                    .iter()
                    .map(|e| e.description.clone())
                    .collect::<Vec<_>>(),
            )
        };
        assert_eq!(run(42), run(42));
        let (crc_a, _) = run(42);
        let (crc_b, _) = run(43);
        // Different seeds shift the lifetime draw; CRCs diverge once the
        // flare dies on a different frame.
        assert_ne!(crc_a, crc_b);
    }

    #[test]
    fn save_load_round_trips_and_stays_deterministic() {
        let catalog = test_catalog();
        let mut original = GameLogic::new(catalog.clone(), 9);
        original.spawn("MedicTent").unwrap();
        let flare = original.spawn("Flare").unwrap();
        original.run(4);
        original.damage(flare, 3.0, 0).unwrap();

        let data = original.save().unwrap();
        let mut restored = GameLogic::load(catalog, data).unwrap();

        assert_eq!(restored.frame(), original.frame());
        assert_eq!(restored.object_count(), original.object_count());
        assert_eq!(
            restored.state_crc().unwrap(),
            original.state_crc().unwrap()
        );

        // Both copies must evolve identically from here.
        original.run(30);
        restored.run(30);
        assert_eq!(
            restored.state_crc().unwrap(),
            original.state_crc().unwrap()
        );
    }

    #[test]
    fn loading_into_populated_logic_fails() {
        let catalog = test_catalog();
        let mut original = GameLogic::new(catalog.clone(), 9);
        original.spawn("Rifleman").unwrap();
        let data = original.save().unwrap();

        let mut occupied = GameLogic::new(catalog, 9);
        occupied.spawn("Rifleman").unwrap();
        let mut xfer = XferLoad::new(data);
        assert!(matches!(
            occupied.xfer(&mut xfer),
            Err(XferError::NonEmptyCollection)
        ));
    }

    #[test]
    fn newer_save_version_is_fatal() {
        let catalog = test_catalog();
        let mut bytes = GameLogic::new(catalog.clone(), 1).save().unwrap();
        bytes[0] = GAME_LOGIC_XFER_VERSION + 1;
        assert!(matches!(
            GameLogic::load(catalog, bytes),
            Err(LogicError::Xfer(XferError::UnknownVersion { .. }))
        ));
    }
}
