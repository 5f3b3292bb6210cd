//! Block dispatch and the field tables for every template type.
//!
//! A top-level keyword selects a block parser; the parser opens an entry in
//! the catalog under the reader's load semantics, drives the block body
//! through the field tables, and stores the result back. Module bodies
//! nest one level deeper inside `Object` blocks and are dispatched the
//! same way, by module type name.

use rampart_core::module_data::{
    AllegianceFlags, AutoHealModuleData, HealGlowDrawData, LifetimeModuleData, UpdateModuleFields,
};
use rampart_core::template::{DAMAGE_NAMES, ModuleSlot, Template};
use rampart_core::{Catalog, KINDOF_NAMES, ModuleData, ObjectTemplate, TemplateStore};

use crate::error::{IniErrorKind, IniResult};
use crate::field::FieldParse;
use crate::ini::{Ini, Seps};
use crate::scan;

/// A top-level block parser: consumes the rest of the declaration line and
/// the whole block body, including the closing `End`.
pub type BlockParse = fn(&mut Ini<'_>, &mut Catalog) -> IniResult<()>;

struct BlockParseEntry {
    token: &'static str,
    parse: BlockParse,
}

const BLOCK_TABLE: &[BlockParseEntry] = &[
    BlockParseEntry {
        token: "Object",
        parse: |ini, catalog| parse_template_block(ini, catalog, |c| &mut c.objects, OBJECT_FIELDS),
    },
    BlockParseEntry {
        token: "Weapon",
        parse: |ini, catalog| parse_template_block(ini, catalog, |c| &mut c.weapons, WEAPON_FIELDS),
    },
    BlockParseEntry {
        token: "Armor",
        parse: |ini, catalog| parse_template_block(ini, catalog, |c| &mut c.armors, ARMOR_FIELDS),
    },
    BlockParseEntry {
        token: "FXList",
        parse: |ini, catalog| parse_template_block(ini, catalog, |c| &mut c.fx_lists, FXLIST_FIELDS),
    },
];

/// Find the parser for a block keyword, case-insensitive.
pub fn find_block(token: &str) -> Option<BlockParse> {
    BLOCK_TABLE
        .iter()
        .find(|entry| entry.token.eq_ignore_ascii_case(token))
        .map(|entry| entry.parse)
}

/// The shared shape of every template block: `<Keyword> <Name>`, a body of
/// fields, `End`. The entry stays open in the store while the body parses
/// so the value can accrete under [`rampart_core::LoadType::MultiFile`].
fn parse_template_block<T: Template + 'static>(
    ini: &mut Ini<'_>,
    catalog: &mut Catalog,
    select: fn(&mut Catalog) -> &mut TemplateStore<T>,
    table: &'static [FieldParse<T>],
) -> IniResult<()> {
    let name = ini.next_token(Seps::Normal)?;
    let (id, mut value) = select(catalog).begin_block(&name, ini.load_type());
    ini.init_from_ini(&mut value, catalog, table)?;
    select(catalog).end_block(id, value);
    Ok(())
}

fn next_template_ref<T: Template>(
    ini: &mut Ini<'_>,
    store: &TemplateStore<T>,
    kind: &'static str,
) -> IniResult<Option<T::Id>> {
    let name = ini.next_token(Seps::Normal)?;
    if name.eq_ignore_ascii_case("None") {
        return Ok(None);
    }
    match store.find(&name) {
        Some(id) => Ok(Some(id)),
        None => Err(ini.error(IniErrorKind::UnknownReference { kind, name })),
    }
}

const OBJECT_FIELDS: &[FieldParse<ObjectTemplate>] = &[
    FieldParse {
        token: "Side",
        action: |ini, t, _| {
            t.side = ini.next_token(Seps::Normal)?;
            Ok(())
        },
    },
    FieldParse {
        token: "Health",
        action: |ini, t, _| {
            t.max_health = ini.next_real()?;
            Ok(())
        },
    },
    FieldParse {
        token: "Armor",
        action: |ini, t, catalog| {
            t.armor = next_template_ref(ini, &catalog.armors, "armor template")?;
            Ok(())
        },
    },
    FieldParse {
        token: "Weapon",
        action: |ini, t, catalog| {
            t.weapon = next_template_ref(ini, &catalog.weapons, "weapon template")?;
            Ok(())
        },
    },
    FieldParse {
        token: "DeathFX",
        action: |ini, t, catalog| {
            t.death_fx = next_template_ref(ini, &catalog.fx_lists, "effects list")?;
            Ok(())
        },
    },
    FieldParse {
        token: "KindOf",
        action: |ini, t, _| ini.next_bit_flags(&mut t.kind_of, KINDOF_NAMES),
    },
    FieldParse {
        token: "VisionRange",
        action: |ini, t, _| {
            t.vision_range = ini.next_real()?;
            Ok(())
        },
    },
    FieldParse {
        token: "DisplayColor",
        action: |ini, t, _| {
            t.display_color = ini.next_rgb_color()?;
            Ok(())
        },
    },
    FieldParse {
        token: "Behavior",
        action: |ini, t, catalog| parse_module(ini, t, catalog, false),
    },
    FieldParse {
        token: "Draw",
        action: |ini, t, catalog| parse_module(ini, t, catalog, true),
    },
];

struct ModuleParseEntry {
    token: &'static str,
    parse: fn(&mut Ini<'_>, &Catalog) -> IniResult<ModuleData>,
}

const MODULE_TABLE: &[ModuleParseEntry] = &[
    ModuleParseEntry {
        token: "AutoHealBehavior",
        parse: parse_auto_heal,
    },
    ModuleParseEntry {
        token: "LifetimeUpdate",
        parse: parse_lifetime,
    },
    ModuleParseEntry {
        token: "HealGlowDraw",
        parse: parse_heal_glow,
    },
];

/// Parse one `Behavior`/`Draw` line and the nested module body. Tags must
/// be unique within the template; they key saved module records, so a
/// duplicate would make save data ambiguous.
fn parse_module(
    ini: &mut Ini<'_>,
    tmpl: &mut ObjectTemplate,
    catalog: &Catalog,
    expect_draw: bool,
) -> IniResult<()> {
    let module_name = ini.next_token(Seps::Normal)?;
    let tag = ini.next_token(Seps::Normal)?;
    if tmpl
        .modules
        .iter()
        .any(|slot| slot.tag.eq_ignore_ascii_case(&tag))
    {
        return Err(ini.error(IniErrorKind::InvalidData(format!(
            "duplicate module tag \"{tag}\""
        ))));
    }
    let entry = MODULE_TABLE
        .iter()
        .find(|entry| entry.token.eq_ignore_ascii_case(&module_name))
        .ok_or_else(|| ini.error(IniErrorKind::UnknownModule(module_name.clone())))?;
    let data = (entry.parse)(ini, catalog)?;
    if data.is_draw_module() != expect_draw {
        let keyword = if expect_draw { "Draw" } else { "Behavior" };
        return Err(ini.error(IniErrorKind::InvalidData(format!(
            "module \"{module_name}\" cannot appear under {keyword}"
        ))));
    }
    tmpl.modules.push(ModuleSlot { tag, data });
    Ok(())
}

const UPDATE_MODULE_FIELDS: &[FieldParse<UpdateModuleFields>] = &[FieldParse {
    token: "StartsActive",
    action: |ini, t, _| {
        t.starts_active = ini.next_bool()?;
        Ok(())
    },
}];

const AUTO_HEAL_FIELDS: &[FieldParse<AutoHealModuleData>] = &[
    FieldParse {
        token: "HealingAmount",
        action: |ini, t, _| {
            t.healing_amount = ini.next_real()?;
            Ok(())
        },
    },
    FieldParse {
        token: "HealingDelay",
        action: |ini, t, _| {
            t.healing_delay = ini.next_duration_frames()?;
            Ok(())
        },
    },
    FieldParse {
        token: "StartHealingDelay",
        action: |ini, t, _| {
            t.start_healing_delay = ini.next_duration_frames()?;
            Ok(())
        },
    },
    FieldParse {
        token: "Radius",
        action: |ini, t, _| {
            t.radius = ini.next_real()?;
            Ok(())
        },
    },
    FieldParse {
        token: "SingleBurst",
        action: |ini, t, _| {
            t.single_burst = ini.next_bool()?;
            Ok(())
        },
    },
    FieldParse {
        token: "Affects",
        action: |ini, t, _| {
            t.affects = parse_allegiance(ini)?;
            Ok(())
        },
    },
    FieldParse {
        token: "AffectsKindOf",
        action: |ini, t, _| ini.next_bit_flags(&mut t.affects_kind_of, KINDOF_NAMES),
    },
    FieldParse {
        token: "PulseFX",
        action: |ini, t, catalog| {
            t.pulse_fx = next_template_ref(ini, &catalog.fx_lists, "effects list")?;
            Ok(())
        },
    },
];

fn parse_allegiance(ini: &mut Ini<'_>) -> IniResult<AllegianceFlags> {
    let mut affects = AllegianceFlags {
        allies: false,
        enemies: false,
        neutrals: false,
    };
    let tokens = ini.next_string_vec();
    if tokens.is_empty() {
        return Err(ini.error(IniErrorKind::InvalidData(
            "missing allegiance tokens".to_string(),
        )));
    }
    for token in tokens {
        if token.eq_ignore_ascii_case("ALLIES") {
            affects.allies = true;
        } else if token.eq_ignore_ascii_case("ENEMIES") {
            affects.enemies = true;
        } else if token.eq_ignore_ascii_case("NEUTRALS") {
            affects.neutrals = true;
        } else {
            return Err(ini.error(IniErrorKind::InvalidData(format!(
                "unknown allegiance \"{token}\""
            ))));
        }
    }
    Ok(affects)
}

fn parse_auto_heal(ini: &mut Ini<'_>, catalog: &Catalog) -> IniResult<ModuleData> {
    let mut data = AutoHealModuleData::default();
    ini.init_from_ini_multi(&mut data, catalog, |multi| {
        multi.add_adapted(UPDATE_MODULE_FIELDS, |d: &mut AutoHealModuleData| {
            &mut d.update
        })?;
        multi.add(AUTO_HEAL_FIELDS)
    })?;
    Ok(ModuleData::AutoHeal(data))
}

const LIFETIME_FIELDS: &[FieldParse<LifetimeModuleData>] = &[
    FieldParse {
        token: "MinLifetime",
        action: |ini, t, _| {
            t.min_frames = ini.next_duration_frames()?;
            Ok(())
        },
    },
    FieldParse {
        token: "MaxLifetime",
        action: |ini, t, _| {
            t.max_frames = ini.next_duration_frames()?;
            Ok(())
        },
    },
];

fn parse_lifetime(ini: &mut Ini<'_>, catalog: &Catalog) -> IniResult<ModuleData> {
    let mut data = LifetimeModuleData::default();
    ini.init_from_ini_multi(&mut data, catalog, |multi| {
        multi.add_adapted(UPDATE_MODULE_FIELDS, |d: &mut LifetimeModuleData| {
            &mut d.update
        })?;
        multi.add(LIFETIME_FIELDS)
    })?;
    Ok(ModuleData::Lifetime(data))
}

const HEAL_GLOW_FIELDS: &[FieldParse<HealGlowDrawData>] = &[
    FieldParse {
        token: "GlowColor",
        action: |ini, t, _| {
            t.glow_color = ini.next_rgb_color()?;
            Ok(())
        },
    },
    FieldParse {
        token: "FadeTime",
        action: |ini, t, _| {
            t.fade_frames = ini.next_duration_frames()?;
            Ok(())
        },
    },
];

fn parse_heal_glow(ini: &mut Ini<'_>, catalog: &Catalog) -> IniResult<ModuleData> {
    let mut data = HealGlowDrawData::default();
    ini.init_from_ini(&mut data, catalog, HEAL_GLOW_FIELDS)?;
    Ok(ModuleData::HealGlowDraw(data))
}

const WEAPON_FIELDS: &[FieldParse<rampart_core::WeaponTemplate>] = &[
    FieldParse {
        token: "PrimaryDamage",
        action: |ini, t, _| {
            t.primary_damage = ini.next_real()?;
            Ok(())
        },
    },
    FieldParse {
        token: "PrimaryDamageRadius",
        action: |ini, t, _| {
            t.primary_damage_radius = ini.next_real()?;
            Ok(())
        },
    },
    FieldParse {
        token: "AttackRange",
        action: |ini, t, _| {
            t.attack_range = ini.next_real()?;
            Ok(())
        },
    },
    FieldParse {
        token: "DelayBetweenShots",
        action: |ini, t, _| {
            t.delay_between_shots = ini.next_duration_frames()?;
            Ok(())
        },
    },
    FieldParse {
        token: "DamageType",
        action: |ini, t, _| {
            t.damage_type = ini.next_index(DAMAGE_NAMES)?;
            Ok(())
        },
    },
    FieldParse {
        token: "ProjectileSpeed",
        action: |ini, t, _| {
            t.projectile_speed = ini.next_velocity()?;
            Ok(())
        },
    },
    FieldParse {
        token: "FireFX",
        action: |ini, t, catalog| {
            t.fire_fx = next_template_ref(ini, &catalog.fx_lists, "effects list")?;
            Ok(())
        },
    },
];

const ARMOR_FIELDS: &[FieldParse<rampart_core::ArmorTemplate>] = &[FieldParse {
    // Repeated per damage type: `Armor = <DamageName> <percent>%`, with
    // DEFAULT setting every coefficient at once.
    token: "Armor",
    action: |ini, t, _| {
        let name = ini.next_token(Seps::Percent)?;
        let percent = ini.next_percent()?;
        if name.eq_ignore_ascii_case("DEFAULT") {
            t.coefficients.fill(percent);
            return Ok(());
        }
        let index = scan::scan_index(&name, DAMAGE_NAMES).map_err(|kind| ini.error(kind))?;
        t.coefficients[index as usize] = percent;
        Ok(())
    },
}];

const FXLIST_FIELDS: &[FieldParse<rampart_core::FxList>] = &[
    FieldParse {
        token: "Sound",
        action: |ini, t, _| {
            t.sound = ini.next_quoted()?;
            Ok(())
        },
    },
    FieldParse {
        token: "ParticleSystems",
        action: |ini, t, _| {
            t.particle_systems = ini.next_string_vec();
            Ok(())
        },
    },
    FieldParse {
        token: "AppendParticleSystems",
        action: |ini, t, _| {
            t.particle_systems.extend(ini.next_string_vec());
            Ok(())
        },
    },
    FieldParse {
        token: "Tint",
        action: |ini, t, _| {
            t.tint = Some(ini.next_rgb_color()?);
            Ok(())
        },
    },
];

#[cfg(test)]
mod tests {
    use rampart_core::LoadType;

    use super::*;
    use crate::ini::load_directory;

    const BASE_CONFIG: &str = "\
; Rampart test data
FXList FX_HealPulse
  Sound = \"Heal Pulse Loop\"
  ParticleSystems = HealSparkles HealRing
End

Armor TankArmor
  Armor = DEFAULT 100%
  Armor = SMALL_ARMS 40%
  Armor = HEALING 100%
End

Weapon TankCannon
  PrimaryDamage = 40.0
  PrimaryDamageRadius = 5.0
  AttackRange = 150.0
  DelayBetweenShots = 2000
  DamageType = ARMOR_PIERCING
  ProjectileSpeed = 300
  FireFX = None
End

Object AmericaTank
  Side = America
  Health = 300.0
  Armor = TankArmor
  Weapon = TankCannon
  KindOf = SELECTABLE CAN_ATTACK VEHICLE
  VisionRange = 140.0
  DisplayColor = R:30 G:60 B:200
  Behavior = AutoHealBehavior ModuleTag_Heal
    StartsActive = No
    HealingAmount = 3.0
    HealingDelay = 1000
    StartHealingDelay = 5000
    Affects = ALLIES
    PulseFX = FX_HealPulse
  End
  Draw = HealGlowDraw ModuleTag_Glow
    GlowColor = R:0 G:255 B:0
    FadeTime = 500
  End
End
";

    fn load_str(text: &str, load_type: LoadType, catalog: &mut Catalog) {
        let mut ini = Ini::from_reader(
            std::io::Cursor::new(text.to_string()),
            std::path::Path::new("<memory>"),
            load_type,
        );
        ini.load(catalog).unwrap();
    }

    #[test]
    fn full_config_round_trip() {
        let mut catalog = Catalog::new();
        load_str(BASE_CONFIG, LoadType::Overwrite, &mut catalog);

        let id = catalog.objects.find("americatank").unwrap();
        let tank = catalog.objects.get(id).unwrap();
        assert_eq!(tank.side, "America");
        assert_eq!(tank.max_health, 300.0);
        assert!(tank.kind_of.test(1)); // SELECTABLE
        assert!(tank.kind_of.test(3)); // CAN_ATTACK
        assert!(tank.kind_of.test(6)); // VEHICLE
        assert!(!tank.kind_of.test(0));

        let weapon = catalog.weapons.get(tank.weapon.unwrap()).unwrap();
        assert_eq!(weapon.delay_between_shots, 60);
        assert_eq!(weapon.damage_type, 2);
        assert!((weapon.projectile_speed - 10.0).abs() < f32::EPSILON);
        assert!(weapon.fire_fx.is_none());

        let armor = catalog.armors.get(tank.armor.unwrap()).unwrap();
        assert!((armor.coefficient(3) - 0.4).abs() < 1.0e-6);
        assert!((armor.coefficient(0) - 1.0).abs() < f32::EPSILON);

        let heal = tank.find_module("AutoHealBehavior").unwrap();
        let ModuleData::AutoHeal(data) = &heal.data else {
            panic!("wrong module data");
        };
        assert!(!data.update.starts_active);
        assert_eq!(data.healing_delay, 30);
        assert_eq!(data.start_healing_delay, 150);
        assert!(data.affects.allies);
        assert!(!data.affects.enemies);
        let fx = catalog.fx_lists.get(data.pulse_fx.unwrap()).unwrap();
        assert_eq!(fx.sound, "Heal Pulse Loop");
        assert_eq!(fx.particle_systems, ["HealSparkles", "HealRing"]);

        assert!(tank.has_module("HealGlowDraw"));
    }

    #[test]
    fn minimal_object_parses_and_counts_lines() {
        let mut catalog = Catalog::new();
        let mut ini = Ini::for_str("Object MyThing\n  Health = 10\nEnd\n");
        ini.load(&mut catalog).unwrap();

        assert_eq!(ini.line_num(), 3);
        let thing = catalog
            .objects
            .get(catalog.objects.find("MyThing").unwrap())
            .unwrap();
        assert_eq!(thing.max_health, 10.0);
        assert!(thing.modules.is_empty());
    }

    #[test]
    fn unknown_field_is_an_error_with_position() {
        let mut catalog = Catalog::new();
        let mut ini = Ini::for_str("Weapon Gun\n  Bogus = 1\nEnd\n");
        let err = ini.load(&mut catalog).unwrap_err();
        assert_eq!(err.kind, IniErrorKind::UnknownField("Bogus".to_string()));
        assert_eq!(err.line, 2);
        assert!(err.near.contains("Bogus"));
    }

    #[test]
    fn unknown_block_and_module_are_errors() {
        let mut catalog = Catalog::new();
        let mut ini = Ini::for_str("Widget Gadget\nEnd\n");
        let err = ini.load(&mut catalog).unwrap_err();
        assert_eq!(err.kind, IniErrorKind::UnknownBlock("Widget".to_string()));

        let mut ini = Ini::for_str("Object Tank\n  Behavior = WarpDrive Tag_01\n  End\nEnd\n");
        let err = ini.load(&mut catalog).unwrap_err();
        assert_eq!(err.kind, IniErrorKind::UnknownModule("WarpDrive".to_string()));
    }

    #[test]
    fn missing_end_token_is_an_error() {
        let mut catalog = Catalog::new();
        let mut ini = Ini::for_str("Weapon Gun\n  PrimaryDamage = 10\n");
        let err = ini.load(&mut catalog).unwrap_err();
        assert_eq!(err.kind, IniErrorKind::MissingEndToken);
    }

    #[test]
    fn duplicate_module_tag_is_an_error() {
        let mut catalog = Catalog::new();
        let text = "Object Tank\n\
                    \x20 Behavior = LifetimeUpdate Tag_01\n\
                    \x20 End\n\
                    \x20 Behavior = AutoHealBehavior Tag_01\n\
                    \x20 End\n\
                    End\n";
        let mut ini = Ini::for_str(text);
        let err = ini.load(&mut catalog).unwrap_err();
        assert!(matches!(err.kind, IniErrorKind::InvalidData(_)));
        assert!(err.to_string().contains("Tag_01"));
    }

    #[test]
    fn draw_module_under_behavior_is_an_error() {
        let mut catalog = Catalog::new();
        let text = "Object Tank\n  Behavior = HealGlowDraw Tag_01\n  End\nEnd\n";
        let mut ini = Ini::for_str(text);
        let err = ini.load(&mut catalog).unwrap_err();
        assert!(matches!(err.kind, IniErrorKind::InvalidData(_)));
    }

    #[test]
    fn unresolved_reference_is_an_error() {
        let mut catalog = Catalog::new();
        let mut ini = Ini::for_str("Object Tank\n  Armor = Phantom\nEnd\n");
        let err = ini.load(&mut catalog).unwrap_err();
        assert!(matches!(
            err.kind,
            IniErrorKind::UnknownReference {
                kind: "armor template",
                ..
            }
        ));
    }

    #[test]
    fn multi_file_load_accretes_fields() {
        let mut catalog = Catalog::new();
        load_str(
            "Object Tank\n  Health = 100\n  KindOf = VEHICLE\nEnd\n",
            LoadType::MultiFile,
            &mut catalog,
        );
        load_str(
            "Object Tank\n  VisionRange = 90\n  KindOf = +SELECTABLE\nEnd\n",
            LoadType::MultiFile,
            &mut catalog,
        );
        let tank = catalog
            .objects
            .get(catalog.objects.find("Tank").unwrap())
            .unwrap();
        assert_eq!(tank.max_health, 100.0);
        assert_eq!(tank.vision_range, 90.0);
        assert!(tank.kind_of.test(6));
        assert!(tank.kind_of.test(1));
        assert_eq!(catalog.objects.len(), 1);
    }

    #[test]
    fn overwrite_load_resets_previous_content() {
        let mut catalog = Catalog::new();
        load_str(
            "Object Tank\n  Health = 100\nEnd\n",
            LoadType::Overwrite,
            &mut catalog,
        );
        let id = catalog.objects.find("Tank").unwrap();
        load_str(
            "Object Tank\n  VisionRange = 90\nEnd\n",
            LoadType::Overwrite,
            &mut catalog,
        );
        assert_eq!(catalog.objects.find("Tank"), Some(id));
        let tank = catalog.objects.get(id).unwrap();
        assert_eq!(tank.max_health, 0.0);
        assert_eq!(tank.vision_range, 90.0);
    }

    #[test]
    fn create_override_shadows_base() {
        let mut catalog = Catalog::new();
        load_str(
            "Weapon Gun\n  PrimaryDamage = 10\nEnd\n",
            LoadType::Overwrite,
            &mut catalog,
        );
        let base = catalog.weapons.find("Gun").unwrap();
        load_str(
            "Weapon Gun\n  PrimaryDamage = 25\nEnd\n",
            LoadType::CreateOverride,
            &mut catalog,
        );
        let over = catalog.weapons.find("Gun").unwrap();
        assert_ne!(base, over);
        assert_eq!(catalog.weapons.get(over).unwrap().primary_damage, 25.0);
        assert_eq!(catalog.weapons.get(base).unwrap().primary_damage, 10.0);
        assert_eq!(catalog.weapons.find_base("Gun"), Some(base));
    }

    #[test]
    fn directory_load_is_sorted_and_optionally_recursive() {
        let dir = tempfile::tempdir().unwrap();
        // b.ini defines the armor that z.ini references; both sort before
        // nothing here, but the armor must land in an earlier file name.
        std::fs::write(
            dir.path().join("b.ini"),
            "Armor Plating\n  Armor = DEFAULT 80%\nEnd\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("z.ini"),
            "Object Tank\n  Armor = Plating\nEnd\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("readme.txt"), "not configuration").unwrap();
        let sub = dir.path().join("extra");
        std::fs::create_dir(&sub).unwrap();
        std::fs::write(sub.join("c.ini"), "FXList FX_Spark\nEnd\n").unwrap();

        let mut catalog = Catalog::new();
        load_directory(dir.path(), false, LoadType::Overwrite, &mut catalog).unwrap();
        assert!(catalog.objects.find("Tank").is_some());
        assert!(catalog.fx_lists.find("FX_Spark").is_none());

        let mut catalog = Catalog::new();
        load_directory(dir.path(), true, LoadType::Overwrite, &mut catalog).unwrap();
        assert!(catalog.fx_lists.find("FX_Spark").is_some());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let mut catalog = Catalog::new();
        let err = load_directory(
            std::path::Path::new("/no/such/dir"),
            false,
            LoadType::Overwrite,
            &mut catalog,
        )
        .unwrap_err();
        assert!(matches!(err.kind, IniErrorKind::InvalidDirectory(_)));
    }
}
