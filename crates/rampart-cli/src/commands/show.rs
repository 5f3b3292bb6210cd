use std::path::Path;

use colored::Colorize;
use rampart_core::{Catalog, KINDOF_NAMES, ModuleData};

pub fn run(dir: &Path, name: &str) -> Result<(), String> {
    let catalog = super::load_catalog(dir)?;

    let id = catalog
        .objects
        .find(name)
        .ok_or_else(|| format!("no object template named '{name}'"))?;
    let tmpl = catalog
        .objects
        .get(id)
        .ok_or_else(|| format!("no object template named '{name}'"))?;

    println!("  {}", tmpl.name.bold());
    if !tmpl.side.is_empty() {
        println!("  side:         {}", tmpl.side);
    }
    println!("  health:       {}", tmpl.max_health);
    println!("  vision range: {}", tmpl.vision_range);
    println!("  kind of:      {}", kind_names(tmpl.kind_of.0));
    println!("  armor:        {}", resolve(&catalog, tmpl.armor));
    println!("  weapon:       {}", resolve(&catalog, tmpl.weapon));
    println!("  death fx:     {}", resolve(&catalog, tmpl.death_fx));

    if tmpl.modules.is_empty() {
        return Ok(());
    }
    println!();
    println!("  {}", "Modules".bold().underline());
    for slot in &tmpl.modules {
        let side = if slot.data.is_draw_module() {
            "draw"
        } else {
            "behavior"
        };
        println!(
            "  {} {} ({side})",
            slot.data.module_name().bold(),
            slot.tag.dimmed()
        );
        match &slot.data {
            ModuleData::AutoHeal(data) => {
                println!(
                    "      heals {} every {} frames, radius {}",
                    data.healing_amount, data.healing_delay, data.radius
                );
            }
            ModuleData::Lifetime(data) => {
                println!(
                    "      lifetime {}..={} frames",
                    data.min_frames, data.max_frames
                );
            }
            ModuleData::HealGlowDraw(data) => {
                println!("      glow fades over {} frames", data.fade_frames);
            }
        }
    }

    Ok(())
}

fn kind_names(bits: u32) -> String {
    let names: Vec<&str> = KINDOF_NAMES
        .iter()
        .enumerate()
        .filter(|&(index, _)| bits & (1 << index) != 0)
        .map(|(_, &name)| name)
        .collect();
    if names.is_empty() {
        "NONE".to_string()
    } else {
        names.join(" ")
    }
}

fn resolve<I: ResolvableId>(catalog: &Catalog, reference: Option<I>) -> String {
    match reference {
        Some(id) => id.name_in(catalog).unwrap_or("<missing>").to_string(),
        None => "None".to_string(),
    }
}

/// Name lookup for the typed ids an object template may reference.
trait ResolvableId {
    fn name_in(self, catalog: &Catalog) -> Option<&str>;
}

impl ResolvableId for rampart_core::ArmorTemplateId {
    fn name_in(self, catalog: &Catalog) -> Option<&str> {
        catalog.armors.get(self).map(|t| t.name.as_str())
    }
}

impl ResolvableId for rampart_core::WeaponTemplateId {
    fn name_in(self, catalog: &Catalog) -> Option<&str> {
        catalog.weapons.get(self).map(|t| t.name.as_str())
    }
}

impl ResolvableId for rampart_core::FxListId {
    fn name_in(self, catalog: &Catalog) -> Option<&str> {
        catalog.fx_lists.get(self).map(|t| t.name.as_str())
    }
}
