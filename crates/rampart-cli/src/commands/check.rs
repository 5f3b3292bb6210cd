use std::path::Path;

use colored::Colorize;

pub fn run(dir: &Path) -> Result<(), String> {
    let catalog = super::load_catalog(dir)?;

    println!("  {} '{}'", "ok".green().bold(), dir.display());
    println!(
        "  {} objects, {} weapons, {} armors, {} fx lists",
        catalog.objects.len(),
        catalog.weapons.len(),
        catalog.armors.len(),
        catalog.fx_lists.len()
    );

    Ok(())
}
