use std::path::Path;
use std::sync::Arc;

use colored::Colorize;
use rampart_core::template::Template;
use rampart_logic::{EventKind, GameLogic};

pub fn run(dir: &Path, frames: u32, seed: u64, spawn: &[String]) -> Result<(), String> {
    let catalog = Arc::new(super::load_catalog(dir)?);

    let spawn_names: Vec<String> = if spawn.is_empty() {
        catalog
            .objects
            .iter()
            .map(|(_, tmpl)| tmpl.name().to_string())
            .collect()
    } else {
        spawn.to_vec()
    };
    if spawn_names.is_empty() {
        println!("  No object templates to spawn. Nothing to run.");
        return Ok(());
    }

    let mut logic = GameLogic::new(catalog, seed);
    for name in &spawn_names {
        logic
            .spawn(name)
            .map_err(|e| format!("spawn failed: {e}"))?;
    }
    logic.run(frames);

    println!(
        "  {} '{}' {}",
        "Run".bold(),
        dir.display(),
        format!("({frames} frames, seed={seed})").dimmed()
    );
    println!(
        "  {} spawned, {} still alive, {} events",
        spawn_names.len(),
        logic.object_count(),
        logic.events().len()
    );
    println!();

    println!("  {}", "Event Log".bold().underline());
    for event in logic.events().events() {
        let frame_label = format!("[frame {:>4}]", event.frame).dimmed();
        let desc = match &event.kind {
            EventKind::Died { .. } => event.description.red().to_string(),
            EventKind::Healed { .. } => event.description.green().to_string(),
            EventKind::Damaged { .. } => event.description.yellow().to_string(),
            EventKind::Spawned { .. } => event.description.clone(),
        };
        println!("  {frame_label} {desc}");
    }
    if logic.events().is_empty() {
        println!("  {}", "(no events)".dimmed());
    }
    println!();

    let crc = logic
        .state_crc()
        .map_err(|e| format!("CRC computation failed: {e}"))?;
    println!("  final state CRC: {crc:08x}");

    Ok(())
}
