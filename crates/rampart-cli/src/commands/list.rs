use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use rampart_core::Catalog;

struct Row {
    name: String,
    kind: &'static str,
    detail: String,
}

pub fn run(dir: &Path, kind: Option<&str>, json: bool) -> Result<(), String> {
    let catalog = super::load_catalog(dir)?;

    let kind = match kind {
        None => None,
        Some(k) => Some(match k.to_ascii_lowercase().as_str() {
            "object" | "objects" => "object",
            "weapon" | "weapons" => "weapon",
            "armor" | "armors" => "armor",
            "fx" | "fxlist" | "fxlists" => "fx",
            other => return Err(format!("unknown template kind '{other}'")),
        }),
    };

    let rows = collect_rows(&catalog, kind);

    if json {
        let entries: Vec<serde_json::Value> = rows
            .iter()
            .map(|row| {
                serde_json::json!({
                    "name": row.name,
                    "kind": row.kind,
                    "detail": row.detail,
                })
            })
            .collect();
        let text = serde_json::to_string_pretty(&entries)
            .map_err(|e| format!("JSON encoding failed: {e}"))?;
        println!("{text}");
        return Ok(());
    }

    if rows.is_empty() {
        println!("  No templates found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Kind", "Detail"]);
    for row in &rows {
        table.add_row(vec![row.name.as_str(), row.kind, row.detail.as_str()]);
    }

    println!("{table}");
    println!();
    println!("  {} templates", rows.len());

    Ok(())
}

fn collect_rows(catalog: &Catalog, kind: Option<&str>) -> Vec<Row> {
    let mut rows = Vec::new();
    let wants = |k: &str| kind.is_none_or(|filter| filter == k);

    if wants("object") {
        for (_, tmpl) in catalog.objects.iter() {
            rows.push(Row {
                name: tmpl.name.clone(),
                kind: "object",
                detail: format!(
                    "health {}, {} modules",
                    tmpl.max_health,
                    tmpl.modules.len()
                ),
            });
        }
    }
    if wants("weapon") {
        for (_, tmpl) in catalog.weapons.iter() {
            rows.push(Row {
                name: tmpl.name.clone(),
                kind: "weapon",
                detail: format!(
                    "damage {}, range {}",
                    tmpl.primary_damage, tmpl.attack_range
                ),
            });
        }
    }
    if wants("armor") {
        for (_, tmpl) in catalog.armors.iter() {
            rows.push(Row {
                name: tmpl.name.clone(),
                kind: "armor",
                detail: format!("{} coefficients", tmpl.coefficients.len()),
            });
        }
    }
    if wants("fx") {
        for (_, tmpl) in catalog.fx_lists.iter() {
            rows.push(Row {
                name: tmpl.name.clone(),
                kind: "fx",
                detail: format!("{} particle systems", tmpl.particle_systems.len()),
            });
        }
    }
    rows
}
