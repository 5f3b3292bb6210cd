pub mod check;
pub mod list;
pub mod run;
pub mod show;

use std::path::Path;

use rampart_core::{Catalog, LoadType};

/// Load every .ini file under `dir` (recursively, in sorted order) into a
/// fresh catalog. The first configuration error is rendered as a miette
/// report with its file/line/near context.
fn load_catalog(dir: &Path) -> Result<Catalog, String> {
    let mut catalog = Catalog::new();
    match rampart_ini::load_directory(dir, true, LoadType::Overwrite, &mut catalog) {
        Ok(()) => Ok(catalog),
        Err(err) => {
            let report = miette::Report::new(err);
            eprintln!("{report:?}");
            Err("configuration failed to load".into())
        }
    }
}
