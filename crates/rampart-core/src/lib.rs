//! Core types for Rampart: frame math, the template model, the template
//! catalog, and versioned binary transfer.
//!
//! This crate defines the data model that the INI reader populates and the
//! simulation consumes. It is independent of the parser — you can construct
//! a [`Catalog`] programmatically or load one from configuration files.

/// The template catalog: per-type stores with override layering.
pub mod catalog;
/// Frame-rate constants and authored-unit to simulation-unit conversions.
pub mod frames;
/// Small geometry and color value types.
pub mod geometry;
/// Identifier newtypes for objects and templates.
pub mod id;
/// Kind-of classification flags for object templates.
pub mod kindof;
/// Shared per-template module configuration (the "module data").
pub mod module_data;
/// Entity templates: objects, weapons, armor, and effect lists.
pub mod template;
/// Versioned binary transfer: save, load, and CRC over one byte contract.
pub mod xfer;

/// Re-export of the catalog and load-mode types.
pub use catalog::{Catalog, LoadType, TemplateStore};
/// Re-export of the frame alias and the never-wake sentinel.
pub use frames::{FOREVER, Frame};
/// Re-export of geometry value types.
pub use geometry::{Coord3D, RgbColor};
/// Re-export of identifier newtypes.
pub use id::{ArmorTemplateId, FxListId, ObjectId, ObjectTemplateId, WeaponTemplateId};
/// Re-export of the kind-of flag set.
pub use kindof::{KINDOF_NAMES, KindFlags};
/// Re-export of the module-data union.
pub use module_data::ModuleData;
/// Re-export of template types.
pub use template::{ArmorTemplate, FxList, ObjectTemplate, WeaponTemplate};
/// Re-export of transfer types.
pub use xfer::{Snapshot, Xfer, XferCrc, XferError, XferLoad, XferMode, XferResult, XferSave};
