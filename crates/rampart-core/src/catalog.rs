//! The template catalog: one store per template type, with the three load
//! semantics and override layering.
//!
//! The catalog is an explicit context object, constructed at startup and
//! passed to the reader and to any converter that resolves cross-references.
//! It is mutated only while configuration loads; the simulation holds it
//! behind an `Arc` and treats it as immutable.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::template::{ArmorTemplate, FxList, ObjectTemplate, Template, WeaponTemplate};

/// How a load call treats blocks whose name already exists in a store.
/// Exactly one of these applies to every block of a given load call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadType {
    /// Find-or-create; an existing entry keeps its id but its content is
    /// fully reset before re-parsing.
    Overwrite,
    /// Always create a brand-new entry layered over any existing base of
    /// the same name. Lookups resolve to the override; the base survives.
    CreateOverride,
    /// Find-or-create; an existing entry keeps its content and parsing
    /// accretes additional fields into it.
    MultiFile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Entry<T> {
    value: T,
    /// The entry this one overrides, when created by [`LoadType::CreateOverride`].
    base: Option<u32>,
}

/// A name-indexed store of one template type.
///
/// Entries are never removed; ids stay valid for the life of the store, so
/// overwriting a template in place does not invalidate references parsed
/// earlier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateStore<T: Template> {
    entries: Vec<Entry<T>>,
    /// Lowercased name to current (most-overriding) entry index.
    by_name: HashMap<String, u32>,
}

impl<T: Template> Default for TemplateStore<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            by_name: HashMap::new(),
        }
    }
}

impl<T: Template> TemplateStore<T> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries, counting overrides separately.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the store has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a name, case-insensitive. Resolves to the newest override.
    pub fn find(&self, name: &str) -> Option<T::Id> {
        self.by_name
            .get(&name.to_ascii_lowercase())
            .map(|&idx| T::make_id(idx))
    }

    /// Look up the original, pre-override entry for a name. Equal to
    /// [`TemplateStore::find`] when the name was never overridden.
    pub fn find_base(&self, name: &str) -> Option<T::Id> {
        let mut idx = *self.by_name.get(&name.to_ascii_lowercase())?;
        while let Some(base) = self.entries[idx as usize].base {
            idx = base;
        }
        Some(T::make_id(idx))
    }

    /// Fetch a template by id.
    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.entries.get(T::raw_id(id) as usize).map(|e| &e.value)
    }

    /// Iterate over all entries in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (T::Id, &T)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(idx, e)| (T::make_id(idx as u32), &e.value))
    }

    /// Open a block for parsing under the given load semantics. Returns the
    /// entry id and the value the parser should populate; the value must be
    /// handed back through [`TemplateStore::end_block`].
    pub fn begin_block(&mut self, name: &str, mode: LoadType) -> (T::Id, T) {
        let key = name.to_ascii_lowercase();
        match mode {
            LoadType::Overwrite => match self.by_name.get(&key) {
                Some(&idx) => {
                    // Same id, fresh content: outstanding references stay
                    // valid while the old bindings are discarded.
                    self.entries[idx as usize].value = T::default();
                    let mut value = T::default();
                    value.set_name(name);
                    (T::make_id(idx), value)
                }
                None => self.push_new(name, key, None),
            },
            LoadType::CreateOverride => {
                let base = self.by_name.get(&key).copied();
                self.push_new(name, key, base)
            }
            LoadType::MultiFile => match self.by_name.get(&key) {
                Some(&idx) => {
                    let value = std::mem::take(&mut self.entries[idx as usize].value);
                    (T::make_id(idx), value)
                }
                None => self.push_new(name, key, None),
            },
        }
    }

    /// Store the parsed value back into the entry opened by
    /// [`TemplateStore::begin_block`].
    pub fn end_block(&mut self, id: T::Id, value: T) {
        self.entries[T::raw_id(id) as usize].value = value;
    }

    fn push_new(&mut self, name: &str, key: String, base: Option<u32>) -> (T::Id, T) {
        let idx = self.entries.len() as u32;
        self.entries.push(Entry {
            value: T::default(),
            base,
        });
        self.by_name.insert(key, idx);
        let mut value = T::default();
        value.set_name(name);
        (T::make_id(idx), value)
    }
}

/// All template stores, one per block type the reader understands.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Object templates, from `Object` blocks.
    pub objects: TemplateStore<ObjectTemplate>,
    /// Weapon templates, from `Weapon` blocks.
    pub weapons: TemplateStore<WeaponTemplate>,
    /// Armor templates, from `Armor` blocks.
    pub armors: TemplateStore<ArmorTemplate>,
    /// Effect lists, from `FXList` blocks.
    pub fx_lists: TemplateStore<FxList>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }
}
