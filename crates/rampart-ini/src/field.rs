//! Field-parse tables and the multi-table composer.
//!
//! A field table maps a textual key to the action that parses its value
//! into the target struct. Tables are static data; an entity type whose
//! schema extends another's composes both tables into one
//! [`MultiFieldParse`], base first, so the reader dispatches every field
//! key through a single lookup. Embedded base fields are reached through an
//! accessor function rather than a byte offset, which removes the
//! base-must-be-first-member layout coupling entirely.

use rampart_core::Catalog;

use crate::error::{IniError, IniErrorKind, IniResult};
use crate::ini::Ini;

/// The uniform signature of a field-parse action: free to pull additional
/// tokens from the reader, must consume exactly the tokens its field
/// documents.
pub type FieldAction<T> = fn(&mut Ini<'_>, &mut T, &Catalog) -> IniResult<()>;

/// One field-table entry: a key and the action that parses its value.
pub struct FieldParse<T: 'static> {
    /// The field key as authored in configuration files.
    pub token: &'static str,
    /// The parse action bound to the key.
    pub action: FieldAction<T>,
}

/// Most compositions hold one or two tables; the bound only exists to
/// catch runaway recursive registration.
pub const MAX_FIELD_TABLES: usize = 16;

type AdaptedAction<T> = Box<dyn Fn(&mut Ini<'_>, &mut T, &Catalog) -> IniResult<()>>;

struct AdaptedField<T> {
    token: &'static str,
    action: AdaptedAction<T>,
}

enum TableRef<T: 'static> {
    Static(&'static [FieldParse<T>]),
    Adapted(Vec<AdaptedField<T>>),
}

/// An ordered composition of field tables for one target type. Lookup
/// scans tables in registration order; the first key match wins.
pub struct MultiFieldParse<T: 'static> {
    tables: Vec<TableRef<T>>,
}

impl<T> Default for MultiFieldParse<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MultiFieldParse<T> {
    /// Create an empty composition.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Append a table whose entries act directly on the target type.
    pub fn add(&mut self, table: &'static [FieldParse<T>]) -> IniResult<()> {
        self.check_capacity()?;
        self.tables.push(TableRef::Static(table));
        Ok(())
    }

    /// Append a table defined for an embedded struct, reached through the
    /// given accessor. This is how a base schema contributes its fields to
    /// a derived type's composition.
    pub fn add_adapted<U: 'static>(
        &mut self,
        table: &'static [FieldParse<U>],
        lens: fn(&mut T) -> &mut U,
    ) -> IniResult<()> {
        self.check_capacity()?;
        let adapted = table
            .iter()
            .map(|entry| {
                let action = entry.action;
                AdaptedField {
                    token: entry.token,
                    action: Box::new(move |ini: &mut Ini<'_>, target: &mut T, catalog: &Catalog| {
                        action(ini, lens(target), catalog)
                    }) as AdaptedAction<T>,
                }
            })
            .collect();
        self.tables.push(TableRef::Adapted(adapted));
        Ok(())
    }

    /// Number of registered tables.
    pub fn count(&self) -> usize {
        self.tables.len()
    }

    /// Dispatch a field key. Returns `None` when no table knows the key;
    /// otherwise runs the bound action and returns its result.
    pub fn apply(
        &self,
        token: &str,
        ini: &mut Ini<'_>,
        target: &mut T,
        catalog: &Catalog,
    ) -> Option<IniResult<()>> {
        for table in &self.tables {
            match table {
                TableRef::Static(entries) => {
                    for entry in *entries {
                        if entry.token.eq_ignore_ascii_case(token) {
                            return Some((entry.action)(ini, target, catalog));
                        }
                    }
                }
                TableRef::Adapted(entries) => {
                    for entry in entries {
                        if entry.token.eq_ignore_ascii_case(token) {
                            return Some((entry.action)(ini, target, catalog));
                        }
                    }
                }
            }
        }
        None
    }

    fn check_capacity(&self) -> IniResult<()> {
        if self.tables.len() >= MAX_FIELD_TABLES {
            return Err(IniError::bare(IniErrorKind::TooManyFieldTables));
        }
        Ok(())
    }
}
