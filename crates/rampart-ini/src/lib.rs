//! Declarative INI reader for Rampart.
//!
//! Hundreds of loosely-typed text configuration files become strongly-typed
//! templates in a [`rampart_core::Catalog`]. A file is a sequence of blocks;
//! a block opens with `<Keyword> <Name>`, closes with `End`, and every line
//! between carries a field key and its value tokens. Unknown blocks and
//! unknown field keys are errors, never warnings — strictness is what
//! catches typos in data files.
//!
//! Tokenization is context-sensitive: different field types legitimately
//! embed different delimiter characters (`50%`, `R:100`, quoted strings),
//! so the token primitives take a named separator set instead of a global
//! grammar. That is why this is a hand-rolled line reader and not a lexer.

/// Block dispatch and the field tables for every template type.
pub mod blocks;
/// The structured INI error with its full enumerator taxonomy.
pub mod error;
/// Field-parse tables and the multi-table composer.
pub mod field;
/// The line reader, tokenizer, and generic block-body driver.
pub mod ini;
/// Pure token scanners.
pub mod scan;

/// Re-export of error types.
pub use error::{IniError, IniErrorKind, IniResult};
/// Re-export of the field-table types.
pub use field::{FieldParse, MultiFieldParse};
/// Re-export of the reader, its separator sets, and the directory loader.
pub use ini::{Ini, MAX_LINE_LEN, Seps, load_directory};
