//! The structured "bad declarative-config data" error.
//!
//! Callers historically needed only one coarse failure signal, but the
//! distinct enumerators are kept so failure modes can be told apart if that
//! ever changes. Unlike the coarse signal, the diagnostic context — file,
//! line, offending buffer content — rides on the error value itself in
//! every build configuration.

use std::path::{Path, PathBuf};

/// Alias for `Result<T, IniError>`.
pub type IniResult<T> = Result<T, IniError>;

/// Every distinct way an INI load can fail. All of these surface to
/// callers as one [`IniError`]; the variants exist to be matched on, not
/// to carry different payloads of context.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IniErrorKind {
    /// The directory handed to a directory load does not exist or cannot
    /// be enumerated.
    #[error("invalid directory: {0}")]
    InvalidDirectory(String),

    /// The file could not be opened or read.
    #[error("cannot open file: {0}")]
    CannotOpenFile(String),

    /// A load was requested on a reader that already has a file open.
    /// Structurally unreachable here (a reader is built per load call) but
    /// the failure mode is part of the contract.
    #[error("file already open")]
    FileAlreadyOpen,

    /// A top-level block keyword matched no registered block type.
    #[error("unknown block \"{0}\"")]
    UnknownBlock(String),

    /// A module name matched no registered module type.
    #[error("unknown module \"{0}\"")]
    UnknownModule(String),

    /// A field key matched no entry in the active field tables.
    #[error("unknown field \"{0}\"")]
    UnknownField(String),

    /// A value token failed to scan as the expected type, or a required
    /// token was missing.
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// A `Tag:Value` pair carried the wrong tag.
    #[error("expected sub-token \"{expected}\", found \"{found}\"")]
    InvalidSubToken {
        /// The tag the field requires.
        expected: String,
        /// The tag actually present.
        found: String,
    },

    /// A name token did not resolve against the catalog and the `None`
    /// sentinel was not permitted or not used.
    #[error("unknown {kind} \"{name}\"")]
    UnknownReference {
        /// What the name was expected to resolve to.
        kind: &'static str,
        /// The unresolved name.
        name: String,
    },

    /// An index or flag lookup was handed an empty name list.
    #[error("invalid name list")]
    InvalidNameList,

    /// End of file arrived before the block's `End` token.
    #[error("missing \"End\" token")]
    MissingEndToken,

    /// A physical line exceeded the fixed line buffer.
    #[error("line exceeds maximum length")]
    BufferTooSmall,

    /// A field-table composition exceeded its fixed capacity.
    #[error("too many field tables in composition")]
    TooManyFieldTables,

    /// An internal invariant failed; indicates a programming error, not
    /// bad data.
    #[error("internal error: {0}")]
    Bug(String),
}

/// An INI failure with the context needed to report it precisely: the
/// failing file, the line number, and the offending buffer content.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
#[error("bad INI data: {kind} [{}:{line}, near \"{near}\"]", file.display())]
pub struct IniError {
    /// Which failure mode occurred.
    pub kind: IniErrorKind,
    /// The file being parsed when the failure occurred.
    pub file: PathBuf,
    /// One-based line number of the failure.
    pub line: u32,
    /// The line buffer content at the point of failure.
    pub near: String,
}

impl IniError {
    /// Build an error with full positional context.
    pub fn new(kind: IniErrorKind, file: &Path, line: u32, near: &str) -> Self {
        Self {
            kind,
            file: file.to_path_buf(),
            line,
            near: near.trim().to_string(),
        }
    }

    /// Build an error tied to a file but no particular line, for failures
    /// before or outside parsing (open failures, bad directories).
    pub fn at_file(kind: IniErrorKind, file: &Path) -> Self {
        Self::new(kind, file, 0, "")
    }

    /// Build an error with no positional context at all, for programming
    /// errors raised while composing field tables.
    pub fn bare(kind: IniErrorKind) -> Self {
        Self::new(kind, Path::new("<none>"), 0, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_carries_context() {
        let err = IniError::new(
            IniErrorKind::UnknownField("BogusField".to_string()),
            Path::new("data/object.ini"),
            17,
            "  BogusField = 5",
        );
        let text = err.to_string();
        assert!(text.contains("BogusField"));
        assert!(text.contains("object.ini"));
        assert!(text.contains(":17"));
    }

    #[test]
    fn kinds_stay_distinct() {
        assert_ne!(
            IniErrorKind::MissingEndToken,
            IniErrorKind::BufferTooSmall
        );
    }
}
