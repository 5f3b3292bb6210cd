use rampart_core::{ObjectId, XferError};

/// Alias for `Result<T, LogicError>`.
pub type LogicResult<T> = Result<T, LogicError>;

/// Errors raised by the simulation core.
#[derive(Debug, thiserror::Error)]
pub enum LogicError {
    /// A spawn named a template the catalog does not hold.
    #[error("unknown object template \"{0}\"")]
    UnknownTemplate(String),

    /// An operation named an object that does not exist (or no longer
    /// exists).
    #[error("unknown object {0}")]
    UnknownObject(ObjectId),

    /// A template attached a module whose required companion module is
    /// missing. Caught at object construction; the configuration is
    /// unusable.
    #[error(
        "template \"{template}\" has module \"{module}\" without required companion \"{companion}\""
    )]
    MissingCompanionModule {
        /// The template with the broken composition.
        template: String,
        /// The module declaring the requirement.
        module: &'static str,
        /// The companion module that is missing.
        companion: &'static str,
    },

    /// A save/load/CRC transfer failed.
    #[error(transparent)]
    Xfer(#[from] XferError),
}
