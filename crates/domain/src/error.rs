//! Domain-level parse errors.
//!
//! These cover field values that fail to map into domain types (unknown
//! reading tags, unrecognized switch state tokens). They are *not* used for
//! the recoverable pipeline categories (decode failure, unknown model,
//! identity miss) — those are logged and dropped at the pipeline level, not
//! propagated.

/// A field value that could not be parsed into a domain type.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A reading tag outside `temperature` / `humidity`.
    #[error("unknown reading tag {0:?}")]
    UnknownTag(String),

    /// A switch state token outside the `on` / `off` set.
    #[error("unknown switch state {0:?}")]
    UnknownSwitchState(String),
}
