//! rtl_433 adapter error types.

/// Errors specific to the rtl_433 adapter.
#[derive(Debug, thiserror::Error)]
pub enum Rtl433Error {
    /// The decoder subprocess could not be started.
    #[error("failed to spawn decoder subprocess")]
    Spawn(#[source] std::io::Error),

    /// The spawned subprocess has no stdout pipe to read from.
    #[error("decoder subprocess has no stdout pipe")]
    MissingStdout,
}
