//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside
//! world. They are defined here (in `app`) so that both the pipeline and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod line_source;
pub mod sink;

pub use line_source::LineSource;
pub use sink::{EventSink, SinkError};
