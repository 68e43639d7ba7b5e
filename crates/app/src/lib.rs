//! # rfbridge-app
//!
//! Application layer — the ingestion pipeline and **port definitions**.
//!
//! ## Responsibilities
//! - Define **port traits** that adapters implement:
//!   - [`LineSource`](ports::LineSource) — the subprocess's output stream
//!   - [`EventSink`](ports::EventSink) — downstream consumers of canonical
//!     events (cache, broker publisher, future sinks)
//! - Resolve raw protocol ids to stable instances ([`resolver`])
//! - Classify records by model tag ([`dispatch`]) and normalize them into
//!   canonical events ([`normalize`])
//! - Drive the sequential line loop and fan events out to every sink
//!   ([`pipeline`])
//! - Provide **in-process infrastructure** that doesn't need IO: the
//!   latest-value cache ([`latest_cache`])
//!
//! ## Dependency rule
//! Depends on `rfbridge-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod dispatch;
pub mod latest_cache;
pub mod normalize;
pub mod pipeline;
pub mod ports;
pub mod resolver;
