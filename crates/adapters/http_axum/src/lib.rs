//! # rfbridge-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve `GET /sensor/{instance}/{tag}` — the latest cached reading for a
//!   sensor key, or 404 when none has been observed yet
//! - Serve `/health` for liveness probes
//! - Log each request/response through the `tracing` ecosystem
//!
//! The adapter is read-only: it never writes to the cache and knows nothing
//! about the pipeline feeding it.
//!
//! ## Dependency rule
//! Depends on `rfbridge-app` (cache) and `rfbridge-domain` (identifier
//! types). Never leaks axum types into the domain.

pub mod api;
pub mod router;
