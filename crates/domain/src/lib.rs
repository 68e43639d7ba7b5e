//! # rfbridge-domain
//!
//! Pure domain model for the rfbridge sensor receiver.
//!
//! ## Responsibilities
//! - Foundational types: logical instance identifiers, error conventions,
//!   timestamps
//! - Define **raw records** (one decoded line of rtl_433 JSON output) and the
//!   typed per-family field sets extracted from them
//! - Define **canonical events** ([`Reading`](reading::Reading) and
//!   [`SwitchEvent`](switch::SwitchEvent)) produced after classification and
//!   identity resolution
//! - Derive publish topics deterministically from event identity
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod instance;
pub mod time;

pub mod event;
pub mod reading;
pub mod record;
pub mod switch;
