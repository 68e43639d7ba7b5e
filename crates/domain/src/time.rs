//! Time and timestamp helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp assigned to canonical events at decode time.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}
