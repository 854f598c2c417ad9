//! Common types

use chrono::{DateTime, Utc};

/// Auto-incrementing primary key shared by every table.
pub type EntityId = i32;

pub type Timestamp = DateTime<Utc>;

pub fn now() -> Timestamp {
    Utc::now()
}
