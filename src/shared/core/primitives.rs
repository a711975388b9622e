// Primitive types shared by every entity in the crate.
//
// Purpose
// - Name the identifier and timestamp representations once.
//
// Boundaries
// - Identifiers are plain integers assigned by the store. Zero is never handed out
//   and means "unset" when used as a foreign key.

use chrono::{DateTime, Utc};

pub type EntityId = i64;

pub const UNSET_ID: EntityId = 0;

pub type Timestamp = DateTime<Utc>;

pub fn now() -> Timestamp {
    Utc::now()
}
