//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod record;

pub use record::{NewRecord, Record, RecordId, RecordPatch};
