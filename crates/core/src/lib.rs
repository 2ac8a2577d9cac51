//! Pure domain logic for the UI-string bulk updater.
//!
//! This crate has no database, async, or I/O dependencies. It provides:
//!
//! - The update record model and its business-key invariants
//! - The clipboard table parser (records + ordered rejections)
//! - Update outcome classification and per-environment counters
//! - The backup snapshot model, document schema, and file naming

pub mod outcome;
pub mod parser;
pub mod record;
pub mod snapshot;
pub mod types;
