//! Terminal reporting
//!
//! Line-oriented status output for humans, NDJSON events for machines.

pub mod diff;
pub mod json;
pub mod report;
pub mod terminal;
pub mod theme;
