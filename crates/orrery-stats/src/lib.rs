//! Snapshot cache and statistics reports for Orrery simulations.
//!
//! The physics side captures the live [`Scene`](orrery_core::Scene) into a
//! caller-owned [`SnapshotCache`] at chosen instants; at output time the
//! [`StatsReporter`] turns every cached snapshot into an elapsed-time line
//! and one distance line per satellite.
//!
//! # Report format
//!
//! ```text
//! 2
//! 1 day 1 hour
//! Distance from Earth to Sun is 149600000.0 km
//! 2 days 2 hours
//! Distance from Earth to Sun is 149600012.0 km
//! ```
//!
//! The first line is the snapshot count. Each snapshot contributes its
//! time line followed by zero or more distance lines.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cache;
pub mod config;
pub mod error;
pub mod report;
pub mod snapshot;
pub mod units;

pub use cache::SnapshotCache;
pub use config::{ConfigError, ReportConfig};
pub use error::StatsError;
pub use report::{report, StatsReporter};
pub use snapshot::Snapshot;
pub use units::{body_distance, format_distance, format_duration, round_distance};
