//! Orrery: scene persistence and snapshot statistics for small N-body simulations.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Orrery sub-crates. For most users, adding `orrery` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use orrery::prelude::*;
//!
//! let text = "\
//! Star 30 yellow 1.98892E30 0 0 0 0 Sun
//! Planet 5 blue 5.974E24 149.60E9 0 0 29.76E3 Earth
//! ";
//! let mut scene = SceneReader::new(text.as_bytes()).read_scene().unwrap();
//!
//! // The physics side decides who orbits whom and keeps the clock.
//! let sun = scene.by_name("Sun").unwrap();
//! let earth = scene.by_name("Earth").unwrap();
//! scene.set_attractor(earth, sun).unwrap();
//! scene.get_mut(sun).unwrap().time = Some(86_400.0);
//!
//! let mut cache = SnapshotCache::new();
//! cache.capture(&scene);
//!
//! let mut out = Vec::new();
//! StatsReporter::default().write_report(&cache, &mut out).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "1\n1 day\nDistance from Earth to Sun is 149600000.0 km\n",
//! );
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `orrery-core` | Bodies, scenes, ids, scene errors |
//! | [`format`] | `orrery-format` | Scene file codec, reader, writer |
//! | [`stats`] | `orrery-stats` | Snapshot cache and statistics reports |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core body and scene types (`orrery-core`).
pub use orrery_core as types;

/// Plain-text scene files (`orrery-format`).
///
/// [`format::load`] and [`format::save`] cover whole files;
/// [`format::SceneReader`] and [`format::SceneWriter`] stream.
pub use orrery_format as format;

/// Snapshot cache and statistics reports (`orrery-stats`).
pub use orrery_stats as stats;

/// Common imports for typical usage.
///
/// ```rust
/// use orrery::prelude::*;
/// ```
pub mod prelude {
    pub use orrery_core::{BodyField, BodyId, BodyKind, CelestialBody, Scene, SceneError};
    pub use orrery_format::{
        format_body, load, parse_body, parse_line, save, FormatError, SceneReader, SceneWriter,
    };
    pub use orrery_stats::{
        format_distance, format_duration, report, ReportConfig, Snapshot, SnapshotCache,
        StatsError, StatsReporter,
    };
}
