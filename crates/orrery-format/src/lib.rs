//! Plain-text scene files for Orrery simulations.
//!
//! Reads scene descriptions into typed [`Scene`](orrery_core::Scene)
//! values and writes them back out. One body per line; blank lines and
//! `#` comments are ignored.
//!
//! # Architecture
//!
//! - [`codec`] maps single lines to and from [`CelestialBody`](orrery_core::CelestialBody)
//! - [`SceneReader`] streams bodies from any `BufRead` source
//! - [`SceneWriter`] streams bodies to any `Write` sink
//! - [`load`] and [`save`] open files and drive the reader/writer
//!
//! # Format
//!
//! ```text
//! # keyword R    color  m           x         y    Vx   Vy       name
//! Star      30   yellow 1.98892e30  0         0    0    0        Sun
//! Planet    5    blue   5.974e24    149.6e9   0    0    29.76e3  Earth
//! ```
//!
//! Written lines carry only the first eight fields: the name is read
//! but never written back.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod reader;
pub mod types;
pub mod writer;

pub use codec::{classify, format_body, parse_body, parse_line};
pub use error::FormatError;
pub use reader::{load, Bodies, SceneReader};
pub use types::{LineKind, SkippedRecord};
pub use writer::{save, SceneWriter};

/// Character that starts a comment line.
pub const COMMENT_PREFIX: char = '#';

/// Number of whitespace-separated tokens a record line must carry.
pub const RECORD_TOKENS: usize = 9;
