//! Core types for the Orrery simulation toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the record shapes shared across the Orrery workspace: body
//! identifiers, the [`CelestialBody`] record, the ordered [`Scene`]
//! container, and scene-level error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod body;
pub mod error;
pub mod id;
pub mod scene;

pub use body::{BodyField, BodyKind, CelestialBody};
pub use error::SceneError;
pub use id::BodyId;
pub use scene::Scene;
