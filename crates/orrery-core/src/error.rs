//! Error types for scene manipulation.

use std::error::Error;
use std::fmt;

use crate::id::BodyId;

/// Errors from [`Scene`](crate::Scene) operations that reference bodies by id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SceneError {
    /// The id does not name a body in this scene.
    BodyOutOfRange {
        /// The offending id.
        id: BodyId,
        /// Number of bodies in the scene.
        len: usize,
    },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BodyOutOfRange { id, len } => {
                write!(f, "body {id} out of range for scene of {len} bodies")
            }
        }
    }
}

impl Error for SceneError {}
