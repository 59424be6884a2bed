//! Strongly-typed identifiers.

use std::fmt;

/// Identifies a body within a [`Scene`](crate::Scene).
///
/// `BodyId(n)` is the n-th body in scene order. Ids are positional:
/// they stay valid across a structural clone of the scene, which is
/// what keeps attractor references inside a snapshot pointing at the
/// snapshot's own bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

impl BodyId {
    /// Position of the body in its scene.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for BodyId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
