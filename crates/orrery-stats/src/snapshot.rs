//! Owned point-in-time copies of a scene.

use orrery_core::{CelestialBody, Scene};

/// A deep copy of a [`Scene`] taken at one simulation instant.
///
/// The copy owns its bodies outright; attractor ids resolve against the
/// copied bodies, never the live scene.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    sequence: u64,
    scene: Scene,
}

impl Snapshot {
    pub(crate) fn capture(sequence: u64, scene: &Scene) -> Self {
        Self {
            sequence,
            scene: scene.clone(),
        }
    }

    /// Zero-based capture order within its cache.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// The copied scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Elapsed simulation time carried by the first timed body.
    pub fn reference_time(&self) -> Option<f64> {
        self.scene.reference_time()
    }

    /// Reference time as whole seconds.
    ///
    /// Fractions are dropped. Missing, negative, or non-finite times
    /// count as zero.
    pub fn elapsed_seconds(&self) -> u64 {
        match self.reference_time() {
            Some(t) if t.is_finite() && t > 0.0 => t.floor() as u64,
            _ => 0,
        }
    }

    /// Bodies paired with an attractor heavier than themselves.
    ///
    /// Bodies without an attractor, or whose attractor is not heavier,
    /// are left out. Yields `(satellite, attractor)` in scene order.
    pub fn satellites(&self) -> impl Iterator<Item = (&CelestialBody, &CelestialBody)> + '_ {
        self.scene.enumerate().filter_map(move |(id, body)| {
            let attractor = self.scene.attractor_of(id)?;
            (attractor.mass > body.mass).then_some((body, attractor))
        })
    }
}
