//! Ordered collection of bodies.

use std::slice;

use crate::body::CelestialBody;
use crate::error::SceneError;
use crate::id::BodyId;

/// An ordered sequence of bodies.
///
/// Insertion order is preserved and is the iteration order used by
/// writers and reports. Attractors are stored as [`BodyId`] positions
/// into the same scene, so `clone()` yields a self-consistent deep copy:
/// every attractor in the copy resolves to the copied body.
///
/// # Examples
///
/// ```
/// use orrery_core::{BodyKind, CelestialBody, Scene};
///
/// let mut scene = Scene::new();
/// let sun = scene.push(CelestialBody::new(BodyKind::Star, "Sun").with_mass(2e30));
/// let earth = scene.push(CelestialBody::new(BodyKind::Planet, "Earth").with_mass(6e24));
/// scene.set_attractor(earth, sun).unwrap();
///
/// assert_eq!(scene.attractor_of(earth).unwrap().name, "Sun");
/// assert_eq!(scene.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    bodies: Vec<CelestialBody>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty scene with room for `capacity` bodies.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bodies: Vec::with_capacity(capacity),
        }
    }

    /// Append a body, returning its id.
    pub fn push(&mut self, body: CelestialBody) -> BodyId {
        let id = BodyId(self.bodies.len() as u32);
        self.bodies.push(body);
        id
    }

    /// Number of bodies.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the scene has no bodies.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Look up a body by id.
    pub fn get(&self, id: BodyId) -> Option<&CelestialBody> {
        self.bodies.get(id.index())
    }

    /// Mutable access to a body by id.
    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut CelestialBody> {
        self.bodies.get_mut(id.index())
    }

    /// All bodies in scene order.
    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    /// Iterate bodies in scene order.
    pub fn iter(&self) -> slice::Iter<'_, CelestialBody> {
        self.bodies.iter()
    }

    /// Iterate bodies mutably in scene order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, CelestialBody> {
        self.bodies.iter_mut()
    }

    /// Iterate `(id, body)` pairs in scene order.
    pub fn enumerate(&self) -> impl Iterator<Item = (BodyId, &CelestialBody)> + '_ {
        self.bodies
            .iter()
            .enumerate()
            .map(|(i, body)| (BodyId(i as u32), body))
    }

    /// Declare that `body` orbits `attractor`.
    ///
    /// Both ids must name bodies in this scene.
    pub fn set_attractor(&mut self, body: BodyId, attractor: BodyId) -> Result<(), SceneError> {
        let len = self.bodies.len();
        if attractor.index() >= len {
            return Err(SceneError::BodyOutOfRange { id: attractor, len });
        }
        let target = self
            .bodies
            .get_mut(body.index())
            .ok_or(SceneError::BodyOutOfRange { id: body, len })?;
        target.attractor = Some(attractor);
        Ok(())
    }

    /// The body that `id` orbits, if it has one and it is in this scene.
    pub fn attractor_of(&self, id: BodyId) -> Option<&CelestialBody> {
        let attractor = self.get(id)?.attractor?;
        self.get(attractor)
    }

    /// Id of the first body with the given name.
    ///
    /// Names are not required to be unique.
    pub fn by_name(&self, name: &str) -> Option<BodyId> {
        self.bodies
            .iter()
            .position(|body| body.name == name)
            .map(|i| BodyId(i as u32))
    }

    /// Elapsed time carried by the first body that tracks time.
    pub fn reference_time(&self) -> Option<f64> {
        self.bodies.iter().find_map(|body| body.time)
    }
}

impl FromIterator<CelestialBody> for Scene {
    fn from_iter<I: IntoIterator<Item = CelestialBody>>(iter: I) -> Self {
        Self {
            bodies: iter.into_iter().collect(),
        }
    }
}

impl Extend<CelestialBody> for Scene {
    fn extend<I: IntoIterator<Item = CelestialBody>>(&mut self, iter: I) {
        self.bodies.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a CelestialBody;
    type IntoIter = slice::Iter<'a, CelestialBody>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.iter()
    }
}

impl IntoIterator for Scene {
    type Item = CelestialBody;
    type IntoIter = std::vec::IntoIter<CelestialBody>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.into_iter()
    }
}
