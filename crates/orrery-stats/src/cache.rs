//! Append-only store of scene snapshots.
//!
//! [`SnapshotCache`] is owned by the caller and passed by reference to
//! both the capture site and the reporter. It never evicts: short
//! simulation runs are assumed, and callers control capture frequency.

use std::slice;

use orrery_core::Scene;

use crate::snapshot::Snapshot;

/// Ordered, unbounded sequence of [`Snapshot`]s.
///
/// # Examples
///
/// ```
/// use orrery_core::{BodyId, BodyKind, CelestialBody, Scene};
/// use orrery_stats::SnapshotCache;
///
/// let mut live: Scene = [CelestialBody::new(BodyKind::Star, "Sun")].into_iter().collect();
/// let mut cache = SnapshotCache::new();
///
/// cache.capture(&live);
/// live.get_mut(BodyId(0)).unwrap().x = 42.0;
/// cache.capture(&live);
///
/// assert_eq!(cache.len(), 2);
/// assert_eq!(cache.get(0).unwrap().scene().bodies()[0].x, 0.0);
/// assert_eq!(cache.latest().unwrap().scene().bodies()[0].x, 42.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SnapshotCache {
    snapshots: Vec<Snapshot>,
}

impl SnapshotCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deep-copy `scene` and append it as the newest snapshot.
    ///
    /// Returns the new snapshot's sequence number.
    pub fn capture(&mut self, scene: &Scene) -> u64 {
        let sequence = self.snapshots.len() as u64;
        self.snapshots.push(Snapshot::capture(sequence, scene));
        tracing::trace!(sequence, bodies = scene.len(), "captured snapshot");
        sequence
    }

    /// Number of snapshots captured.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether nothing has been captured yet.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Snapshot by capture order.
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// Most recently captured snapshot.
    pub fn latest(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    /// Iterate snapshots in capture order.
    pub fn iter(&self) -> slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }
}

impl<'a> IntoIterator for &'a SnapshotCache {
    type Item = &'a Snapshot;
    type IntoIter = slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}
