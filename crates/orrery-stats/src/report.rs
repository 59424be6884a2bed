//! Statistics report writer.
//!
//! Layout: the snapshot count on the first line, then for each snapshot
//! in capture order its elapsed-time line followed by
//! `Distance from <satellite> to <attractor> is <distance>` for every
//! satellite pair.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::cache::SnapshotCache;
use crate::config::ReportConfig;
use crate::error::StatsError;
use crate::units::{body_distance, format_distance_with, format_duration};

/// Writes statistics reports from a [`SnapshotCache`].
///
/// # Examples
///
/// ```
/// use orrery_core::{BodyKind, CelestialBody, Scene};
/// use orrery_stats::{SnapshotCache, StatsReporter};
///
/// let mut scene = Scene::new();
/// let sun = scene.push(
///     CelestialBody::new(BodyKind::Star, "Sun").with_mass(2e30).with_time(90_061.0),
/// );
/// let earth = scene.push(
///     CelestialBody::new(BodyKind::Planet, "Earth").with_mass(6e24).at(42.3, 0.0),
/// );
/// scene.set_attractor(earth, sun).unwrap();
///
/// let mut cache = SnapshotCache::new();
/// cache.capture(&scene);
///
/// let mut out = Vec::new();
/// StatsReporter::default().write_report(&cache, &mut out).unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "1\n1 day 1 hour 1 minute 1 second\nDistance from Earth to Sun is 42 meters\n",
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct StatsReporter {
    config: ReportConfig,
}

impl StatsReporter {
    /// Create a reporter, validating the configuration.
    ///
    /// Fails with [`StatsError::Config`] if the configuration is invalid.
    pub fn new(config: ReportConfig) -> Result<Self, StatsError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Write the full report for `cache` to `w`.
    pub fn write_report(&self, cache: &SnapshotCache, w: &mut dyn Write) -> Result<(), StatsError> {
        writeln!(w, "{}", cache.len())?;
        for snapshot in cache {
            if self.config.emit_time_lines {
                writeln!(w, "{}", format_duration(snapshot.elapsed_seconds()))?;
            }
            for (satellite, attractor) in snapshot.satellites() {
                let distance = format_distance_with(
                    body_distance(attractor, satellite),
                    self.config.kilometre_threshold,
                );
                writeln!(
                    w,
                    "Distance from {} to {} is {distance}",
                    satellite.name, attractor.name
                )?;
            }
        }
        Ok(())
    }

    /// Write the report to a file, replacing any existing content.
    ///
    /// Fails with [`StatsError::FileAccess`] if the file cannot be created.
    pub fn save_report(
        &self,
        cache: &SnapshotCache,
        path: impl AsRef<Path>,
    ) -> Result<(), StatsError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| StatsError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        let mut out = BufWriter::new(file);
        self.write_report(cache, &mut out)?;
        out.flush()?;
        tracing::debug!(
            path = %path.display(),
            snapshots = cache.len(),
            "wrote statistics report"
        );
        Ok(())
    }
}

/// Write the report for `cache` to `path` with the default configuration.
pub fn report(cache: &SnapshotCache, path: impl AsRef<Path>) -> Result<(), StatsError> {
    StatsReporter::default().save_report(cache, path)
}
