//! Scene file writer.
//!
//! [`SceneWriter`] streams formatted body lines to any `Write` sink.
//! [`save`] creates (or truncates) a file and writes a whole scene.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use orrery_core::{CelestialBody, Scene};

use crate::codec::write_body;
use crate::error::FormatError;

/// Writes bodies as scene-file lines.
///
/// Generic over `W: Write` so tests can use `Vec<u8>` and production
/// code can use `BufWriter<File>`.
///
/// # Examples
///
/// ```
/// use orrery_core::{BodyKind, CelestialBody, Scene};
/// use orrery_format::{SceneReader, SceneWriter};
///
/// let scene: Scene = [
///     CelestialBody::new(BodyKind::Star, "Sun").with_mass(2e30),
///     CelestialBody::new(BodyKind::Planet, "Earth").with_mass(6e24),
/// ]
/// .into_iter()
/// .collect();
///
/// let mut writer = SceneWriter::new(Vec::new());
/// writer.write_scene(&scene).unwrap();
/// assert_eq!(writer.bodies_written(), 2);
/// let text = String::from_utf8(writer.into_inner()).unwrap();
///
/// assert_eq!(text.lines().next(), Some("Star 0.0 white 2e30 0.0 0.0 0.0 0.0"));
///
/// // Names are not written, so the text no longer satisfies the grammar.
/// assert!(SceneReader::new(text.as_bytes()).read_scene().is_err());
/// ```
pub struct SceneWriter<W: Write> {
    writer: W,
    bodies_written: u64,
}

impl<W: Write> SceneWriter<W> {
    /// Wrap a sink.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            bodies_written: 0,
        }
    }

    /// Write one body line.
    pub fn write_body(&mut self, body: &CelestialBody) -> Result<(), FormatError> {
        write_body(&mut self.writer, body)?;
        self.bodies_written += 1;
        Ok(())
    }

    /// Write every body of the scene, in scene order.
    pub fn write_scene(&mut self, scene: &Scene) -> Result<(), FormatError> {
        for body in scene {
            self.write_body(body)?;
        }
        Ok(())
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<(), FormatError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Number of bodies written so far.
    pub fn bodies_written(&self) -> u64 {
        self.bodies_written
    }

    /// Consume the writer and return the underlying sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Save a scene to a file, replacing any existing content.
///
/// Fails with [`FormatError::FileAccess`] if the file cannot be created.
/// Not atomic: a write failure part way through leaves a partial file.
pub fn save(path: impl AsRef<Path>, scene: &Scene) -> Result<(), FormatError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| FormatError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = SceneWriter::new(BufWriter::new(file));
    writer.write_scene(scene)?;
    writer.flush()?;
    tracing::debug!(
        path = %path.display(),
        bodies = writer.bodies_written(),
        "saved scene"
    );
    Ok(())
}
