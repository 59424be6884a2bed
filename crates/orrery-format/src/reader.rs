//! Scene file reader.
//!
//! [`SceneReader`] pulls bodies line by line from any `BufRead` source.
//! [`load`] opens a file and reads it to completion.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use orrery_core::{CelestialBody, Scene};

use crate::codec::{classify, parse_body};
use crate::error::FormatError;
use crate::types::{LineKind, SkippedRecord};

/// Reads bodies from a line-oriented text stream.
///
/// Generic over `R: BufRead` so tests can use `&[u8]` and production
/// code can use `BufReader<File>`.
///
/// Blank and comment lines are passed over silently. Lines with an
/// unknown keyword are logged, recorded in [`skipped`](Self::skipped),
/// and passed over. A malformed `Star` or `Planet` line stops the read
/// with an error.
pub struct SceneReader<R: BufRead> {
    reader: R,
    buf: String,
    lines_read: usize,
    bodies_read: usize,
    skipped: Vec<SkippedRecord>,
}

impl<R: BufRead> SceneReader<R> {
    /// Wrap a line source.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            lines_read: 0,
            bodies_read: 0,
            skipped: Vec::new(),
        }
    }

    /// Read the next body, or `None` once the source is exhausted.
    pub fn next_body(&mut self) -> Result<Option<CelestialBody>, FormatError> {
        loop {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }
            self.lines_read += 1;

            match classify(&self.buf) {
                LineKind::Skip => continue,
                LineKind::Unknown(keyword) => {
                    tracing::warn!(
                        line_number = self.lines_read,
                        keyword = %keyword,
                        "unknown space object, skipping line"
                    );
                    self.skipped.push(SkippedRecord {
                        line_number: self.lines_read,
                        keyword,
                    });
                }
                LineKind::Record(kind) => {
                    let body = parse_body(kind, &self.buf)?;
                    self.bodies_read += 1;
                    return Ok(Some(body));
                }
            }
        }
    }

    /// Read all remaining bodies into a scene, in source order.
    pub fn read_scene(&mut self) -> Result<Scene, FormatError> {
        self.bodies().collect()
    }

    /// Iterate the remaining bodies.
    ///
    /// The iterator fuses after the first error.
    pub fn bodies(&mut self) -> Bodies<'_, R> {
        Bodies {
            reader: self,
            done: false,
        }
    }

    /// Number of lines consumed so far, including skipped ones.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Number of bodies produced so far.
    pub fn bodies_read(&self) -> usize {
        self.bodies_read
    }

    /// Lines passed over because their keyword was not recognized.
    pub fn skipped(&self) -> &[SkippedRecord] {
        &self.skipped
    }

    /// Consume the reader and return the underlying source.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

/// Iterator adapter over the bodies of a [`SceneReader`].
pub struct Bodies<'a, R: BufRead> {
    reader: &'a mut SceneReader<R>,
    done: bool,
}

impl<R: BufRead> Iterator for Bodies<'_, R> {
    type Item = Result<CelestialBody, FormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.reader.next_body() {
            Ok(Some(body)) => Some(Ok(body)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Load a scene file.
///
/// Fails with [`FormatError::FileAccess`] if the file cannot be opened.
/// The file is closed before returning, whether or not parsing
/// succeeded.
pub fn load(path: impl AsRef<Path>) -> Result<Scene, FormatError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| FormatError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = SceneReader::new(BufReader::new(file));
    let scene = reader.read_scene()?;
    tracing::debug!(
        path = %path.display(),
        bodies = scene.len(),
        lines = reader.lines_read(),
        skipped = reader.skipped().len(),
        "loaded scene"
    );
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_core::{BodyField, BodyKind};

    const SOLAR: &str = "\
# Solar system, two bodies
Star 30 yellow 1.98892E30 0 0 0 0 Sun

Planet 5 blue 5.974E24 149.6E9 0 0 29.76E3 Earth
";

    #[test]
    fn reads_bodies_in_order() {
        let mut reader = SceneReader::new(SOLAR.as_bytes());
        let scene = reader.read_scene().unwrap();
        let names: Vec<_> = scene.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, ["Sun", "Earth"]);
        assert_eq!(scene.bodies()[0].kind, BodyKind::Star);
        assert_eq!(scene.bodies()[1].kind, BodyKind::Planet);
        assert_eq!(reader.lines_read(), 4);
        assert_eq!(reader.bodies_read(), 2);
        assert!(reader.skipped().is_empty());
    }

    #[test]
    fn next_body_steps_one_at_a_time() {
        let mut reader = SceneReader::new(SOLAR.as_bytes());
        assert_eq!(reader.next_body().unwrap().unwrap().name, "Sun");
        assert_eq!(reader.next_body().unwrap().unwrap().name, "Earth");
        assert!(reader.next_body().unwrap().is_none());
        assert!(reader.next_body().unwrap().is_none());
    }

    #[test]
    fn unknown_keyword_is_recorded_and_skipped() {
        let text = "Star 1 red 1 1 1 1 1 a\nMoon 1 red 1 1 1 1 1 x\nplanet 1 red 1 1 1 1 1 b\n";
        let mut reader = SceneReader::new(text.as_bytes());
        let err = reader.read_scene().unwrap_err();
        // Lower-case "planet" dispatches but fails the exact keyword check.
        assert!(matches!(err, FormatError::TypeMismatch { .. }));
        assert_eq!(
            reader.skipped(),
            [SkippedRecord {
                line_number: 2,
                keyword: "Moon".to_string()
            }]
        );
    }

    #[test]
    fn malformed_line_stops_iteration() {
        let text = "Star 1 red 1 1 1\nPlanet 1 red 1 1 1 1 1 b\n";
        let mut reader = SceneReader::new(text.as_bytes());
        let mut bodies = reader.bodies();
        assert!(matches!(
            bodies.next(),
            Some(Err(FormatError::Malformed {
                field: BodyField::Vx,
                ..
            }))
        ));
        assert!(bodies.next().is_none());
    }

    #[test]
    fn crlf_line_endings_are_accepted() {
        let text = "Star 1 red 1 1 1 1 1 Sun\r\n\r\nPlanet 1 red 1 1 1 1 1 Earth\r\n";
        let scene = SceneReader::new(text.as_bytes()).read_scene().unwrap();
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.bodies()[1].name, "Earth");
    }

    #[test]
    fn empty_source_gives_empty_scene() {
        let scene = SceneReader::new("".as_bytes()).read_scene().unwrap();
        assert!(scene.is_empty());
    }

    #[test]
    fn missing_file_is_file_access_error() {
        let err = load("/nonexistent/orrery/scene.txt").unwrap_err();
        match err {
            FormatError::FileAccess { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/orrery/scene.txt"));
            }
            other => panic!("expected FileAccess, got {other:?}"),
        }
    }
}
