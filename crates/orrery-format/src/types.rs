//! Line classification and reader diagnostics.

use orrery_core::BodyKind;

/// What a single line of a scene file holds, judged by its first token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineKind {
    /// Blank line or `#` comment.
    Skip,
    /// A record whose keyword matched a known kind, ignoring case.
    Record(BodyKind),
    /// A record whose keyword is not a known kind.
    Unknown(String),
}

/// A line the reader passed over because its keyword was not recognized.
///
/// # Examples
///
/// ```
/// use orrery_format::SceneReader;
///
/// let text = "Moon 1 red 1 1 1 1 1 x\nStar 1 red 1 1 1 1 1 Sun\n";
/// let mut reader = SceneReader::new(text.as_bytes());
/// let scene = reader.read_scene().unwrap();
///
/// assert_eq!(scene.len(), 1);
/// assert_eq!(reader.skipped()[0].line_number, 1);
/// assert_eq!(reader.skipped()[0].keyword, "Moon");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedRecord {
    /// One-based line number within the source.
    pub line_number: usize,
    /// The unrecognized keyword as written.
    pub keyword: String,
}
