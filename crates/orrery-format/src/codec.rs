//! Line-level encode/decode for the scene format.
//!
//! A record line is `<Keyword> <R> <color> <m> <x> <y> <Vx> <Vy> <name>`
//! with fields separated by runs of whitespace. Tokens past the ninth are
//! ignored. Numbers are written with Rust's shortest round-trip float
//! representation, so every numeric field survives write-then-read
//! bit-exactly; the name does not survive because it is never written.

use std::io::Write;

use orrery_core::{BodyField, BodyKind, CelestialBody};
use smallvec::SmallVec;

use crate::error::FormatError;
use crate::types::LineKind;
use crate::{COMMENT_PREFIX, RECORD_TOKENS};

type Tokens<'a> = SmallVec<[&'a str; RECORD_TOKENS]>;

fn tokenize(line: &str) -> Tokens<'_> {
    line.split_whitespace().collect()
}

fn trim_terminator(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

// ── Classification ──────────────────────────────────────────────

/// Decide what a line holds without parsing its fields.
///
/// Blank lines and lines whose first non-whitespace character is `#`
/// are [`LineKind::Skip`]. Otherwise the first token selects the kind,
/// ignoring case.
pub fn classify(line: &str) -> LineKind {
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX) {
        return LineKind::Skip;
    }
    let keyword = trimmed.split_whitespace().next().unwrap_or_default();
    match BodyKind::from_keyword_ignore_case(keyword) {
        Some(kind) => LineKind::Record(kind),
        None => LineKind::Unknown(keyword.to_string()),
    }
}

// ── Decoding ────────────────────────────────────────────────────

fn malformed(field: BodyField, line: &str, detail: String) -> FormatError {
    FormatError::Malformed {
        field,
        line: trim_terminator(line).to_string(),
        detail,
    }
}

fn token<'a>(tokens: &Tokens<'a>, field: BodyField, line: &str) -> Result<&'a str, FormatError> {
    tokens.get(field.position()).copied().ok_or_else(|| {
        malformed(
            field,
            line,
            format!(
                "missing field: expected {RECORD_TOKENS} tokens, found {}",
                tokens.len()
            ),
        )
    })
}

fn number(tokens: &Tokens<'_>, field: BodyField, line: &str) -> Result<f64, FormatError> {
    let raw = token(tokens, field, line)?;
    raw.parse::<f64>()
        .map_err(|e| malformed(field, line, format!("{raw:?} is not a number ({e})")))
}

/// Parse a record line as a body of the given kind.
///
/// The first token must be exactly `kind`'s keyword (`Star` or
/// `Planet`, case-sensitive) even when the caller already dispatched on
/// a case-insensitive match; a mismatch is reported as
/// [`FormatError::TypeMismatch`].
///
/// # Examples
///
/// ```
/// use orrery_core::BodyKind;
/// use orrery_format::parse_body;
///
/// let sun = parse_body(BodyKind::Star, "Star 30 yellow 1.98892e30 0 0 0 0 Sun").unwrap();
/// assert_eq!(sun.mass, 1.98892e30);
/// assert_eq!(sun.name, "Sun");
///
/// assert!(parse_body(BodyKind::Planet, "Star 30 yellow 1 0 0 0 0 Sun").is_err());
/// ```
pub fn parse_body(kind: BodyKind, line: &str) -> Result<CelestialBody, FormatError> {
    let tokens = tokenize(line);
    let keyword = token(&tokens, BodyField::Keyword, line)?;
    if keyword != kind.keyword() {
        return Err(FormatError::TypeMismatch {
            expected: kind,
            found: keyword.to_string(),
            line: trim_terminator(line).to_string(),
        });
    }

    Ok(CelestialBody {
        kind,
        radius: number(&tokens, BodyField::Radius, line)?,
        color: token(&tokens, BodyField::Color, line)?.to_string(),
        mass: number(&tokens, BodyField::Mass, line)?,
        x: number(&tokens, BodyField::X, line)?,
        y: number(&tokens, BodyField::Y, line)?,
        vx: number(&tokens, BodyField::Vx, line)?,
        vy: number(&tokens, BodyField::Vy, line)?,
        name: token(&tokens, BodyField::Name, line)?.to_string(),
        attractor: None,
        time: None,
    })
}

/// Dispatch on the line's keyword and parse it.
///
/// Unlike the scene reader, this treats an unknown keyword as an error
/// ([`FormatError::UnknownRecordType`]). Blank and comment lines are
/// reported as a malformed keyword.
pub fn parse_line(line: &str) -> Result<CelestialBody, FormatError> {
    match classify(line) {
        LineKind::Record(kind) => parse_body(kind, line),
        LineKind::Unknown(keyword) => Err(FormatError::UnknownRecordType {
            keyword,
            line: trim_terminator(line).to_string(),
        }),
        LineKind::Skip => Err(malformed(
            BodyField::Keyword,
            line,
            "blank or comment line holds no record".to_string(),
        )),
    }
}

// ── Encoding ────────────────────────────────────────────────────

/// Render a body as one newline-terminated line of eight fields.
///
/// The name is deliberately left out, so a written line does not load
/// again until a name token is appended to it.
///
/// # Examples
///
/// ```
/// use orrery_core::{BodyKind, CelestialBody};
/// use orrery_format::format_body;
///
/// let sun = CelestialBody::new(BodyKind::Star, "Sun")
///     .with_radius(10.0)
///     .with_color("red")
///     .with_mass(1000.0)
///     .at(1.0, 2.0)
///     .moving(3.0, 4.0);
/// assert_eq!(format_body(&sun), "Star 10.0 red 1000.0 1.0 2.0 3.0 4.0\n");
/// ```
pub fn format_body(body: &CelestialBody) -> String {
    format!(
        "{} {:?} {} {:?} {:?} {:?} {:?} {:?}\n",
        body.kind.keyword(),
        body.radius,
        body.color,
        body.mass,
        body.x,
        body.y,
        body.vx,
        body.vy,
    )
}

/// Write one formatted body line.
pub fn write_body(w: &mut dyn Write, body: &CelestialBody) -> Result<(), FormatError> {
    w.write_all(format_body(body).as_bytes())?;
    Ok(())
}
