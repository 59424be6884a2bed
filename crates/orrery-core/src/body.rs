//! The celestial body record and its descriptors.
//!
//! A [`CelestialBody`] has a fixed shape regardless of its [`BodyKind`]:
//! the kind only selects the keyword used in the text form. Every field
//! is populated at construction.

use std::fmt;

use crate::id::BodyId;

/// Variant of a celestial body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyKind {
    /// A star; usually the attractor of the planets around it.
    Star,
    /// A planet orbiting some attractor.
    Planet,
}

impl BodyKind {
    /// All kinds, in keyword order.
    pub const ALL: [BodyKind; 2] = [BodyKind::Star, BodyKind::Planet];

    /// Canonical capitalized keyword used in scene files.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Star => "Star",
            Self::Planet => "Planet",
        }
    }

    /// Resolve a keyword regardless of case (`"STAR"`, `"planet"`, ...).
    ///
    /// Returns `None` for anything that is not a known record type.
    pub fn from_keyword_ignore_case(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.keyword().eq_ignore_ascii_case(token))
    }
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Names one field of a record line, in on-disk order.
///
/// Used by parsers to report which field of a line was missing or
/// invalid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyField {
    /// The leading record-type keyword.
    Keyword,
    /// Radius in pixels (`R`).
    Radius,
    /// Color token.
    Color,
    /// Mass (`m`).
    Mass,
    /// X coordinate.
    X,
    /// Y coordinate.
    Y,
    /// X velocity component (`Vx`).
    Vx,
    /// Y velocity component (`Vy`).
    Vy,
    /// Name token.
    Name,
}

impl BodyField {
    /// All fields in the order they appear on a record line.
    pub const ALL: [BodyField; 9] = [
        BodyField::Keyword,
        BodyField::Radius,
        BodyField::Color,
        BodyField::Mass,
        BodyField::X,
        BodyField::Y,
        BodyField::Vx,
        BodyField::Vy,
        BodyField::Name,
    ];

    /// Zero-based token position of this field on a record line.
    pub fn position(self) -> usize {
        match self {
            Self::Keyword => 0,
            Self::Radius => 1,
            Self::Color => 2,
            Self::Mass => 3,
            Self::X => 4,
            Self::Y => 5,
            Self::Vx => 6,
            Self::Vy => 7,
            Self::Name => 8,
        }
    }

    /// Short name as used in the file grammar (`R`, `m`, `Vx`, ...).
    pub fn label(self) -> &'static str {
        match self {
            Self::Keyword => "type",
            Self::Radius => "R",
            Self::Color => "color",
            Self::Mass => "m",
            Self::X => "x",
            Self::Y => "y",
            Self::Vx => "Vx",
            Self::Vy => "Vy",
            Self::Name => "name",
        }
    }
}

impl fmt::Display for BodyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A star or planet with its physical and visual attributes.
///
/// Fields are public: the physics and rendering collaborators mutate
/// positions and velocities in place between snapshots.
///
/// # Examples
///
/// ```
/// use orrery_core::{BodyKind, CelestialBody};
///
/// let earth = CelestialBody::new(BodyKind::Planet, "Earth")
///     .with_radius(5.0)
///     .with_color("blue")
///     .with_mass(5.974e24)
///     .at(149.6e9, 0.0)
///     .moving(0.0, 29.76e3);
///
/// assert_eq!(earth.kind, BodyKind::Planet);
/// assert_eq!(earth.name, "Earth");
/// assert!(earth.attractor.is_none());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CelestialBody {
    /// Star or planet.
    pub kind: BodyKind,
    /// Radius in pixels.
    pub radius: f64,
    /// Color token (no embedded whitespace).
    pub color: String,
    /// Mass.
    pub mass: f64,
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// X velocity component.
    pub vx: f64,
    /// Y velocity component.
    pub vy: f64,
    /// Name token (no embedded whitespace).
    pub name: String,
    /// The body this one orbits, set by the physics collaborator.
    pub attractor: Option<BodyId>,
    /// Simulation elapsed seconds, if this body tracks time.
    pub time: Option<f64>,
}

impl CelestialBody {
    /// Create a body at the origin with zero radius, mass and velocity.
    pub fn new(kind: BodyKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            radius: 0.0,
            color: String::from("white"),
            mass: 0.0,
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            name: name.into(),
            attractor: None,
            time: None,
        }
    }

    /// Set the radius in pixels.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Set the color token.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the mass.
    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Place the body at `(x, y)`.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set the velocity components.
    pub fn moving(mut self, vx: f64, vy: f64) -> Self {
        self.vx = vx;
        self.vy = vy;
        self
    }

    /// Stamp the simulation elapsed time.
    pub fn with_time(mut self, seconds: f64) -> Self {
        self.time = Some(seconds);
        self
    }

    /// Position as an `(x, y)` pair.
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}
