//! Reusable bodies and scenes.
//!
//! Masses and distances are loosely based on the real solar system:
//!
//! - [`sun`]: the heaviest body, attractor of everything else.
//! - [`earth`] and [`mars`]: planets on the positive x axis.
//! - [`solar_system`]: all three, with attractors wired to the Sun.

use orrery_core::{BodyId, BodyKind, CelestialBody, Scene};

/// Scene text matching [`solar_system`], with comments and blank lines.
pub const SOLAR_SYSTEM_TEXT: &str = "\
# Radius color mass x y Vx Vy name
Star 30 yellow 1.98892E30 0 0 0 0 Sun

Planet 5 blue 5.974E24 149.60E9 0 0 29.76E3 Earth
# The red planet
Planet 4 red 6.4191E23 228.0E9 0 0 24.13E3 Mars
";

pub fn sun() -> CelestialBody {
    CelestialBody::new(BodyKind::Star, "Sun")
        .with_radius(30.0)
        .with_color("yellow")
        .with_mass(1.98892e30)
}

pub fn earth() -> CelestialBody {
    CelestialBody::new(BodyKind::Planet, "Earth")
        .with_radius(5.0)
        .with_color("blue")
        .with_mass(5.974e24)
        .at(149.60e9, 0.0)
        .moving(0.0, 29.76e3)
}

pub fn mars() -> CelestialBody {
    CelestialBody::new(BodyKind::Planet, "Mars")
        .with_radius(4.0)
        .with_color("red")
        .with_mass(6.4191e23)
        .at(228.0e9, 0.0)
        .moving(0.0, 24.13e3)
}

/// Sun, Earth and Mars in that order, both planets attracted by the Sun.
///
/// The Sun carries the scene time, starting at zero.
pub fn solar_system() -> Scene {
    let mut scene = Scene::new();
    let sun_id = scene.push(sun().with_time(0.0));
    for planet in [earth(), mars()] {
        let id = scene.push(planet);
        scene
            .set_attractor(id, sun_id)
            .expect("fixture ids are in range");
    }
    scene
}

/// Id of the Sun within [`solar_system`].
pub const SUN_ID: BodyId = BodyId(0);
/// Id of the Earth within [`solar_system`].
pub const EARTH_ID: BodyId = BodyId(1);
/// Id of Mars within [`solar_system`].
pub const MARS_ID: BodyId = BodyId(2);
