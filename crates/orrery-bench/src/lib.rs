//! Benchmark scenes for the Orrery codec and statistics reporter.
//!
//! - [`synthetic_scene`]: one star plus `n` planets orbiting it
//! - [`synthetic_scene_text`]: the same scene as loadable file text

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use orrery_core::{BodyKind, CelestialBody, Scene};

/// Deterministic pseudo-random value in `[0, 1)` for body `i`.
fn unit_noise(seed: u64, i: u64) -> f64 {
    let mixed = seed
        .wrapping_mul(6364136223846793005)
        .wrapping_add(i.wrapping_mul(1442695040888963407));
    (mixed >> 11) as f64 / (1u64 << 53) as f64
}

/// Build a star with `n` planets at pseudo-random distances.
///
/// Planets are lighter than the star and attracted by it, so every
/// planet produces a distance line in a report. The star carries the
/// scene time.
pub fn synthetic_scene(n: usize, seed: u64) -> Scene {
    let mut scene = Scene::with_capacity(n + 1);
    let star = scene.push(
        CelestialBody::new(BodyKind::Star, "Star0")
            .with_radius(30.0)
            .with_color("yellow")
            .with_mass(2e30)
            .with_time(0.0),
    );

    for i in 0..n {
        let r = 1e3 + unit_noise(seed, i as u64) * 1e12;
        let angle = unit_noise(seed ^ 0x9E37_79B9, i as u64) * std::f64::consts::TAU;
        let id = scene.push(
            CelestialBody::new(BodyKind::Planet, format!("Planet{i}"))
                .with_radius(5.0)
                .with_color("blue")
                .with_mass(1e24)
                .at(r * angle.cos(), r * angle.sin())
                .moving(-angle.sin() * 3e4, angle.cos() * 3e4),
        );
        scene
            .set_attractor(id, star)
            .expect("both ids come from push on this scene");
    }
    scene
}

/// Render [`synthetic_scene`] as scene-file text, names included.
pub fn synthetic_scene_text(n: usize, seed: u64) -> String {
    let scene = synthetic_scene(n, seed);
    let mut text = String::from("# synthetic benchmark scene\n");
    for body in &scene {
        text.push_str(&format!(
            "{} {:?} {} {:?} {:?} {:?} {:?} {:?} {}\n",
            body.kind, body.radius, body.color, body.mass, body.x, body.y, body.vx, body.vy,
            body.name
        ));
    }
    text
}
