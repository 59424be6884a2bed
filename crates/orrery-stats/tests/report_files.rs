//! End-to-end statistics tests: load a scene file, run a toy orbit,
//! capture snapshots, and check the report written to disk.

use orrery_core::Scene;
use orrery_format::load;
use orrery_stats::{report, ReportConfig, SnapshotCache, StatsError, StatsReporter};
use orrery_test_utils::{scene_file, EARTH_ID, MARS_ID, SOLAR_SYSTEM_TEXT, SUN_ID};

/// Load the fixture scene and wire attractors the way the physics side would.
fn loaded_solar_system() -> Scene {
    let file = scene_file(SOLAR_SYSTEM_TEXT);
    let mut scene = load(file.path()).unwrap();
    scene.set_attractor(EARTH_ID, SUN_ID).unwrap();
    scene.set_attractor(MARS_ID, SUN_ID).unwrap();
    scene
}

/// Advance every body by one explicit Euler step of `dt` seconds.
fn drift(scene: &mut Scene, dt: f64) {
    for body in scene.iter_mut() {
        body.x += body.vx * dt;
        body.y += body.vy * dt;
        if let Some(t) = body.time.as_mut() {
            *t += dt;
        }
    }
}

fn read_report(cache: &SnapshotCache) -> String {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stats.txt");
    report(cache, &path).unwrap();
    std::fs::read_to_string(&path).unwrap()
}

#[test]
fn report_has_count_then_time_and_distance_lines() {
    let mut scene = loaded_solar_system();
    scene.get_mut(SUN_ID).unwrap().time = Some(0.0);

    let mut cache = SnapshotCache::new();
    cache.capture(&scene);
    drift(&mut scene, 86_400.0);
    cache.capture(&scene);

    let text = read_report(&cache);
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(
        lines,
        [
            "2",
            "",
            "Distance from Earth to Sun is 149600000.0 km",
            "Distance from Mars to Sun is 228000000.0 km",
            "1 day",
            "Distance from Earth to Sun is 149622095.0 km",
            "Distance from Mars to Sun is 228009531.0 km",
        ]
    );
}

#[test]
fn snapshots_are_unaffected_by_later_motion() {
    let mut scene = loaded_solar_system();
    scene.get_mut(SUN_ID).unwrap().time = Some(3_600.0);

    let mut cache = SnapshotCache::new();
    cache.capture(&scene);
    let before = read_report(&cache);

    for _ in 0..10 {
        drift(&mut scene, 1_000.0);
    }
    assert_eq!(read_report(&cache), before);
    assert_eq!(cache.get(0).unwrap().scene().get(EARTH_ID).unwrap().y, 0.0);
}

#[test]
fn report_overwrites_previous_file() {
    let mut cache = SnapshotCache::new();
    cache.capture(&loaded_solar_system());

    let file = scene_file(&"stale\n".repeat(50));
    report(&cache, file.path()).unwrap();
    let text = std::fs::read_to_string(file.path()).unwrap();
    assert!(text.starts_with("1\n"));
    assert!(!text.contains("stale"));
}

#[test]
fn custom_reporter_writes_to_file() {
    let mut cache = SnapshotCache::new();
    cache.capture(&loaded_solar_system());

    let reporter = StatsReporter::new(ReportConfig {
        kilometre_threshold: 1e12,
        ..ReportConfig::default()
    })
    .unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("metres.txt");
    reporter.save_report(&cache, &path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("Distance from Earth to Sun is 149600000000 meters"));
}

#[test]
fn report_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("stats.txt");
    let err = report(&SnapshotCache::new(), &path).unwrap_err();
    match err {
        StatsError::FileAccess { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected FileAccess, got {other:?}"),
    }
}
